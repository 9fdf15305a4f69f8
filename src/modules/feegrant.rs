//! Module basic for the [Feegrant module](https://docs.cosmos.network/v0.45/modules/feegrant/)
use super::{ModuleBasic, TypeRegistry};

#[derive(Clone, Copy, Debug, Default)]
pub struct Feegrant;

impl ModuleBasic for Feegrant {
    fn name(&self) -> &'static str {
        "feegrant"
    }

    fn register_types(&self, registry: &mut TypeRegistry) {
        registry.register("/cosmos.feegrant.v1beta1.MsgGrantAllowance");
        registry.register("/cosmos.feegrant.v1beta1.MsgRevokeAllowance");
        registry.register("/cosmos.feegrant.v1beta1.BasicAllowance");
        registry.register("/cosmos.feegrant.v1beta1.PeriodicAllowance");
        registry.register("/cosmos.feegrant.v1beta1.AllowedMsgAllowance");
    }
}
