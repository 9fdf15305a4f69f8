//! Module basic for the [Authz module](https://docs.cosmos.network/v0.45/modules/authz/)
use super::{ModuleBasic, TypeRegistry};

#[derive(Clone, Copy, Debug, Default)]
pub struct Authz;

impl ModuleBasic for Authz {
    fn name(&self) -> &'static str {
        "authz"
    }

    fn register_types(&self, registry: &mut TypeRegistry) {
        registry.register("/cosmos.authz.v1beta1.MsgGrant");
        registry.register("/cosmos.authz.v1beta1.MsgExec");
        registry.register("/cosmos.authz.v1beta1.MsgRevoke");
        registry.register("/cosmos.authz.v1beta1.GenericAuthorization");
    }
}
