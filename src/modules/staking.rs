//! Module basic for the [Staking module](https://docs.cosmos.network/v0.45/modules/staking/)
use super::{ModuleBasic, TypeRegistry};

#[derive(Clone, Copy, Debug, Default)]
pub struct Staking;

impl ModuleBasic for Staking {
    fn name(&self) -> &'static str {
        "staking"
    }

    fn register_types(&self, registry: &mut TypeRegistry) {
        registry.register("/cosmos.staking.v1beta1.MsgCreateValidator");
        registry.register("/cosmos.staking.v1beta1.MsgEditValidator");
        registry.register("/cosmos.staking.v1beta1.MsgDelegate");
        registry.register("/cosmos.staking.v1beta1.MsgBeginRedelegate");
        registry.register("/cosmos.staking.v1beta1.MsgUndelegate");
    }
}
