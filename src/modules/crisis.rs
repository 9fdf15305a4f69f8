//! Module basic for the Crisis module
use super::{ModuleBasic, TypeRegistry};

#[derive(Clone, Copy, Debug, Default)]
pub struct Crisis;

impl ModuleBasic for Crisis {
    fn name(&self) -> &'static str {
        "crisis"
    }

    fn register_types(&self, registry: &mut TypeRegistry) {
        registry.register("/cosmos.crisis.v1beta1.MsgVerifyInvariant");
    }
}
