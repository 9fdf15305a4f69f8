//! Module basic for the Slashing module
use super::{ModuleBasic, TypeRegistry};

#[derive(Clone, Copy, Debug, Default)]
pub struct Slashing;

impl ModuleBasic for Slashing {
    fn name(&self) -> &'static str {
        "slashing"
    }

    fn register_types(&self, registry: &mut TypeRegistry) {
        registry.register("/cosmos.slashing.v1beta1.MsgUnjail");
    }
}
