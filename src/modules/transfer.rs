//! Module basic for the IBC transfer application module
use super::{ModuleBasic, TypeRegistry};

#[derive(Clone, Copy, Debug, Default)]
pub struct Transfer;

impl ModuleBasic for Transfer {
    fn name(&self) -> &'static str {
        "transfer"
    }

    fn register_types(&self, registry: &mut TypeRegistry) {
        registry.register("/ibc.applications.transfer.v1.MsgTransfer");
    }
}
