//! Module basic for the [Bank module](https://docs.cosmos.network/v0.45/modules/bank/)
use super::{ModuleBasic, TypeRegistry};

/// Descriptor for the bank module, which handles token transfers
#[derive(Clone, Copy, Debug, Default)]
pub struct Bank;

impl ModuleBasic for Bank {
    fn name(&self) -> &'static str {
        "bank"
    }

    fn register_types(&self, registry: &mut TypeRegistry) {
        registry.register("/cosmos.bank.v1beta1.MsgSend");
        registry.register("/cosmos.bank.v1beta1.MsgMultiSend");
        registry.register("/cosmos.bank.v1beta1.SendAuthorization");
    }
}
