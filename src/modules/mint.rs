//! Module basic for the Mint module
use super::{ModuleBasic, TypeRegistry};

/// Descriptor for the mint module. Minting is driven by block production
/// rather than client messages, so its codec hook is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mint;

impl ModuleBasic for Mint {
    fn name(&self) -> &'static str {
        "mint"
    }

    fn register_types(&self, _registry: &mut TypeRegistry) {}
}
