//! Module basic for the Capability module
use super::{ModuleBasic, TypeRegistry};

/// Descriptor for the capability module. It has no client-facing messages,
/// so its codec hook is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct Capability;

impl ModuleBasic for Capability {
    fn name(&self) -> &'static str {
        "capability"
    }

    fn register_types(&self, _registry: &mut TypeRegistry) {}
}
