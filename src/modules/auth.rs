//! Module basic for the [Auth module](https://docs.cosmos.network/v0.45/modules/auth/)
use super::{ModuleBasic, TypeRegistry};

/// Descriptor for the auth module, which owns the chain's account types
#[derive(Clone, Copy, Debug, Default)]
pub struct Auth;

impl ModuleBasic for Auth {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn register_types(&self, registry: &mut TypeRegistry) {
        registry.register("/cosmos.auth.v1beta1.BaseAccount");
        registry.register("/cosmos.auth.v1beta1.ModuleAccount");
    }
}
