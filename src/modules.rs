//! Protocol module basics.
//!
//! A chain client carries a fixed, ordered set of module descriptors so that
//! its encoding layer knows every protocol module it must be able to encode
//! and decode for. The set is composed once at process start with
//! [`ModuleRegistryBuilder`] (or [`ModuleRegistry::standard()`]) and shared
//! by reference across clients; there is no mutation after construction.
use std::{fmt, sync::Arc};

pub use self::{
    auth::Auth, authz::Authz, bank::Bank, capability::Capability, crisis::Crisis,
    distribution::Distribution, feegrant::Feegrant, gov::Gov, ibc::Ibc, mint::Mint,
    params::Params, slashing::Slashing, staking::Staking, transfer::Transfer, upgrade::Upgrade,
};

pub mod auth;
pub mod authz;
pub mod bank;
pub mod capability;
pub mod crisis;
pub mod distribution;
pub mod feegrant;
pub mod gov;
pub mod ibc;
pub mod mint;
pub mod params;
pub mod slashing;
pub mod staking;
pub mod transfer;
pub mod upgrade;

/// Capability bundle identifying one protocol module.
///
/// Command wiring for a module lives with the consuming application; this
/// seam only covers identity and codec registration.
pub trait ModuleBasic: Send + Sync {
    /// The module's identity. Unique within a registry.
    fn name(&self) -> &'static str;

    /// Registers the protobuf type URLs the module contributes to the
    /// encoding layer.
    fn register_types(&self, registry: &mut TypeRegistry);
}

/// Ordered collection of protobuf type URLs contributed by module basics.
/// Registration is idempotent, so modules that share proposal content types
/// do not produce duplicates.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    type_urls: Vec<&'static str>,
}

impl TypeRegistry {
    pub fn register(&mut self, type_url: &'static str) {
        if !self.type_urls.contains(&type_url) {
            self.type_urls.push(type_url);
        }
    }

    pub fn contains(&self, type_url: &str) -> bool {
        self.type_urls.iter().any(|url| *url == type_url)
    }

    pub fn type_urls(&self) -> &[&'static str] {
        &self.type_urls
    }

    pub fn len(&self) -> usize {
        self.type_urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.type_urls.is_empty()
    }
}

/// Hook contributed by a module whose client tooling can submit governance
/// proposal content, consumed by [`Gov::new`] when the registry is composed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProposalHandler {
    module: &'static str,
    type_url: &'static str,
}

impl ProposalHandler {
    pub const fn new(module: &'static str, type_url: &'static str) -> ProposalHandler {
        ProposalHandler { module, type_url }
    }

    /// The module contributing the handler
    pub fn module(&self) -> &'static str {
        self.module
    }

    /// Type URL of the proposal content the handler submits
    pub fn type_url(&self) -> &'static str {
        self.type_url
    }
}

/// Ordered, duplicate-free set of module basics shared by every chain client
/// in a process. Cloning is cheap and clones share the same backing storage.
#[derive(Clone)]
pub struct ModuleRegistry {
    modules: Arc<Vec<Arc<dyn ModuleBasic>>>,
}

impl ModuleRegistry {
    /// Composes the standard Cosmos SDK module set. The proposal handlers
    /// contributed by params, distribution, and upgrade are resolved before
    /// the governance descriptor is built.
    pub fn standard() -> ModuleRegistry {
        let proposal_handlers = [
            params::PROPOSAL_HANDLER,
            distribution::PROPOSAL_HANDLER,
            upgrade::PROPOSAL_HANDLER,
            upgrade::CANCEL_PROPOSAL_HANDLER,
        ];

        ModuleRegistryBuilder::new()
            .with(Auth)
            .with(Authz)
            .with(Bank)
            .with(Capability)
            .with(Gov::new(proposal_handlers))
            .with(Crisis)
            .with(Distribution)
            .with(Feegrant)
            .with(Mint)
            .with(Params)
            .with(Slashing)
            .with(Staking)
            .with(Upgrade)
            .with(Transfer)
            .with(Ibc)
            .build()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ModuleBasic> {
        self.modules.iter().map(|module| module.as_ref())
    }

    /// Module identities in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|module| module.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Runs every module's codec registration hook in registry order
    pub fn register_types(&self, registry: &mut TypeRegistry) {
        for module in self.iter() {
            module.register_types(registry);
        }
    }
}

impl Default for ModuleRegistry {
    fn default() -> ModuleRegistry {
        ModuleRegistry {
            modules: Arc::new(Vec::new()),
        }
    }
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModuleRegistry").field(&self.names()).finish()
    }
}

impl PartialEq for ModuleRegistry {
    fn eq(&self, other: &ModuleRegistry) -> bool {
        self.names() == other.names()
    }
}

/// Builds a [`ModuleRegistry`].
///
/// Registering two modules with the same name aborts the process: a client
/// whose module set is ambiguous must not start.
#[derive(Default)]
pub struct ModuleRegistryBuilder {
    modules: Vec<Arc<dyn ModuleBasic>>,
}

impl ModuleRegistryBuilder {
    pub fn new() -> ModuleRegistryBuilder {
        ModuleRegistryBuilder::default()
    }

    pub fn with(mut self, module: impl ModuleBasic + 'static) -> ModuleRegistryBuilder {
        if self.modules.iter().any(|m| m.name() == module.name()) {
            panic!("duplicate module registration: {}", module.name());
        }
        self.modules.push(Arc::new(module));

        self
    }

    pub fn build(self) -> ModuleRegistry {
        ModuleRegistry {
            modules: Arc::new(self.modules),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_composition_is_deterministic() {
        let first = ModuleRegistry::standard();
        let second = ModuleRegistry::standard();

        assert_eq!(first.len(), second.len());
        assert_eq!(first.names(), second.names());
        assert_eq!(
            first.names(),
            vec![
                "auth",
                "authz",
                "bank",
                "capability",
                "gov",
                "crisis",
                "distribution",
                "feegrant",
                "mint",
                "params",
                "slashing",
                "staking",
                "upgrade",
                "transfer",
                "ibc",
            ]
        );
    }

    #[test]
    fn standard_composition_has_no_duplicates() {
        let registry = ModuleRegistry::standard();
        let unique: HashSet<&'static str> = registry.names().into_iter().collect();

        assert_eq!(unique.len(), registry.len());
    }

    #[test]
    #[should_panic(expected = "duplicate module registration: bank")]
    fn duplicate_registration_aborts() {
        ModuleRegistryBuilder::new().with(Bank).with(Bank).build();
    }

    #[test]
    fn registers_contributed_proposal_content() {
        let registry = ModuleRegistry::standard();
        let mut types = TypeRegistry::default();
        registry.register_types(&mut types);

        assert!(types.contains("/cosmos.params.v1beta1.ParameterChangeProposal"));
        assert!(types.contains("/cosmos.distribution.v1beta1.CommunityPoolSpendProposal"));
        assert!(types.contains("/cosmos.upgrade.v1beta1.SoftwareUpgradeProposal"));
        assert!(types.contains("/cosmos.upgrade.v1beta1.CancelSoftwareUpgradeProposal"));
    }

    #[test]
    fn type_registration_is_idempotent() {
        let mut types = TypeRegistry::default();
        types.register("/cosmos.bank.v1beta1.MsgSend");
        types.register("/cosmos.bank.v1beta1.MsgSend");

        assert_eq!(types.len(), 1);

        let registry = ModuleRegistry::standard();
        let mut first = TypeRegistry::default();
        let mut second = TypeRegistry::default();
        registry.register_types(&mut first);
        registry.register_types(&mut second);

        assert_eq!(first.type_urls(), second.type_urls());
    }

    #[test]
    fn clones_share_composition() {
        let registry = ModuleRegistry::standard();
        let clone = registry.clone();

        assert_eq!(registry, clone);
        assert!(Arc::ptr_eq(&registry.modules, &clone.modules));
    }
}
