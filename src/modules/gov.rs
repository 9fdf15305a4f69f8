//! Module basic for the [Gov module](https://docs.cosmos.network/v0.45/modules/gov/)
use super::{ModuleBasic, ProposalHandler, TypeRegistry};

/// Descriptor for the governance module.
///
/// Unlike the unit descriptors, gov is parameterized by the proposal
/// handlers other modules contribute, so those modules must be known before
/// this descriptor is constructed.
#[derive(Clone, Debug, Default)]
pub struct Gov {
    proposal_handlers: Vec<ProposalHandler>,
}

impl Gov {
    pub fn new(proposal_handlers: impl IntoIterator<Item = ProposalHandler>) -> Gov {
        Gov {
            proposal_handlers: proposal_handlers.into_iter().collect(),
        }
    }

    /// The contributed proposal handlers in contribution order
    pub fn proposal_handlers(&self) -> &[ProposalHandler] {
        &self.proposal_handlers
    }
}

impl ModuleBasic for Gov {
    fn name(&self) -> &'static str {
        "gov"
    }

    fn register_types(&self, registry: &mut TypeRegistry) {
        registry.register("/cosmos.gov.v1beta1.MsgSubmitProposal");
        registry.register("/cosmos.gov.v1beta1.MsgDeposit");
        registry.register("/cosmos.gov.v1beta1.MsgVote");
        registry.register("/cosmos.gov.v1beta1.MsgVoteWeighted");
        registry.register("/cosmos.gov.v1beta1.TextProposal");

        for handler in &self.proposal_handlers {
            registry.register(handler.type_url());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::{distribution, params, upgrade};

    #[test]
    fn registers_handler_content_types() {
        let gov = Gov::new([
            params::PROPOSAL_HANDLER,
            distribution::PROPOSAL_HANDLER,
            upgrade::PROPOSAL_HANDLER,
            upgrade::CANCEL_PROPOSAL_HANDLER,
        ]);

        let mut registry = TypeRegistry::default();
        gov.register_types(&mut registry);

        assert!(registry.contains("/cosmos.params.v1beta1.ParameterChangeProposal"));
        assert!(registry.contains("/cosmos.upgrade.v1beta1.CancelSoftwareUpgradeProposal"));
        assert_eq!(gov.proposal_handlers().len(), 4);
        assert_eq!(gov.proposal_handlers()[0].module(), "params");
    }

    #[test]
    fn bare_gov_registers_only_its_own_types() {
        let gov = Gov::default();

        let mut registry = TypeRegistry::default();
        gov.register_types(&mut registry);

        assert_eq!(registry.len(), 5);
    }
}
