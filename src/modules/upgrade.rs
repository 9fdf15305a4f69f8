//! Module basic for the Upgrade module
use super::{ModuleBasic, ProposalHandler, TypeRegistry};

/// Handler for submitting software upgrade proposals
pub const PROPOSAL_HANDLER: ProposalHandler =
    ProposalHandler::new("upgrade", "/cosmos.upgrade.v1beta1.SoftwareUpgradeProposal");

/// Handler for cancelling a pending software upgrade
pub const CANCEL_PROPOSAL_HANDLER: ProposalHandler = ProposalHandler::new(
    "upgrade",
    "/cosmos.upgrade.v1beta1.CancelSoftwareUpgradeProposal",
);

#[derive(Clone, Copy, Debug, Default)]
pub struct Upgrade;

impl ModuleBasic for Upgrade {
    fn name(&self) -> &'static str {
        "upgrade"
    }

    fn register_types(&self, registry: &mut TypeRegistry) {
        registry.register("/cosmos.upgrade.v1beta1.SoftwareUpgradeProposal");
        registry.register("/cosmos.upgrade.v1beta1.CancelSoftwareUpgradeProposal");
    }
}
