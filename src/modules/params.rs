//! Module basic for the Params module
use super::{ModuleBasic, ProposalHandler, TypeRegistry};

/// Handler for submitting parameter change proposals, contributed to the
/// governance descriptor during registry composition
pub const PROPOSAL_HANDLER: ProposalHandler =
    ProposalHandler::new("params", "/cosmos.params.v1beta1.ParameterChangeProposal");

#[derive(Clone, Copy, Debug, Default)]
pub struct Params;

impl ModuleBasic for Params {
    fn name(&self) -> &'static str {
        "params"
    }

    fn register_types(&self, registry: &mut TypeRegistry) {
        registry.register("/cosmos.params.v1beta1.ParameterChangeProposal");
    }
}
