//! Module basic for the [Distribution module](https://docs.cosmos.network/v0.45/modules/distribution/)
use super::{ModuleBasic, ProposalHandler, TypeRegistry};

/// Handler for submitting community pool spend proposals, contributed to the
/// governance descriptor during registry composition
pub const PROPOSAL_HANDLER: ProposalHandler = ProposalHandler::new(
    "distribution",
    "/cosmos.distribution.v1beta1.CommunityPoolSpendProposal",
);

#[derive(Clone, Copy, Debug, Default)]
pub struct Distribution;

impl ModuleBasic for Distribution {
    fn name(&self) -> &'static str {
        "distribution"
    }

    fn register_types(&self, registry: &mut TypeRegistry) {
        registry.register("/cosmos.distribution.v1beta1.MsgSetWithdrawAddress");
        registry.register("/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward");
        registry.register("/cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission");
        registry.register("/cosmos.distribution.v1beta1.MsgFundCommunityPool");
        registry.register("/cosmos.distribution.v1beta1.CommunityPoolSpendProposal");
    }
}
