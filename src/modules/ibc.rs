//! Module basic for the IBC core module
use super::{ModuleBasic, TypeRegistry};

/// Descriptor for IBC core: client, connection, and channel handshake and
/// packet relay messages
#[derive(Clone, Copy, Debug, Default)]
pub struct Ibc;

impl ModuleBasic for Ibc {
    fn name(&self) -> &'static str {
        "ibc"
    }

    fn register_types(&self, registry: &mut TypeRegistry) {
        registry.register("/ibc.core.client.v1.MsgCreateClient");
        registry.register("/ibc.core.client.v1.MsgUpdateClient");
        registry.register("/ibc.core.client.v1.MsgUpgradeClient");
        registry.register("/ibc.core.client.v1.MsgSubmitMisbehaviour");
        registry.register("/ibc.core.connection.v1.MsgConnectionOpenInit");
        registry.register("/ibc.core.connection.v1.MsgConnectionOpenTry");
        registry.register("/ibc.core.connection.v1.MsgConnectionOpenAck");
        registry.register("/ibc.core.connection.v1.MsgConnectionOpenConfirm");
        registry.register("/ibc.core.channel.v1.MsgChannelOpenInit");
        registry.register("/ibc.core.channel.v1.MsgChannelOpenTry");
        registry.register("/ibc.core.channel.v1.MsgChannelOpenAck");
        registry.register("/ibc.core.channel.v1.MsgChannelOpenConfirm");
        registry.register("/ibc.core.channel.v1.MsgChannelCloseInit");
        registry.register("/ibc.core.channel.v1.MsgChannelCloseConfirm");
        registry.register("/ibc.core.channel.v1.MsgRecvPacket");
        registry.register("/ibc.core.channel.v1.MsgAcknowledgement");
        registry.register("/ibc.core.channel.v1.MsgTimeout");
        registry.register("/ibc.core.channel.v1.MsgTimeoutOnClose");
    }
}
