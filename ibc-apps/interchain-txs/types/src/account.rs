use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_core_host_types::identifiers::{ChannelId, ConnectionId, PortId};
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

/// Handshake state of an interchain account channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountState {
    /// The handshake was opened and awaits the host's acknowledgement.
    Init,
    /// The handshake completed and the account address is bound.
    Open,
    /// The channel closed; registering again reopens it.
    Closed,
}

impl AccountState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl Display for AccountState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.as_str())
    }
}

/// An interchain account registration, keyed by `(connection_id, port_id)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterchainAccount {
    pub owner: Signer,
    pub interchain_account_id: String,
    pub connection_id: ConnectionId,
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub state: AccountState,
    /// Bound once by the first successful acknowledgement; kept across
    /// channel closures.
    pub address: Option<String>,
}

impl InterchainAccount {
    /// The channel transactions are sent on, if the handshake completed.
    pub fn active_channel(&self) -> Option<&ChannelId> {
        match self.state {
            AccountState::Open => Some(&self.channel_id),
            AccountState::Init | AccountState::Closed => None,
        }
    }
}
