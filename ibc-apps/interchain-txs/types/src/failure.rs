use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_core_host_types::identifiers::{ChannelId, ConnectionId, PortId, Sequence};
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;
use ibc_proto::google::protobuf::Any;

/// A transaction sent to a host and awaiting its acknowledgement or timeout.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingInterchainTx {
    pub from_address: Signer,
    pub interchain_account_id: String,
    pub connection_id: ConnectionId,
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub sequence: Sequence,
    pub msgs: Vec<Any>,
    pub memo: String,
    /// Absolute timeout, in nanoseconds since the Unix epoch.
    pub timeout_timestamp: u64,
}

/// How a sent transaction failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AckType {
    /// The host acknowledged the packet with an error.
    Error,
    /// The packet timed out before the host received it.
    Timeout,
}

impl AckType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ack",
            Self::Timeout => "timeout",
        }
    }
}

impl Display for AckType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded transaction failure, owned by the address that submitted it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    /// Assigned by the recorder from one counter shared by all addresses.
    pub id: u64,
    pub address: Signer,
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub sequence: Sequence,
    pub ack_type: AckType,
    /// Error reported by the host, empty for timeouts.
    pub error: String,
}
