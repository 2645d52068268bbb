//! Defines the interchain transactions error type
use displaydoc::Display;
use ibc_core_host_types::error::IdentifierError;
use ibc_core_host_types::identifiers::{ChannelId, ConnectionId, PortId, Sequence};
use ibc_primitives::prelude::*;

#[derive(Display, Debug)]
pub enum InterchainTxsError {
    /// empty connection id
    EmptyConnectionId,
    /// empty interchain account id
    EmptyInterchainAccountId,
    /// interchain account id is longer than `{max}` characters
    LongInterchainAccountId { max: usize },
    /// no messages provided
    NoMessages,
    /// too many messages: `{count}` exceeds the maximum of `{max}`
    TooManyMessages { count: u64, max: u64 },
    /// invalid address `{address}`: `{reason}`
    InvalidAddress { address: String, reason: String },
    /// invalid message at index `{index}`: `{reason}`
    InvalidMessage { index: usize, reason: String },
    /// invalid identifier: `{0}`
    InvalidIdentifier(IdentifierError),
    /// invalid port `{port_id}`: `{reason}`
    InvalidPort { port_id: String, reason: String },
    /// memo must not exceed `{max}` characters
    MemoTooLong { max: usize },
    /// invalid channel metadata: `{reason}`
    InvalidMetadata { reason: String },
    /// invalid acknowledgement: `{reason}`
    InvalidAcknowledgement { reason: String },
    /// no interchain account bound to `{port_id}` on `{connection_id}`
    AccountNotFound {
        connection_id: ConnectionId,
        port_id: PortId,
    },
    /// no active channel for `{port_id}` on `{connection_id}`
    ActiveChannelNotFound {
        connection_id: ConnectionId,
        port_id: PortId,
    },
    /// interchain account `{port_id}` on `{connection_id}` is already registered
    AlreadyRegistered {
        connection_id: ConnectionId,
        port_id: PortId,
    },
    /// interchain account `{port_id}` is bound to `{bound}`, got `{given}`
    AddressMismatch {
        port_id: PortId,
        bound: String,
        given: String,
    },
    /// no pending transaction with sequence `{sequence}` on `{port_id}/{channel_id}`
    PendingTxNotFound {
        port_id: PortId,
        channel_id: ChannelId,
        sequence: Sequence,
    },
    /// timeout overflows the host timestamp
    TimeoutOverflow,
    /// failed to decode protobuf message: `{reason}`
    ProtoUnmarshal { reason: String },
    /// transport error: `{description}`
    Transport { description: String },
    /// host error: `{description}`
    Host { description: String },
}

#[cfg(feature = "std")]
impl std::error::Error for InterchainTxsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::InvalidIdentifier(e) => Some(e),
            _ => None,
        }
    }
}

impl From<IdentifierError> for InterchainTxsError {
    fn from(e: IdentifierError) -> Self {
        Self::InvalidIdentifier(e)
    }
}

impl From<prost::DecodeError> for InterchainTxsError {
    fn from(e: prost::DecodeError) -> Self {
        Self::ProtoUnmarshal {
            reason: e.to_string(),
        }
    }
}
