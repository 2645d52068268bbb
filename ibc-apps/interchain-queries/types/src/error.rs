//! Defines the interchain queries error type
use displaydoc::Display;
use ibc_primitives::prelude::*;

/// First code of the interchain queries error range.
pub const ERROR_CODE_BASE: u32 = 1100;

#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum InterchainQueryError {
    /// invalid query id: `{query_id}`
    InvalidQueryId { query_id: u64 },
    /// empty result submitted for query `{query_id}`
    EmptyResult { query_id: u64 },
    /// invalid client id: `{0}`
    InvalidClientId(String),
    /// invalid update period: must be greater than zero
    InvalidUpdatePeriod,
    /// invalid connection id: `{reason}`
    InvalidConnectionId { reason: String },
    /// invalid zone id: must not be empty
    InvalidZoneId,
    /// invalid query type: `{reason}`
    InvalidQueryType { reason: String },
    /// invalid submitted result: `{reason}`
    InvalidSubmittedResult { reason: String },
    /// failed to encode protobuf message: `{reason}`
    ProtoMarshal { reason: String },
    /// failed to decode protobuf message: `{reason}`
    ProtoUnmarshal { reason: String },
    /// unexpected key `{key}` in result for query `{query_id}`
    InvalidType { query_id: u64, key: String },
    /// internal error: `{0}`
    Internal(String),
    /// invalid proof: `{reason}`
    InvalidProof { reason: String },
    /// invalid header: `{reason}`
    InvalidHeader { reason: String },
    /// invalid height: `{reason}`
    InvalidHeight { reason: String },
    /// no query result for query `{query_id}`
    NoQueryResult { query_id: u64 },
    /// invalid transactions filter: `{reason}`
    InvalidTransactionsFilter { reason: String },
    /// `{sender}` is not authorized to `{action}` query `{query_id}`
    Unauthorized {
        sender: String,
        query_id: u64,
        action: &'static str,
    },
    /// host error: `{description}`
    Host { description: String },
    /// invalid sender: `{0}`
    InvalidSender(String),
    /// invalid request: `{reason}`
    InvalidRequest { reason: String },
}

impl InterchainQueryError {
    /// Stable numeric code of the error, as reported to callers outside
    /// the state machine.
    pub fn code(&self) -> u32 {
        let offset = match self {
            Self::InvalidQueryId { .. } => 0,
            Self::EmptyResult { .. } => 1,
            Self::InvalidClientId(_) => 2,
            Self::InvalidUpdatePeriod => 3,
            Self::InvalidConnectionId { .. } => 4,
            Self::InvalidZoneId => 5,
            Self::InvalidQueryType { .. } => 6,
            Self::InvalidSubmittedResult { .. } => 7,
            Self::ProtoMarshal { .. } => 8,
            Self::ProtoUnmarshal { .. } => 9,
            Self::InvalidType { .. } => 10,
            Self::Internal(_) => 11,
            Self::InvalidProof { .. } => 12,
            Self::InvalidHeader { .. } => 13,
            Self::InvalidHeight { .. } => 14,
            Self::NoQueryResult { .. } => 15,
            Self::InvalidTransactionsFilter { .. } => 16,
            Self::Unauthorized { .. } => 17,
            Self::Host { .. } => 18,
            Self::InvalidSender(_) => 19,
            Self::InvalidRequest { .. } => 20,
        };
        ERROR_CODE_BASE + offset
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InterchainQueryError {}

impl From<prost::DecodeError> for InterchainQueryError {
    fn from(e: prost::DecodeError) -> Self {
        Self::ProtoUnmarshal {
            reason: e.to_string(),
        }
    }
}
