//! Registered interchain queries and their scheduling metadata.
use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use ibc_core_host_types::identifiers::ConnectionId;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use crate::error::InterchainQueryError;
use crate::{KvKeys, RemoteHeight, TransactionsFilter};

/// The kind of remote data a query reads.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryType {
    /// Values stored under a fixed set of keys.
    Kv,
    /// Transactions matching a filter.
    Tx,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kv => "kv",
            Self::Tx => "tx",
        }
    }
}

impl Display for QueryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = InterchainQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kv" => Ok(Self::Kv),
            "tx" => Ok(Self::Tx),
            _ => Err(InterchainQueryError::InvalidQueryType {
                reason: format!("unknown query type `{s}`"),
            }),
        }
    }
}

/// What a query reads: the keys of a key-value query or the filter of a
/// transaction-search query.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryKind {
    Kv(KvKeys),
    Tx(TransactionsFilter),
}

impl QueryKind {
    pub fn query_type(&self) -> QueryType {
        match self {
            Self::Kv(_) => QueryType::Kv,
            Self::Tx(_) => QueryType::Tx,
        }
    }
}

/// A query registered by an on-chain owner.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisteredQuery {
    pub id: u64,
    pub owner: Signer,
    pub kind: QueryKind,
    pub connection_id: ConnectionId,
    pub zone_id: String,
    pub update_period: u64,
    pub registered_at_height: u64,
    pub last_emitted_height: u64,
    pub last_submitted_result_local_height: u64,
    pub last_submitted_result_remote_height: RemoteHeight,
}

impl RegisteredQuery {
    pub fn query_type(&self) -> QueryType {
        self.kind.query_type()
    }

    pub fn keys(&self) -> Option<&KvKeys> {
        match &self.kind {
            QueryKind::Kv(keys) => Some(keys),
            QueryKind::Tx(_) => None,
        }
    }

    pub fn transactions_filter(&self) -> Option<&TransactionsFilter> {
        match &self.kind {
            QueryKind::Tx(filter) => Some(filter),
            QueryKind::Kv(_) => None,
        }
    }

    /// Whether a new result must be solicited at `current_height`.
    pub fn is_due(&self, current_height: u64) -> bool {
        self.last_emitted_height
            .checked_add(self.update_period)
            .map_or(false, |due_height| current_height >= due_height)
    }

    /// Whether the query went without a result for longer than
    /// `submit_timeout` blocks at `current_height`.
    pub fn is_submit_timed_out(&self, current_height: u64, submit_timeout: u64) -> bool {
        self.registered_at_height
            .max(self.last_submitted_result_local_height)
            .checked_add(submit_timeout)
            .map_or(false, |deadline| current_height > deadline)
    }

    pub fn is_owned_by(&self, signer: &Signer) -> bool {
        &self.owner == signer
    }
}
