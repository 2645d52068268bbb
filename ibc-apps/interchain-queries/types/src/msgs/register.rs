use ibc_core_host_types::identifiers::ConnectionId;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use super::{parse_connection_id, validate_sender};
use crate::error::InterchainQueryError;
use crate::{KvKeys, Params, QueryKind, QueryType, TransactionsFilter};

/// Registers a new interchain query owned by `sender`.
///
/// `keys` must be set for key-value queries and `transactions_filter` (a
/// JSON array of filter conditions) for transaction-search queries; the
/// other one must be left empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgRegisterInterchainQuery {
    pub sender: Signer,
    pub query_type: QueryType,
    pub keys: KvKeys,
    pub transactions_filter: String,
    pub connection_id: String,
    pub zone_id: String,
    pub update_period: u64,
}

impl MsgRegisterInterchainQuery {
    /// Stateless checks, in the order callers observe them.
    pub fn validate_basic(&self) -> Result<(), InterchainQueryError> {
        validate_sender(&self.sender)?;
        if self.update_period == 0 {
            return Err(InterchainQueryError::InvalidUpdatePeriod);
        }
        parse_connection_id(&self.connection_id)?;
        if self.zone_id.trim().is_empty() {
            return Err(InterchainQueryError::InvalidZoneId);
        }
        match self.query_type {
            QueryType::Kv if self.keys.is_empty() => Err(InterchainQueryError::InvalidQueryType {
                reason: "kv query requires keys".to_string(),
            }),
            QueryType::Kv if !self.transactions_filter.is_empty() => {
                Err(InterchainQueryError::InvalidQueryType {
                    reason: "kv query must not carry a transactions filter".to_string(),
                })
            }
            QueryType::Tx if !self.keys.is_empty() => Err(InterchainQueryError::InvalidQueryType {
                reason: "tx query must not carry keys".to_string(),
            }),
            QueryType::Tx if self.transactions_filter.trim().is_empty() => {
                Err(InterchainQueryError::InvalidTransactionsFilter {
                    reason: "tx query requires a transactions filter".to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    pub fn connection_id(&self) -> Result<ConnectionId, InterchainQueryError> {
        parse_connection_id(&self.connection_id)
    }

    /// Builds what the query reads, enforcing the size limits of `params`.
    pub fn query_kind(&self, params: &Params) -> Result<QueryKind, InterchainQueryError> {
        match self.query_type {
            QueryType::Kv => {
                self.keys.validate_basic(params.max_kv_query_keys_count)?;
                Ok(QueryKind::Kv(self.keys.clone()))
            }
            QueryType::Tx => TransactionsFilter::parse(
                &self.transactions_filter,
                params.max_transactions_filters,
            )
            .map(QueryKind::Tx),
        }
    }
}
