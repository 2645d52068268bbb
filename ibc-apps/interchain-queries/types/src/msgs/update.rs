use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use super::validate_sender;
use crate::error::InterchainQueryError;
use crate::KvKeys;

/// Changes the keys, the transactions filter or the update period of a
/// registered query. Only set fields are changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgUpdateInterchainQuery {
    pub sender: Signer,
    pub query_id: u64,
    pub new_keys: Option<KvKeys>,
    pub new_update_period: Option<u64>,
    pub new_transactions_filter: Option<String>,
}

impl MsgUpdateInterchainQuery {
    pub fn validate_basic(&self) -> Result<(), InterchainQueryError> {
        validate_sender(&self.sender)?;
        if self.new_keys.is_none()
            && self.new_update_period.is_none()
            && self.new_transactions_filter.is_none()
        {
            return Err(InterchainQueryError::InvalidRequest {
                reason: "one of new keys, new update period or new transactions filter must be set"
                    .to_string(),
            });
        }
        if self.new_update_period == Some(0) {
            return Err(InterchainQueryError::InvalidUpdatePeriod);
        }
        if self.new_keys.is_some() && self.new_transactions_filter.is_some() {
            return Err(InterchainQueryError::InvalidQueryType {
                reason: "a query has either keys or a transactions filter".to_string(),
            });
        }
        Ok(())
    }
}
