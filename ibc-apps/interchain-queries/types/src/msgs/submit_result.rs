use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use super::validate_sender;
use crate::error::InterchainQueryError;
use crate::SubmittedResult;

/// Result a relayer submits for a registered query. `client_id` names the
/// light client the proofs are checked against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgSubmitQueryResult {
    pub sender: Signer,
    pub query_id: u64,
    pub client_id: String,
    pub result: SubmittedResult,
}

impl MsgSubmitQueryResult {
    pub fn validate_basic(&self) -> Result<(), InterchainQueryError> {
        validate_sender(&self.sender)?;
        if self.client_id.trim().is_empty() {
            return Err(InterchainQueryError::InvalidClientId(self.client_id.clone()));
        }
        if self.result.is_empty() {
            return Err(InterchainQueryError::EmptyResult {
                query_id: self.query_id,
            });
        }
        match &self.result {
            SubmittedResult::Kv(kv) => {
                if let Some(value) = kv.kv_results.iter().find(|v| v.proof.is_empty()) {
                    return Err(InterchainQueryError::InvalidSubmittedResult {
                        reason: format!(
                            "missing proof for key in store `{}`",
                            value.storage_prefix
                        ),
                    });
                }
            }
            SubmittedResult::Tx(tx) => {
                if let Some(record) = tx.transactions.iter().find(|t| t.proof.is_empty()) {
                    return Err(InterchainQueryError::InvalidSubmittedResult {
                        reason: format!(
                            "missing proof for transaction {} at height {}",
                            record.index, record.height
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}
