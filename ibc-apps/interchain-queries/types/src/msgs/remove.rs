use ibc_primitives::Signer;

use super::validate_sender;
use crate::error::InterchainQueryError;

/// Removes a registered query together with its stored results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgRemoveInterchainQuery {
    pub sender: Signer,
    pub query_id: u64,
}

impl MsgRemoveInterchainQuery {
    pub fn validate_basic(&self) -> Result<(), InterchainQueryError> {
        validate_sender(&self.sender)
    }
}
