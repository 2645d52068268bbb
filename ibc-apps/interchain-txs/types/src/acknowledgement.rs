use ibc_primitives::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::InterchainTxsError;

/// Outcome a host reports for an executed transaction.
///
/// Encoded as the standard ICS-04 acknowledgement JSON: `{"result":"<base64>"}`
/// on success, `{"error":"<message>"}` on failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcknowledgementStatus {
    Result(String),
    Error(String),
}

impl AcknowledgementStatus {
    pub fn from_json(bytes: &[u8]) -> Result<Self, InterchainTxsError> {
        serde_json::from_slice(bytes).map_err(|e| InterchainTxsError::InvalidAcknowledgement {
            reason: e.to_string(),
        })
    }

    pub fn to_json(&self) -> Result<Vec<u8>, InterchainTxsError> {
        serde_json::to_vec(self).map_err(|e| InterchainTxsError::InvalidAcknowledgement {
            reason: e.to_string(),
        })
    }

    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Result(_))
    }
}
