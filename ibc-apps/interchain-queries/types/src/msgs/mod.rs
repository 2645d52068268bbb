//! Defines the messages of the interchain queries application
use core::str::FromStr;

use ibc_core_host_types::identifiers::ConnectionId;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use crate::error::InterchainQueryError;

mod register;
mod remove;
mod submit_result;
mod update;

pub use register::*;
pub use remove::*;
pub use submit_result::*;
pub use update::*;

/// Parses a connection identifier carried by a message.
pub fn parse_connection_id(raw: &str) -> Result<ConnectionId, InterchainQueryError> {
    if raw.is_empty() {
        return Err(InterchainQueryError::InvalidConnectionId {
            reason: "connection id must not be empty".to_string(),
        });
    }
    ConnectionId::from_str(raw).map_err(|e| InterchainQueryError::InvalidConnectionId {
        reason: format!("`{raw}`: {e}"),
    })
}

pub(crate) fn validate_sender(sender: &Signer) -> Result<(), InterchainQueryError> {
    if sender.as_ref().trim().is_empty() {
        return Err(InterchainQueryError::InvalidSender(sender.to_string()));
    }
    Ok(())
}
