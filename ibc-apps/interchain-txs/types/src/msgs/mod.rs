//! Messages accepted by the interchain transactions relay.
use core::str::FromStr;

use ibc_core_host_types::identifiers::ConnectionId;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use crate::error::InterchainTxsError;
use crate::port::MAX_INTERCHAIN_ACCOUNT_ID_LEN;

mod register_interchain_account;
mod submit_tx;

pub use register_interchain_account::*;
pub use submit_tx::*;

pub(crate) fn validate_connection_id(raw: &str) -> Result<ConnectionId, InterchainTxsError> {
    if raw.is_empty() {
        return Err(InterchainTxsError::EmptyConnectionId);
    }
    Ok(ConnectionId::from_str(raw)?)
}

pub(crate) fn validate_interchain_account_id(raw: &str) -> Result<(), InterchainTxsError> {
    if raw.is_empty() {
        return Err(InterchainTxsError::EmptyInterchainAccountId);
    }
    if raw.chars().count() > MAX_INTERCHAIN_ACCOUNT_ID_LEN {
        return Err(InterchainTxsError::LongInterchainAccountId {
            max: MAX_INTERCHAIN_ACCOUNT_ID_LEN,
        });
    }
    Ok(())
}

/// Accounts are addressed by bech32 strings: a human-readable part, the `1`
/// separator and a data part, all lowercase alphanumerics.
pub(crate) fn validate_address(signer: &Signer) -> Result<(), InterchainTxsError> {
    let address = signer.as_ref();
    let invalid = |reason: &str| InterchainTxsError::InvalidAddress {
        address: address.to_string(),
        reason: reason.to_string(),
    };

    if address.is_empty() {
        return Err(invalid("empty address"));
    }
    if !address
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(invalid("address must be lowercase alphanumeric"));
    }
    match address.rfind('1') {
        Some(i) if i > 0 && i + 1 < address.len() => Ok(()),
        _ => Err(invalid("missing separator")),
    }
}
