use core::str::FromStr;

use ibc_core_host_types::identifiers::PortId;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use crate::error::InterchainTxsError;
use crate::CONTROLLER_PORT_PREFIX;

/// Longest interchain account id accepted. Keeps the derived port id under
/// the 128 characters a port identifier may hold.
pub const MAX_INTERCHAIN_ACCOUNT_ID_LEN: usize = 47;

/// The owner and interchain account id a controller port is derived from.
///
/// Every `(owner, interchain_account_id)` pair maps to exactly one port,
/// `icacontroller-<owner>.<interchain_account_id>`, so an owner can hold
/// several accounts on the same connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerPortOwner {
    pub owner: Signer,
    pub interchain_account_id: String,
}

impl ControllerPortOwner {
    pub fn new(owner: Signer, interchain_account_id: String) -> Self {
        Self {
            owner,
            interchain_account_id,
        }
    }

    /// Derives the controller port.
    pub fn port_id(&self) -> Result<PortId, InterchainTxsError> {
        controller_port_id(&self.owner, &self.interchain_account_id)
    }
}

/// Derives the controller port of `owner`'s account `interchain_account_id`.
pub fn controller_port_id(
    owner: &Signer,
    interchain_account_id: &str,
) -> Result<PortId, InterchainTxsError> {
    if owner.as_ref().is_empty() {
        return Err(InterchainTxsError::InvalidAddress {
            address: String::new(),
            reason: "owner must not be empty".to_string(),
        });
    }
    if interchain_account_id.is_empty() {
        return Err(InterchainTxsError::EmptyInterchainAccountId);
    }
    Ok(PortId::new(format!(
        "{CONTROLLER_PORT_PREFIX}{owner}.{interchain_account_id}"
    ))?)
}

/// Recovers the owner and interchain account id from a controller port.
pub fn parse_controller_port(port_id: &PortId) -> Result<ControllerPortOwner, InterchainTxsError> {
    let invalid = |reason: &str| InterchainTxsError::InvalidPort {
        port_id: port_id.to_string(),
        reason: reason.to_string(),
    };

    let suffix = port_id
        .as_str()
        .strip_prefix(CONTROLLER_PORT_PREFIX)
        .ok_or_else(|| invalid("missing controller prefix"))?;
    let (owner, interchain_account_id) = suffix
        .split_once('.')
        .ok_or_else(|| invalid("missing interchain account id"))?;
    if owner.is_empty() {
        return Err(invalid("missing owner"));
    }
    if interchain_account_id.is_empty() {
        return Err(invalid("missing interchain account id"));
    }

    Ok(ControllerPortOwner::new(
        Signer::from(owner.to_string()),
        interchain_account_id.to_string(),
    ))
}

impl FromStr for ControllerPortOwner {
    type Err = InterchainTxsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_controller_port(&PortId::from_str(s)?)
    }
}
