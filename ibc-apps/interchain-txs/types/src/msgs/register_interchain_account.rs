use ibc_core_host_types::identifiers::{ConnectionId, PortId};
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use super::{validate_address, validate_connection_id, validate_interchain_account_id};
use crate::error::InterchainTxsError;
use crate::port::controller_port_id;

/// Registers an interchain account for `from_address` on the chain behind
/// `connection_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgRegisterInterchainAccount {
    pub from_address: Signer,
    pub connection_id: String,
    pub interchain_account_id: String,
}

impl MsgRegisterInterchainAccount {
    pub fn validate_basic(&self) -> Result<(), InterchainTxsError> {
        validate_connection_id(&self.connection_id)?;
        validate_address(&self.from_address)?;
        validate_interchain_account_id(&self.interchain_account_id)
    }

    pub fn connection_id(&self) -> Result<ConnectionId, InterchainTxsError> {
        validate_connection_id(&self.connection_id)
    }

    pub fn port_id(&self) -> Result<PortId, InterchainTxsError> {
        controller_port_id(&self.from_address, &self.interchain_account_id)
    }
}
