use ibc_core_host_types::identifiers::{ConnectionId, PortId};
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;
use ibc_proto::google::protobuf::Any;

use super::{validate_address, validate_connection_id, validate_interchain_account_id};
use crate::error::InterchainTxsError;
use crate::packet::validate_memo;
use crate::port::controller_port_id;

/// Sends `msgs` for execution by `from_address`'s interchain account
/// `interchain_account_id`.
///
/// `timeout` is relative, in seconds; zero selects the default timeout.
#[derive(Clone, Debug, PartialEq)]
pub struct MsgSubmitTx {
    pub from_address: Signer,
    pub interchain_account_id: String,
    pub connection_id: String,
    pub msgs: Vec<Any>,
    pub memo: String,
    pub timeout: u64,
}

impl MsgSubmitTx {
    pub fn validate_basic(&self) -> Result<(), InterchainTxsError> {
        validate_connection_id(&self.connection_id)?;
        validate_interchain_account_id(&self.interchain_account_id)?;

        if self.msgs.is_empty() {
            return Err(InterchainTxsError::NoMessages);
        }
        for (index, msg) in self.msgs.iter().enumerate() {
            if !msg.type_url.starts_with('/') || msg.type_url.len() < 2 {
                return Err(InterchainTxsError::InvalidMessage {
                    index,
                    reason: format!("malformed type url `{}`", msg.type_url),
                });
            }
        }

        validate_address(&self.from_address)?;
        validate_memo(&self.memo)
    }

    pub fn connection_id(&self) -> Result<ConnectionId, InterchainTxsError> {
        validate_connection_id(&self.connection_id)
    }

    pub fn port_id(&self) -> Result<PortId, InterchainTxsError> {
        controller_port_id(&self.from_address, &self.interchain_account_id)
    }
}
