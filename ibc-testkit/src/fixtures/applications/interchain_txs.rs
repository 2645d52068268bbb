use ibc_app_interchain_txs::types::error::InterchainTxsError;
use ibc_app_interchain_txs::types::msgs::{MsgRegisterInterchainAccount, MsgSubmitTx};
use ibc_app_interchain_txs::types::proto::Any;
use ibc_app_interchain_txs::types::{AcknowledgementStatus, Metadata};
use ibc_core_host_types::identifiers::ConnectionId;
use ibc_primitives::prelude::*;

use crate::fixtures::core::signer::dummy_contract_address;

pub const DUMMY_INTERCHAIN_ACCOUNT_ID: &str = "test-1";

pub const DUMMY_REMOTE_ADDRESS: &str =
    "cosmos1t6y6nkfhgmwn2jn2xzkywjvfmqqcpfmfudanq76dakpwsptg7hgs2u9kfz";

/// Returns a dummy [`MsgRegisterInterchainAccount`] on `connection-0`, for
/// testing purposes only!
pub fn dummy_register_account_msg(interchain_account_id: &str) -> MsgRegisterInterchainAccount {
    MsgRegisterInterchainAccount {
        from_address: dummy_contract_address(),
        connection_id: "connection-0".to_string(),
        interchain_account_id: interchain_account_id.to_string(),
    }
}

/// Returns a dummy bank send, for testing purposes only!
pub fn dummy_any_msg() -> Any {
    Any {
        type_url: "/cosmos.bank.v1beta1.MsgSend".to_string(),
        value: vec![10, 3, 1, 2, 3],
    }
}

/// Returns a dummy [`MsgSubmitTx`] for the account registered by
/// [`dummy_register_account_msg`], for testing purposes only!
pub fn dummy_submit_tx_msg(interchain_account_id: &str, msgs: Vec<Any>) -> MsgSubmitTx {
    MsgSubmitTx {
        from_address: dummy_contract_address(),
        interchain_account_id: interchain_account_id.to_string(),
        connection_id: "connection-0".to_string(),
        msgs,
        memo: String::new(),
        timeout: 0,
    }
}

/// Version the host side answers the handshake with, binding `address`.
pub fn counterparty_version(
    connection_id: &ConnectionId,
    address: &str,
) -> Result<String, InterchainTxsError> {
    let mut metadata = Metadata::new_default(connection_id);
    metadata.host_connection_id = connection_id.as_str().to_string();
    metadata.address = address.to_string();
    metadata.to_json()
}

pub fn success_ack() -> Result<Vec<u8>, InterchainTxsError> {
    AcknowledgementStatus::Result("AQ==".to_string()).to_json()
}

pub fn error_ack(error: &str) -> Result<Vec<u8>, InterchainTxsError> {
    AcknowledgementStatus::Error(error.to_string()).to_json()
}
