use ibc_app_interchain_queries::types::msgs::{
    MsgRegisterInterchainQuery, MsgRemoveInterchainQuery, MsgSubmitQueryResult,
};
use ibc_app_interchain_queries::types::{
    KvKey, KvKeys, KvQueryResult, QueryType, RemoteHeight, SubmittedResult, TxQueryResult,
    TxRecord,
};
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use crate::fixtures::core::commitment::RemoteState;
use crate::fixtures::core::signer::{dummy_contract_address, dummy_relayer_address};
use crate::testapp::ibc::core::light_client::DEFAULT_CLIENT_ID;

pub const DUMMY_ZONE_ID: &str = "cosmoshub-4";

/// Returns a dummy [`MsgRegisterInterchainQuery`] reading `keys` on
/// `connection-0`, for testing purposes only!
pub fn dummy_kv_query_msg(keys: Vec<KvKey>, update_period: u64) -> MsgRegisterInterchainQuery {
    MsgRegisterInterchainQuery {
        sender: dummy_contract_address(),
        query_type: QueryType::Kv,
        keys: KvKeys::new(keys),
        transactions_filter: String::new(),
        connection_id: "connection-0".to_string(),
        zone_id: DUMMY_ZONE_ID.to_string(),
        update_period,
    }
}

/// Returns a dummy [`MsgRegisterInterchainQuery`] searching transactions
/// matching the JSON encoded `filter` on `connection-0`, for testing purposes
/// only!
pub fn dummy_tx_query_msg(filter: &str, update_period: u64) -> MsgRegisterInterchainQuery {
    MsgRegisterInterchainQuery {
        sender: dummy_contract_address(),
        query_type: QueryType::Tx,
        keys: KvKeys::default(),
        transactions_filter: filter.to_string(),
        connection_id: "connection-0".to_string(),
        zone_id: DUMMY_ZONE_ID.to_string(),
        update_period,
    }
}

pub fn dummy_remove_query_msg(sender: Signer, query_id: u64) -> MsgRemoveInterchainQuery {
    MsgRemoveInterchainQuery { sender, query_id }
}

/// Answers `query_id` with the values of `keys` in `state`, as a relayer
/// would at `height`.
pub fn kv_result_msg(
    query_id: u64,
    state: &RemoteState,
    keys: &[KvKey],
    height: RemoteHeight,
) -> MsgSubmitQueryResult {
    let kv_results = keys
        .iter()
        .map(|key| state.storage_value(&key.path, &key.key))
        .collect();

    MsgSubmitQueryResult {
        sender: dummy_relayer_address(),
        query_id,
        client_id: DEFAULT_CLIENT_ID.to_string(),
        result: SubmittedResult::Kv(KvQueryResult {
            kv_results,
            height: height.revision_height,
            revision: height.revision_number,
            header: state.header(height),
        }),
    }
}

/// Answers `query_id` with `transactions`, found up to `height`.
pub fn tx_result_msg(
    query_id: u64,
    height: RemoteHeight,
    transactions: Vec<TxRecord>,
) -> MsgSubmitQueryResult {
    MsgSubmitQueryResult {
        sender: dummy_relayer_address(),
        query_id,
        client_id: DEFAULT_CLIENT_ID.to_string(),
        result: SubmittedResult::Tx(TxQueryResult {
            height: height.revision_height,
            revision: height.revision_number,
            transactions,
        }),
    }
}
