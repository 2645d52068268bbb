//! Requests a contract sends to the host.
use core::str::FromStr;

use ibc_app_interchain_queries::types::msgs::{
    MsgRegisterInterchainQuery, MsgRemoveInterchainQuery, MsgUpdateInterchainQuery,
};
use ibc_app_interchain_queries::types::{KvKey, KvKeys, QueryType};
use ibc_app_interchain_txs::types::msgs::{MsgRegisterInterchainAccount, MsgSubmitTx};
use ibc_app_interchain_txs::types::proto::Any;
use ibc_primitives::Signer;
use serde::{Deserialize, Serialize};

use crate::{Binary, BindingError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum CustomMsg {
    /// Registers an interchain account owned by the calling contract.
    RegisterInterchainAccount {
        connection_id: String,
        interchain_account_id: String,
    },
    /// Sends messages for execution by one of the contract's interchain
    /// accounts. `timeout` is relative, in seconds.
    SubmitTx {
        connection_id: String,
        interchain_account_id: String,
        msgs: Vec<ProtobufAny>,
        memo: String,
        timeout: u64,
    },
    RegisterInterchainQuery {
        query_type: String,
        keys: Vec<KvKeyJson>,
        transactions_filter: String,
        connection_id: String,
        zone_id: String,
        update_period: u64,
    },
    UpdateInterchainQuery {
        query_id: u64,
        new_keys: Option<Vec<KvKeyJson>>,
        new_update_period: Option<u64>,
        new_transactions_filter: Option<String>,
    },
    RemoveInterchainQuery {
        query_id: u64,
    },
}

impl CustomMsg {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RegisterInterchainAccount { .. } => "register_interchain_account",
            Self::SubmitTx { .. } => "submit_tx",
            Self::RegisterInterchainQuery { .. } => "register_interchain_query",
            Self::UpdateInterchainQuery { .. } => "update_interchain_query",
            Self::RemoveInterchainQuery { .. } => "remove_interchain_query",
        }
    }
}

/// A protobuf message to execute on the remote chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProtobufAny {
    pub type_url: String,
    pub value: Binary,
}

impl From<ProtobufAny> for Any {
    fn from(msg: ProtobufAny) -> Self {
        Any {
            type_url: msg.type_url,
            value: msg.value.into(),
        }
    }
}

/// A key read by a key-value query: the store it lives in and its raw bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KvKeyJson {
    pub path: String,
    pub key: Binary,
}

impl From<KvKeyJson> for KvKey {
    fn from(key: KvKeyJson) -> Self {
        KvKey::new(key.path, Vec::<u8>::from(key.key))
    }
}

impl From<&KvKey> for KvKeyJson {
    fn from(key: &KvKey) -> Self {
        Self {
            path: key.path.clone(),
            key: Binary::from(key.key.clone()),
        }
    }
}

pub(crate) fn kv_keys(keys: Vec<KvKeyJson>) -> KvKeys {
    KvKeys::new(keys.into_iter().map(KvKey::from).collect())
}

/// A decoded request, bound to the contract that sent it.
#[derive(Clone, Debug)]
pub enum HostMsg {
    RegisterInterchainAccount(MsgRegisterInterchainAccount),
    SubmitTx(MsgSubmitTx),
    RegisterInterchainQuery(MsgRegisterInterchainQuery),
    UpdateInterchainQuery(MsgUpdateInterchainQuery),
    RemoveInterchainQuery(MsgRemoveInterchainQuery),
}

impl HostMsg {
    pub fn new(contract: Signer, msg: CustomMsg) -> Result<Self, BindingError> {
        let msg = match msg {
            CustomMsg::RegisterInterchainAccount {
                connection_id,
                interchain_account_id,
            } => Self::RegisterInterchainAccount(MsgRegisterInterchainAccount {
                from_address: contract,
                connection_id,
                interchain_account_id,
            }),
            CustomMsg::SubmitTx {
                connection_id,
                interchain_account_id,
                msgs,
                memo,
                timeout,
            } => Self::SubmitTx(MsgSubmitTx {
                from_address: contract,
                interchain_account_id,
                connection_id,
                msgs: msgs.into_iter().map(Any::from).collect(),
                memo,
                timeout,
            }),
            CustomMsg::RegisterInterchainQuery {
                query_type,
                keys,
                transactions_filter,
                connection_id,
                zone_id,
                update_period,
            } => Self::RegisterInterchainQuery(MsgRegisterInterchainQuery {
                sender: contract,
                query_type: QueryType::from_str(&query_type)?,
                keys: kv_keys(keys),
                transactions_filter,
                connection_id,
                zone_id,
                update_period,
            }),
            CustomMsg::UpdateInterchainQuery {
                query_id,
                new_keys,
                new_update_period,
                new_transactions_filter,
            } => Self::UpdateInterchainQuery(MsgUpdateInterchainQuery {
                sender: contract,
                query_id,
                new_keys: new_keys.map(kv_keys),
                new_update_period,
                new_transactions_filter,
            }),
            CustomMsg::RemoveInterchainQuery { query_id } => {
                Self::RemoveInterchainQuery(MsgRemoveInterchainQuery {
                    sender: contract,
                    query_id,
                })
            }
        };
        Ok(msg)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterInterchainAccountResponse {
    pub port_id: String,
    pub channel_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitTxResponse {
    pub sequence_id: u64,
    pub channel: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterInterchainQueryResponse {
    pub id: u64,
}

/// Response of requests that return nothing, encoded as `{}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyResponse {}
