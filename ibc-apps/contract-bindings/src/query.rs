//! Queries a contract sends to the host, and their responses.
use ibc_app_interchain_queries::query::PageRequest;
use ibc_app_interchain_queries::types::error::InterchainQueryError;
use ibc_app_interchain_queries::types::{
    KvResult, QueryKind, QueryResult, RegisteredQuery, RemoteHeight, StoredTransaction,
    TxEventAttribute,
};
use ibc_app_interchain_txs::types::Failure;
use serde::{Deserialize, Serialize};

use crate::{Binary, KvKeyJson};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum CustomQuery {
    /// The last verified result of a key-value query.
    InterchainQueryResult { query_id: u64 },
    InterchainAccountAddress {
        owner_address: String,
        interchain_account_id: String,
        connection_id: String,
    },
    /// Registered queries, optionally restricted to some owners and to one
    /// connection. Empty filters match everything.
    RegisteredInterchainQueries {
        #[serde(default)]
        owners: Vec<String>,
        #[serde(default)]
        connection_id: String,
        #[serde(default)]
        pagination: Pagination,
    },
    RegisteredInterchainQuery { query_id: u64 },
    /// Transactions verified for a transaction-search query within
    /// `start_height..=end_height`.
    TransactionsSearchResult {
        query_id: u64,
        start_height: u64,
        end_height: u64,
    },
    /// Recorded failures of `address`, or of everyone when it is absent.
    Failures {
        address: Option<String>,
        #[serde(default)]
        pagination: Pagination,
    },
}

impl CustomQuery {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InterchainQueryResult { .. } => "interchain_query_result",
            Self::InterchainAccountAddress { .. } => "interchain_account_address",
            Self::RegisteredInterchainQueries { .. } => "registered_interchain_queries",
            Self::RegisteredInterchainQuery { .. } => "registered_interchain_query",
            Self::TransactionsSearchResult { .. } => "transactions_search_result",
            Self::Failures { .. } => "failures",
        }
    }
}

/// Offset and limit of a list query. A zero limit returns everything.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pagination {
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
}

impl From<Pagination> for PageRequest {
    fn from(page: Pagination) -> Self {
        PageRequest::new(page.offset, page.limit)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageValueJson {
    pub storage_prefix: String,
    pub key: Binary,
    pub value: Binary,
}

impl From<KvResult> for StorageValueJson {
    fn from(kv: KvResult) -> Self {
        Self {
            storage_prefix: kv.storage_prefix,
            key: kv.key.into(),
            value: kv.value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterchainQueryResultJson {
    pub kv_results: Vec<StorageValueJson>,
    pub height: u64,
    pub revision: u64,
}

impl From<QueryResult> for InterchainQueryResultJson {
    fn from(result: QueryResult) -> Self {
        Self {
            kv_results: result.kv_results.into_iter().map(Into::into).collect(),
            height: result.height,
            revision: result.revision,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRegisteredQueryResultResponse {
    pub result: InterchainQueryResultJson,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryInterchainAccountAddressResponse {
    pub interchain_account_address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteHeightJson {
    pub revision_number: u64,
    pub revision_height: u64,
}

impl From<RemoteHeight> for RemoteHeightJson {
    fn from(height: RemoteHeight) -> Self {
        Self {
            revision_number: height.revision_number,
            revision_height: height.revision_height,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredQueryJson {
    pub id: u64,
    pub owner: String,
    pub query_type: String,
    pub keys: Vec<KvKeyJson>,
    pub transactions_filter: String,
    pub connection_id: String,
    pub zone_id: String,
    pub update_period: u64,
    pub registered_at_height: u64,
    pub last_emitted_height: u64,
    pub last_submitted_result_local_height: u64,
    pub last_submitted_result_remote_height: RemoteHeightJson,
}

impl TryFrom<RegisteredQuery> for RegisteredQueryJson {
    type Error = InterchainQueryError;

    fn try_from(query: RegisteredQuery) -> Result<Self, Self::Error> {
        let query_type = query.query_type().to_string();
        let (keys, transactions_filter) = match &query.kind {
            QueryKind::Kv(keys) => (keys.iter().map(KvKeyJson::from).collect(), String::new()),
            QueryKind::Tx(filter) => (Vec::new(), filter.to_json()?),
        };
        Ok(Self {
            id: query.id,
            owner: query.owner.to_string(),
            query_type,
            keys,
            transactions_filter,
            connection_id: query.connection_id.to_string(),
            zone_id: query.zone_id,
            update_period: query.update_period,
            registered_at_height: query.registered_at_height,
            last_emitted_height: query.last_emitted_height,
            last_submitted_result_local_height: query.last_submitted_result_local_height,
            last_submitted_result_remote_height: query.last_submitted_result_remote_height.into(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRegisteredQueriesResponse {
    pub registered_queries: Vec<RegisteredQueryJson>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRegisteredQueryResponse {
    pub registered_query: RegisteredQueryJson,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttributeJson {
    pub key: String,
    pub value: String,
}

impl From<TxEventAttribute> for EventAttributeJson {
    fn from(attr: TxEventAttribute) -> Self {
        Self {
            key: attr.key,
            value: attr.value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionJson {
    pub height: u64,
    pub index: u64,
    pub tx: Binary,
    pub events: Vec<EventAttributeJson>,
}

impl From<StoredTransaction> for TransactionJson {
    fn from(tx: StoredTransaction) -> Self {
        Self {
            height: tx.height,
            index: tx.index,
            tx: tx.tx.into(),
            events: tx.events.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTransactionsSearchResponse {
    pub transactions: Vec<TransactionJson>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureJson {
    pub id: u64,
    pub address: String,
    pub port_id: String,
    pub channel_id: String,
    pub sequence_id: u64,
    pub ack_type: String,
    pub error: String,
}

impl From<Failure> for FailureJson {
    fn from(failure: Failure) -> Self {
        Self {
            id: failure.id,
            address: failure.address.to_string(),
            port_id: failure.port_id.to_string(),
            channel_id: failure.channel_id.to_string(),
            sequence_id: failure.sequence.value(),
            ack_type: failure.ack_type.to_string(),
            error: failure.error,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFailuresResponse {
    pub failures: Vec<FailureJson>,
}
