//! Defines the main context traits of the interchain queries application

use ibc_app_interchain_queries_types::error::InterchainQueryError;
use ibc_app_interchain_queries_types::{
    Params, QueryResult, RegisteredQuery, RemoteHeight, StoredTransaction,
};
use ibc_core_host_types::identifiers::ConnectionId;
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

/// Read access to what the host's light clients trust about remote chains.
pub trait LightClientContext {
    /// Returns the identifier of the light client backing `connection_id`.
    ///
    /// Fails with [`InterchainQueryError::InvalidConnectionId`] when the
    /// connection is unknown.
    fn client_id(&self, connection_id: &ConnectionId) -> Result<String, InterchainQueryError>;

    /// Returns the app hash of the remote chain behind `connection_id` at
    /// `height`, if the light client holds a consensus state for it.
    fn consensus_root(
        &self,
        connection_id: &ConnectionId,
        height: RemoteHeight,
    ) -> Result<Option<Vec<u8>>, InterchainQueryError>;
}

/// Methods required in interchain queries validation, to be implemented by the host
pub trait InterchainQueryValidationContext {
    type LightClient: LightClientContext;

    fn light_client(&self) -> &Self::LightClient;

    /// Height of the block being processed.
    fn host_height(&self) -> Result<u64, InterchainQueryError>;

    fn params(&self) -> Result<Params, InterchainQueryError>;

    /// Returns the identifier the next registered query receives.
    fn next_query_id(&self) -> Result<u64, InterchainQueryError>;

    /// Fails with [`InterchainQueryError::InvalidQueryId`] if absent.
    fn registered_query(&self, query_id: u64) -> Result<RegisteredQuery, InterchainQueryError>;

    /// All registered queries, in ascending order of identifier.
    fn registered_queries(&self) -> Result<Vec<RegisteredQuery>, InterchainQueryError>;

    fn query_result(&self, query_id: u64) -> Result<Option<QueryResult>, InterchainQueryError>;

    /// Transactions stored for `query_id` with a remote height within
    /// `start_height..=end_height`, ordered by height then index.
    fn stored_transactions(
        &self,
        query_id: u64,
        start_height: u64,
        end_height: u64,
    ) -> Result<Box<dyn Iterator<Item = StoredTransaction> + '_>, InterchainQueryError>;

    /// Whether `signer` may remove any query.
    fn is_maintainer(&self, _signer: &Signer) -> bool {
        false
    }
}

/// Methods required in interchain queries execution, to be implemented by the host
pub trait InterchainQueryExecutionContext: InterchainQueryValidationContext {
    /// Records that `query_id` was assigned; [`next_query_id`] must return a
    /// larger value afterwards.
    ///
    /// [`next_query_id`]: InterchainQueryValidationContext::next_query_id
    fn increase_query_counter(&mut self, query_id: u64) -> Result<(), InterchainQueryError>;

    fn store_registered_query(&mut self, query: RegisteredQuery)
        -> Result<(), InterchainQueryError>;

    fn delete_registered_query(&mut self, query_id: u64) -> Result<(), InterchainQueryError>;

    fn store_query_result(
        &mut self,
        query_id: u64,
        result: QueryResult,
    ) -> Result<(), InterchainQueryError>;

    fn delete_query_result(&mut self, query_id: u64) -> Result<(), InterchainQueryError>;

    /// Stores a transaction under `(query_id, height, index)`, replacing any
    /// transaction already stored there.
    fn store_transaction(&mut self, tx: StoredTransaction) -> Result<(), InterchainQueryError>;

    fn delete_transactions(&mut self, query_id: u64) -> Result<(), InterchainQueryError>;

    fn emit_module_event(&mut self, event: ModuleEvent) -> Result<(), InterchainQueryError>;

    fn log_message(&mut self, message: String) -> Result<(), InterchainQueryError>;
}
