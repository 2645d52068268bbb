use ibc_app_interchain_queries::context::{
    InterchainQueryExecutionContext, InterchainQueryValidationContext,
};
use ibc_app_interchain_queries::types::error::InterchainQueryError;
use ibc_app_interchain_queries::types::{
    Params, QueryResult, RegisteredQuery, StoredTransaction,
};
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use crate::testapp::ibc::core::light_client::MockLightClient;
use crate::testapp::ibc::core::types::MockContext;

impl InterchainQueryValidationContext for MockContext {
    type LightClient = MockLightClient;

    fn light_client(&self) -> &Self::LightClient {
        &self.light_client
    }

    fn host_height(&self) -> Result<u64, InterchainQueryError> {
        Ok(self.host_height)
    }

    fn params(&self) -> Result<Params, InterchainQueryError> {
        Ok(self.query_params.clone())
    }

    fn next_query_id(&self) -> Result<u64, InterchainQueryError> {
        Ok(self.store.lock().next_query_id)
    }

    fn registered_query(&self, query_id: u64) -> Result<RegisteredQuery, InterchainQueryError> {
        self.store
            .lock()
            .registered_queries
            .get(&query_id)
            .cloned()
            .ok_or(InterchainQueryError::InvalidQueryId { query_id })
    }

    fn registered_queries(&self) -> Result<Vec<RegisteredQuery>, InterchainQueryError> {
        Ok(self
            .store
            .lock()
            .registered_queries
            .values()
            .cloned()
            .collect())
    }

    fn query_result(&self, query_id: u64) -> Result<Option<QueryResult>, InterchainQueryError> {
        Ok(self.store.lock().query_results.get(&query_id).cloned())
    }

    fn stored_transactions(
        &self,
        query_id: u64,
        start_height: u64,
        end_height: u64,
    ) -> Result<Box<dyn Iterator<Item = StoredTransaction> + '_>, InterchainQueryError> {
        if start_height > end_height {
            return Ok(Box::new(core::iter::empty()));
        }

        let transactions: Vec<StoredTransaction> = self
            .store
            .lock()
            .transactions
            .range((query_id, start_height, 0)..=(query_id, end_height, u64::MAX))
            .map(|(_, tx)| tx.clone())
            .collect();

        Ok(Box::new(transactions.into_iter()))
    }

    fn is_maintainer(&self, signer: &Signer) -> bool {
        self.maintainers.contains(signer)
    }
}

impl InterchainQueryExecutionContext for MockContext {
    fn increase_query_counter(&mut self, query_id: u64) -> Result<(), InterchainQueryError> {
        let mut store = self.store.lock();
        store.next_query_id = store.next_query_id.max(query_id + 1);
        Ok(())
    }

    fn store_registered_query(
        &mut self,
        query: RegisteredQuery,
    ) -> Result<(), InterchainQueryError> {
        let mut store = self.store.lock();
        if store.failing_query_saves.contains(&query.id) {
            return Err(InterchainQueryError::Host {
                description: format!("store rejected interchain query {}", query.id),
            });
        }
        store.registered_queries.insert(query.id, query);
        Ok(())
    }

    fn delete_registered_query(&mut self, query_id: u64) -> Result<(), InterchainQueryError> {
        self.store.lock().registered_queries.remove(&query_id);
        Ok(())
    }

    fn store_query_result(
        &mut self,
        query_id: u64,
        result: QueryResult,
    ) -> Result<(), InterchainQueryError> {
        self.store.lock().query_results.insert(query_id, result);
        Ok(())
    }

    fn delete_query_result(&mut self, query_id: u64) -> Result<(), InterchainQueryError> {
        self.store.lock().query_results.remove(&query_id);
        Ok(())
    }

    fn store_transaction(&mut self, tx: StoredTransaction) -> Result<(), InterchainQueryError> {
        self.store
            .lock()
            .transactions
            .insert((tx.query_id, tx.height, tx.index), tx);
        Ok(())
    }

    fn delete_transactions(&mut self, query_id: u64) -> Result<(), InterchainQueryError> {
        self.store
            .lock()
            .transactions
            .retain(|(id, _, _), _| *id != query_id);
        Ok(())
    }

    fn emit_module_event(&mut self, event: ModuleEvent) -> Result<(), InterchainQueryError> {
        self.store.lock().events.push(event);
        Ok(())
    }

    fn log_message(&mut self, message: String) -> Result<(), InterchainQueryError> {
        tracing::debug!(target: "interchainqueries", "{message}");
        self.store.lock().logs.push(message);
        Ok(())
    }
}
