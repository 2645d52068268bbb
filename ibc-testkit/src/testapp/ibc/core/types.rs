//! Implementation of a host context mock. Used in testing the handlers of the
//! interchain queries and interchain transactions applications.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::sync::Arc;

use ibc_app_interchain_queries::types::{
    Params as QueryParams, QueryResult, RegisteredQuery, StoredTransaction,
};
use ibc_app_interchain_txs::types::{
    Failure, InterchainAccount, Params as TxsParams, PendingInterchainTx,
};
use ibc_core_host_types::identifiers::{ChannelId, ConnectionId, PortId, Sequence};
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;
use parking_lot::Mutex;

use super::light_client::MockLightClient;
use super::transport::{MockTransport, SentPacket};
use crate::fixtures::core::context::MockContextConfig;

/// Host timestamp of a default context: 2023-01-01T00:00:00Z, in nanoseconds.
pub const DEFAULT_HOST_TIMESTAMP: u64 = 1_672_531_200_000_000_000;

pub const DEFAULT_HOST_HEIGHT: u64 = 5;

/// An object that stores the state of both applications.
#[derive(Clone, Debug)]
pub struct MockStore {
    /// Identifier handed to the next registered query.
    pub next_query_id: u64,

    pub registered_queries: BTreeMap<u64, RegisteredQuery>,

    /// Queries whose saves fail, to exercise storage errors.
    pub failing_query_saves: BTreeSet<u64>,

    /// Last verified result of every key-value query.
    pub query_results: BTreeMap<u64, QueryResult>,

    /// Verified transactions keyed by query, remote height and index.
    pub transactions: BTreeMap<(u64, u64, u64), StoredTransaction>,

    pub accounts: BTreeMap<(ConnectionId, PortId), InterchainAccount>,

    pub pending_txs: BTreeMap<(PortId, ChannelId, Sequence), PendingInterchainTx>,

    /// Failures in the order they were recorded.
    pub failures: Vec<Failure>,

    pub transport: MockTransport,

    /// Emitted events in order
    pub events: Vec<ModuleEvent>,

    /// Logs of both applications
    pub logs: Vec<String>,
}

impl Default for MockStore {
    fn default() -> Self {
        Self {
            next_query_id: 1,
            registered_queries: BTreeMap::new(),
            failing_query_saves: BTreeSet::new(),
            query_results: BTreeMap::new(),
            transactions: BTreeMap::new(),
            accounts: BTreeMap::new(),
            pending_txs: BTreeMap::new(),
            failures: Vec::new(),
            transport: MockTransport::default(),
            events: Vec::new(),
            logs: Vec::new(),
        }
    }
}

/// A context implementing the dependencies of the interchain queries and
/// interchain transactions handlers.
#[derive(Debug)]
pub struct MockContext {
    pub host_height: u64,

    /// Nanoseconds since the Unix epoch.
    pub host_timestamp: u64,

    pub query_params: QueryParams,

    pub txs_params: TxsParams,

    /// Signers allowed to remove any query.
    pub maintainers: Vec<Signer>,

    pub light_client: MockLightClient,

    pub store: Arc<Mutex<MockStore>>,
}

/// Returns a MockContext with bare minimum initialization: no connections,
/// no queries and no accounts.
impl Default for MockContext {
    fn default() -> Self {
        MockContextConfig::builder().build()
    }
}

/// Implementation of internal interface for use in testing. The methods in this interface should
/// _not_ be accessible to any handler.
impl MockContext {
    /// Moves the host to `height`, advancing its clock by one second per block.
    pub fn advance_to_height(&mut self, height: u64) {
        let blocks = height.saturating_sub(self.host_height);
        self.host_timestamp += blocks * 1_000_000_000;
        self.host_height = height;
    }

    pub fn with_maintainer(mut self, maintainer: Signer) -> Self {
        self.maintainers.push(maintainer);
        self
    }

    /// Makes every later save of `query_id` fail.
    pub fn fail_query_saves(&mut self, query_id: u64) {
        self.store.lock().failing_query_saves.insert(query_id);
    }

    pub fn events(&self) -> Vec<ModuleEvent> {
        self.store.lock().events.clone()
    }

    /// Drains the events emitted so far.
    pub fn take_events(&mut self) -> Vec<ModuleEvent> {
        core::mem::take(&mut self.store.lock().events)
    }

    pub fn logs(&self) -> Vec<String> {
        self.store.lock().logs.clone()
    }

    pub fn sent_packets(&self) -> Vec<SentPacket> {
        self.store.lock().transport.sent_packets.clone()
    }

    pub fn stored_transaction_count(&self) -> usize {
        self.store.lock().transactions.len()
    }

    pub fn account(&self, connection_id: &ConnectionId, port_id: &PortId) -> Option<InterchainAccount> {
        self.store
            .lock()
            .accounts
            .get(&(connection_id.clone(), port_id.clone()))
            .cloned()
    }
}

/// Deep-copies the store so that clones evolve independently.
impl Clone for MockContext {
    fn clone(&self) -> Self {
        let store = {
            let store = self.store.lock().clone();
            Arc::new(Mutex::new(store))
        };

        Self {
            host_height: self.host_height,
            host_timestamp: self.host_timestamp,
            query_params: self.query_params.clone(),
            txs_params: self.txs_params.clone(),
            maintainers: self.maintainers.clone(),
            light_client: self.light_client.clone(),
            store,
        }
    }
}
