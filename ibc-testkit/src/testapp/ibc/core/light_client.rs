//! A light client mock that trusts whatever roots the test hands it.

use alloc::collections::BTreeMap;

use ibc_app_interchain_queries::context::LightClientContext;
use ibc_app_interchain_queries::types::error::InterchainQueryError;
use ibc_app_interchain_queries::types::RemoteHeight;
use ibc_core_host_types::identifiers::ConnectionId;
use ibc_primitives::prelude::*;

pub const DEFAULT_CLIENT_ID: &str = "07-tendermint-0";

/// Connections the host knows of, the client behind each, and the app hashes
/// trusted for each of them by remote height.
#[derive(Clone, Debug, Default)]
pub struct MockLightClient {
    pub clients: BTreeMap<ConnectionId, String>,
    pub roots: BTreeMap<(ConnectionId, RemoteHeight), Vec<u8>>,
}

impl MockLightClient {
    /// Makes `connection_id` known, backed by `client_id`.
    pub fn with_connection(mut self, connection_id: ConnectionId, client_id: &str) -> Self {
        self.clients.insert(connection_id, client_id.to_string());
        self
    }

    pub fn with_root(
        mut self,
        connection_id: ConnectionId,
        height: RemoteHeight,
        root: Vec<u8>,
    ) -> Self {
        self.trust_root(connection_id, height, root);
        self
    }

    pub fn trust_root(&mut self, connection_id: ConnectionId, height: RemoteHeight, root: Vec<u8>) {
        self.roots.insert((connection_id, height), root);
    }
}

impl LightClientContext for MockLightClient {
    fn client_id(&self, connection_id: &ConnectionId) -> Result<String, InterchainQueryError> {
        self.clients
            .get(connection_id)
            .cloned()
            .ok_or_else(|| InterchainQueryError::InvalidConnectionId {
                reason: format!("connection {connection_id} is unknown"),
            })
    }

    fn consensus_root(
        &self,
        connection_id: &ConnectionId,
        height: RemoteHeight,
    ) -> Result<Option<Vec<u8>>, InterchainQueryError> {
        self.client_id(connection_id)?;
        Ok(self.roots.get(&(connection_id.clone(), height)).cloned())
    }
}
