use ibc_app_interchain_txs::context::{
    InterchainTxsExecutionContext, InterchainTxsValidationContext,
};
use ibc_app_interchain_txs::types::error::InterchainTxsError;
use ibc_app_interchain_txs::types::proto::Any;
use ibc_app_interchain_txs::types::{Failure, InterchainAccount, Params, PendingInterchainTx};
use ibc_core_host_types::identifiers::{ChannelId, ConnectionId, PortId, Sequence};
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use crate::testapp::ibc::core::types::MockContext;

impl InterchainTxsValidationContext for MockContext {
    fn host_timestamp(&self) -> Result<u64, InterchainTxsError> {
        Ok(self.host_timestamp)
    }

    fn params(&self) -> Result<Params, InterchainTxsError> {
        Ok(self.txs_params.clone())
    }

    fn interchain_account(
        &self,
        connection_id: &ConnectionId,
        port_id: &PortId,
    ) -> Result<Option<InterchainAccount>, InterchainTxsError> {
        Ok(self.account(connection_id, port_id))
    }

    fn pending_tx(
        &self,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: Sequence,
    ) -> Result<Option<PendingInterchainTx>, InterchainTxsError> {
        Ok(self
            .store
            .lock()
            .pending_txs
            .get(&(port_id.clone(), channel_id.clone(), sequence))
            .cloned())
    }

    fn next_failure_id(&self) -> Result<u64, InterchainTxsError> {
        Ok(self.store.lock().failures.len() as u64)
    }

    fn failures(&self, address: &Signer) -> Result<Vec<Failure>, InterchainTxsError> {
        Ok(self
            .store
            .lock()
            .failures
            .iter()
            .filter(|failure| &failure.address == address)
            .cloned()
            .collect())
    }

    fn all_failures(&self) -> Result<Vec<Failure>, InterchainTxsError> {
        Ok(self.store.lock().failures.clone())
    }

    /// Rejects messages without a body, which no remote message accepts.
    fn validate_embedded_message(&self, msg: &Any) -> Result<(), InterchainTxsError> {
        if msg.value.is_empty() {
            return Err(InterchainTxsError::Host {
                description: format!("`{}` has an empty body", msg.type_url),
            });
        }
        Ok(())
    }
}

impl InterchainTxsExecutionContext for MockContext {
    fn open_channel(
        &mut self,
        connection_id: &ConnectionId,
        port_id: &PortId,
        version: &str,
    ) -> Result<ChannelId, InterchainTxsError> {
        Ok(self
            .store
            .lock()
            .transport
            .open_channel(connection_id, port_id, version))
    }

    fn send_packet(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        data: Vec<u8>,
        timeout_timestamp: u64,
    ) -> Result<Sequence, InterchainTxsError> {
        self.store
            .lock()
            .transport
            .send_packet(port_id, channel_id, data, timeout_timestamp)
    }

    fn store_interchain_account(
        &mut self,
        account: InterchainAccount,
    ) -> Result<(), InterchainTxsError> {
        let key = (account.connection_id.clone(), account.port_id.clone());
        self.store.lock().accounts.insert(key, account);
        Ok(())
    }

    fn store_pending_tx(&mut self, tx: PendingInterchainTx) -> Result<(), InterchainTxsError> {
        let key = (tx.port_id.clone(), tx.channel_id.clone(), tx.sequence);
        self.store.lock().pending_txs.insert(key, tx);
        Ok(())
    }

    fn delete_pending_tx(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: Sequence,
    ) -> Result<(), InterchainTxsError> {
        self.store
            .lock()
            .pending_txs
            .remove(&(port_id.clone(), channel_id.clone(), sequence));
        Ok(())
    }

    fn record_failure(&mut self, failure: Failure) -> Result<(), InterchainTxsError> {
        self.store.lock().failures.push(failure);
        Ok(())
    }

    fn emit_module_event(&mut self, event: ModuleEvent) -> Result<(), InterchainTxsError> {
        self.store.lock().events.push(event);
        Ok(())
    }

    fn log_message(&mut self, message: String) -> Result<(), InterchainTxsError> {
        tracing::debug!(target: "interchaintxs", "{message}");
        self.store.lock().logs.push(message);
        Ok(())
    }
}
