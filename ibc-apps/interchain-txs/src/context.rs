//! Defines the main context traits of the interchain transactions relay

use ibc_app_interchain_txs_types::error::InterchainTxsError;
use ibc_app_interchain_txs_types::proto::Any;
use ibc_app_interchain_txs_types::{Failure, InterchainAccount, Params, PendingInterchainTx};
use ibc_core_host_types::identifiers::{ChannelId, ConnectionId, PortId, Sequence};
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

/// Methods required in interchain transactions validation, to be implemented by the host
pub trait InterchainTxsValidationContext {
    /// Timestamp of the block being processed, in nanoseconds since the Unix
    /// epoch.
    fn host_timestamp(&self) -> Result<u64, InterchainTxsError>;

    fn params(&self) -> Result<Params, InterchainTxsError>;

    fn interchain_account(
        &self,
        connection_id: &ConnectionId,
        port_id: &PortId,
    ) -> Result<Option<InterchainAccount>, InterchainTxsError>;

    fn pending_tx(
        &self,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: Sequence,
    ) -> Result<Option<PendingInterchainTx>, InterchainTxsError>;

    /// Identifier the next recorded failure receives.
    fn next_failure_id(&self) -> Result<u64, InterchainTxsError>;

    /// Failures recorded for `address`, in ascending order of identifier.
    fn failures(&self, address: &Signer) -> Result<Vec<Failure>, InterchainTxsError>;

    /// All recorded failures, in ascending order of identifier.
    fn all_failures(&self) -> Result<Vec<Failure>, InterchainTxsError>;

    /// Lets the host run a message's own stateless checks before it is sent
    /// for execution on the remote chain.
    fn validate_embedded_message(&self, _msg: &Any) -> Result<(), InterchainTxsError> {
        Ok(())
    }
}

/// Methods required in interchain transactions execution, to be implemented by the host
pub trait InterchainTxsExecutionContext: InterchainTxsValidationContext {
    /// Starts the ICS-27 handshake for `port_id` on `connection_id`,
    /// returning the channel being opened.
    fn open_channel(
        &mut self,
        connection_id: &ConnectionId,
        port_id: &PortId,
        version: &str,
    ) -> Result<ChannelId, InterchainTxsError>;

    /// Sends `data` on the channel, returning its sequence.
    fn send_packet(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        data: Vec<u8>,
        timeout_timestamp: u64,
    ) -> Result<Sequence, InterchainTxsError>;

    fn store_interchain_account(
        &mut self,
        account: InterchainAccount,
    ) -> Result<(), InterchainTxsError>;

    fn store_pending_tx(&mut self, tx: PendingInterchainTx) -> Result<(), InterchainTxsError>;

    fn delete_pending_tx(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        sequence: Sequence,
    ) -> Result<(), InterchainTxsError>;

    fn record_failure(&mut self, failure: Failure) -> Result<(), InterchainTxsError>;

    fn emit_module_event(&mut self, event: ModuleEvent) -> Result<(), InterchainTxsError>;

    fn log_message(&mut self, message: String) -> Result<(), InterchainTxsError>;
}
