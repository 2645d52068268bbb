//! Implements the processing logic for the messages and callbacks of the
//! interchain transactions relay.
mod on_acknowledgement;
mod on_chan_open_ack;
mod on_timeout;
mod register_interchain_account;
mod submit_tx;

pub use on_acknowledgement::*;
pub use on_chan_open_ack::*;
pub use on_timeout::*;
pub use register_interchain_account::*;
pub use submit_tx::*;

use ibc_app_interchain_txs_types::error::InterchainTxsError;
use ibc_app_interchain_txs_types::PendingInterchainTx;
use ibc_core_host_types::identifiers::{ChannelId, PortId, Sequence};

use crate::context::InterchainTxsValidationContext;

/// Looks up the transaction a callback refers to.
pub(crate) fn expect_pending_tx<Ctx>(
    ctx: &Ctx,
    port_id: &PortId,
    channel_id: &ChannelId,
    sequence: Sequence,
) -> Result<PendingInterchainTx, InterchainTxsError>
where
    Ctx: InterchainTxsValidationContext,
{
    ctx.pending_tx(port_id, channel_id, sequence)?
        .ok_or_else(|| InterchainTxsError::PendingTxNotFound {
            port_id: port_id.clone(),
            channel_id: channel_id.clone(),
            sequence,
        })
}
