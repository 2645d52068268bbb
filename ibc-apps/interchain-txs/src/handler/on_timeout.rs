use ibc_app_interchain_txs_types::error::InterchainTxsError;
use ibc_app_interchain_txs_types::{AccountState, AckType};
use ibc_core_host_types::identifiers::{ChannelId, PortId, Sequence};
use ibc_primitives::prelude::*;

use super::expect_pending_tx;
use super::on_acknowledgement::record_failure;
use crate::context::{InterchainTxsExecutionContext, InterchainTxsValidationContext};

/// Consumes the pending transaction `sequence` on `port_id/channel_id` after
/// it timed out, recording a failure for the submitting address.
///
/// Interchain account channels are ordered, so a timeout closes the channel;
/// the owner registers again to reopen it.
pub fn on_timeout<Ctx>(
    ctx: &mut Ctx,
    port_id: &PortId,
    channel_id: &ChannelId,
    sequence: Sequence,
) -> Result<(), InterchainTxsError>
where
    Ctx: InterchainTxsExecutionContext,
{
    on_timeout_validate(ctx, port_id, channel_id, sequence)?;
    on_timeout_execute(ctx, port_id, channel_id, sequence)
}

pub fn on_timeout_validate<Ctx>(
    ctx: &Ctx,
    port_id: &PortId,
    channel_id: &ChannelId,
    sequence: Sequence,
) -> Result<(), InterchainTxsError>
where
    Ctx: InterchainTxsValidationContext,
{
    expect_pending_tx(ctx, port_id, channel_id, sequence).map(|_| ())
}

pub fn on_timeout_execute<Ctx>(
    ctx: &mut Ctx,
    port_id: &PortId,
    channel_id: &ChannelId,
    sequence: Sequence,
) -> Result<(), InterchainTxsError>
where
    Ctx: InterchainTxsExecutionContext,
{
    let pending = expect_pending_tx(ctx, port_id, channel_id, sequence)?;
    ctx.delete_pending_tx(port_id, channel_id, sequence)?;

    if let Some(mut account) = ctx.interchain_account(&pending.connection_id, port_id)? {
        if &account.channel_id == channel_id {
            account.state = AccountState::Closed;
            ctx.store_interchain_account(account)?;
        }
    }

    ctx.log_message(format!(
        "interchain tx {sequence} on {port_id}/{channel_id} timed out, channel closed"
    ))?;

    record_failure(
        ctx,
        pending.from_address,
        port_id,
        channel_id,
        sequence,
        AckType::Timeout,
        String::new(),
    )
}
