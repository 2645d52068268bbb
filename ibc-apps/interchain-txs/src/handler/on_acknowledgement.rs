use ibc_app_interchain_txs_types::error::InterchainTxsError;
use ibc_app_interchain_txs_types::events::{TxAcknowledgedEvent, TxFailedEvent};
use ibc_app_interchain_txs_types::{AckType, AcknowledgementStatus, Failure};
use ibc_core_host_types::identifiers::{ChannelId, PortId, Sequence};
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use super::expect_pending_tx;
use crate::context::{InterchainTxsExecutionContext, InterchainTxsValidationContext};

/// Consumes the pending transaction `sequence` on `port_id/channel_id` with
/// the host's acknowledgement. An error acknowledgement is recorded as a
/// failure of the submitting address; it does not fail the callback.
pub fn on_acknowledgement<Ctx>(
    ctx: &mut Ctx,
    port_id: &PortId,
    channel_id: &ChannelId,
    sequence: Sequence,
    acknowledgement: &[u8],
) -> Result<(), InterchainTxsError>
where
    Ctx: InterchainTxsExecutionContext,
{
    on_acknowledgement_validate(ctx, port_id, channel_id, sequence, acknowledgement)?;
    on_acknowledgement_execute(ctx, port_id, channel_id, sequence, acknowledgement)
}

pub fn on_acknowledgement_validate<Ctx>(
    ctx: &Ctx,
    port_id: &PortId,
    channel_id: &ChannelId,
    sequence: Sequence,
    acknowledgement: &[u8],
) -> Result<(), InterchainTxsError>
where
    Ctx: InterchainTxsValidationContext,
{
    expect_pending_tx(ctx, port_id, channel_id, sequence)?;
    AcknowledgementStatus::from_json(acknowledgement)?;

    Ok(())
}

pub fn on_acknowledgement_execute<Ctx>(
    ctx: &mut Ctx,
    port_id: &PortId,
    channel_id: &ChannelId,
    sequence: Sequence,
    acknowledgement: &[u8],
) -> Result<(), InterchainTxsError>
where
    Ctx: InterchainTxsExecutionContext,
{
    let pending = expect_pending_tx(ctx, port_id, channel_id, sequence)?;
    let status = AcknowledgementStatus::from_json(acknowledgement)?;

    ctx.delete_pending_tx(port_id, channel_id, sequence)?;

    match status {
        AcknowledgementStatus::Result(_) => {
            ctx.log_message(format!(
                "interchain tx {sequence} on {port_id}/{channel_id} executed"
            ))?;
            ctx.emit_module_event(
                TxAcknowledgedEvent {
                    from_address: pending.from_address,
                    port_id: port_id.clone(),
                    channel_id: channel_id.clone(),
                    sequence,
                }
                .into(),
            )?;
        }
        AcknowledgementStatus::Error(error) => {
            ctx.log_message(format!(
                "interchain tx {sequence} on {port_id}/{channel_id} failed: {error}"
            ))?;
            record_failure(
                ctx,
                pending.from_address,
                port_id,
                channel_id,
                sequence,
                AckType::Error,
                error,
            )?;
        }
    }

    Ok(())
}

pub(crate) fn record_failure<Ctx>(
    ctx: &mut Ctx,
    address: Signer,
    port_id: &PortId,
    channel_id: &ChannelId,
    sequence: Sequence,
    ack_type: AckType,
    error: String,
) -> Result<(), InterchainTxsError>
where
    Ctx: InterchainTxsExecutionContext,
{
    let id = ctx.next_failure_id()?;
    let event = TxFailedEvent {
        failure_id: id,
        from_address: address.clone(),
        port_id: port_id.clone(),
        channel_id: channel_id.clone(),
        sequence,
        ack_type,
        error: error.clone(),
    };

    ctx.record_failure(Failure {
        id,
        address,
        port_id: port_id.clone(),
        channel_id: channel_id.clone(),
        sequence,
        ack_type,
        error,
    })?;
    ctx.emit_module_event(event.into())
}
