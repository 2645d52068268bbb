use ibc_app_interchain_txs_types::error::InterchainTxsError;
use ibc_app_interchain_txs_types::events::TxSubmittedEvent;
use ibc_app_interchain_txs_types::msgs::MsgSubmitTx;
use ibc_app_interchain_txs_types::{InterchainAccountPacketData, Params, PendingInterchainTx};
use ibc_core_host_types::identifiers::{ChannelId, Sequence};
use ibc_primitives::prelude::*;

use crate::context::{InterchainTxsExecutionContext, InterchainTxsValidationContext};

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// What a caller learns synchronously about a submitted transaction. The
/// outcome arrives later, keyed by the same channel and sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitTxResponse {
    pub sequence: Sequence,
    pub channel_id: ChannelId,
}

/// Sends a transaction for an interchain account. Equivalent to calling
/// [`submit_tx_validate`], followed by [`submit_tx_execute`].
pub fn submit_tx<Ctx>(ctx: &mut Ctx, msg: MsgSubmitTx) -> Result<SubmitTxResponse, InterchainTxsError>
where
    Ctx: InterchainTxsExecutionContext,
{
    submit_tx_validate(ctx, &msg)?;
    submit_tx_execute(ctx, msg)
}

pub fn submit_tx_validate<Ctx>(ctx: &Ctx, msg: &MsgSubmitTx) -> Result<(), InterchainTxsError>
where
    Ctx: InterchainTxsValidationContext,
{
    msg.validate_basic()?;

    let params = ctx.params()?;
    let count = msg.msgs.len() as u64;
    if count > params.max_msgs {
        return Err(InterchainTxsError::TooManyMessages {
            count,
            max: params.max_msgs,
        });
    }
    for (index, embedded) in msg.msgs.iter().enumerate() {
        ctx.validate_embedded_message(embedded)
            .map_err(|e| InterchainTxsError::InvalidMessage {
                index,
                reason: e.to_string(),
            })?;
    }

    active_channel(ctx, msg)?;
    calc_absolute_timeout(ctx.host_timestamp()?, msg.timeout, &params)?;

    Ok(())
}

/// Sends the packet and records it as pending. A prior call to
/// [`submit_tx_validate`] MUST have succeeded.
pub fn submit_tx_execute<Ctx>(
    ctx: &mut Ctx,
    msg: MsgSubmitTx,
) -> Result<SubmitTxResponse, InterchainTxsError>
where
    Ctx: InterchainTxsExecutionContext,
{
    let params = ctx.params()?;
    let channel_id = active_channel(ctx, &msg)?;
    let connection_id = msg.connection_id()?;
    let port_id = msg.port_id()?;
    let timeout_timestamp = calc_absolute_timeout(ctx.host_timestamp()?, msg.timeout, &params)?;

    let data = InterchainAccountPacketData::execute_tx(msg.msgs.clone(), msg.memo.clone())?;
    let sequence = ctx.send_packet(&port_id, &channel_id, data.encode_vec(), timeout_timestamp)?;

    ctx.log_message(format!(
        "interchain tx of {} sent on {port_id}/{channel_id} with sequence {sequence}",
        msg.from_address
    ))?;

    let event = TxSubmittedEvent {
        from_address: msg.from_address.clone(),
        port_id: port_id.clone(),
        channel_id: channel_id.clone(),
        sequence,
        msgs_count: msg.msgs.len(),
    };

    ctx.store_pending_tx(PendingInterchainTx {
        from_address: msg.from_address,
        interchain_account_id: msg.interchain_account_id,
        connection_id,
        port_id,
        channel_id: channel_id.clone(),
        sequence,
        msgs: msg.msgs,
        memo: msg.memo,
        timeout_timestamp,
    })?;
    ctx.emit_module_event(event.into())?;

    Ok(SubmitTxResponse {
        sequence,
        channel_id,
    })
}

fn active_channel<Ctx>(ctx: &Ctx, msg: &MsgSubmitTx) -> Result<ChannelId, InterchainTxsError>
where
    Ctx: InterchainTxsValidationContext,
{
    let connection_id = msg.connection_id()?;
    let port_id = msg.port_id()?;

    let account = ctx
        .interchain_account(&connection_id, &port_id)?
        .ok_or_else(|| InterchainTxsError::AccountNotFound {
            connection_id: connection_id.clone(),
            port_id: port_id.clone(),
        })?;

    account
        .active_channel()
        .cloned()
        .ok_or(InterchainTxsError::ActiveChannelNotFound {
            connection_id,
            port_id,
        })
}

/// Turns a relative timeout in seconds into an absolute timestamp in
/// nanoseconds. Zero selects [`Params::default_timeout`].
pub fn calc_absolute_timeout(
    host_timestamp: u64,
    timeout: u64,
    params: &Params,
) -> Result<u64, InterchainTxsError> {
    let timeout = if timeout == 0 {
        params.default_timeout
    } else {
        timeout
    };

    timeout
        .checked_mul(NANOS_PER_SECOND)
        .and_then(|nanos| host_timestamp.checked_add(nanos))
        .ok_or(InterchainTxsError::TimeoutOverflow)
}
