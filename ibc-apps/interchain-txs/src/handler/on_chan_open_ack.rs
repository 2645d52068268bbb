use ibc_app_interchain_txs_types::error::InterchainTxsError;
use ibc_app_interchain_txs_types::events::ChannelOpenedEvent;
use ibc_app_interchain_txs_types::{AccountState, InterchainAccount, Metadata};
use ibc_core_host_types::identifiers::{ChannelId, ConnectionId, PortId};
use ibc_primitives::prelude::*;

use crate::context::{InterchainTxsExecutionContext, InterchainTxsValidationContext};

/// Completes the handshake of `port_id/channel_id` with the version the host
/// acknowledged, binding the interchain account address.
///
/// The address is bound once: a later handshake for the same account must
/// acknowledge the same address.
pub fn on_chan_open_ack<Ctx>(
    ctx: &mut Ctx,
    connection_id: &ConnectionId,
    port_id: &PortId,
    channel_id: &ChannelId,
    counterparty_version: &str,
) -> Result<(), InterchainTxsError>
where
    Ctx: InterchainTxsExecutionContext,
{
    on_chan_open_ack_validate(ctx, connection_id, port_id, channel_id, counterparty_version)?;
    on_chan_open_ack_execute(ctx, connection_id, port_id, channel_id, counterparty_version)
}

pub fn on_chan_open_ack_validate<Ctx>(
    ctx: &Ctx,
    connection_id: &ConnectionId,
    port_id: &PortId,
    channel_id: &ChannelId,
    counterparty_version: &str,
) -> Result<(), InterchainTxsError>
where
    Ctx: InterchainTxsValidationContext,
{
    let account = handshaking_account(ctx, connection_id, port_id, channel_id)?;

    let metadata = Metadata::from_json(counterparty_version)?;
    metadata.validate_ack(connection_id)?;

    match account.address {
        Some(bound) if bound != metadata.address => Err(InterchainTxsError::AddressMismatch {
            port_id: port_id.clone(),
            bound,
            given: metadata.address,
        }),
        _ => Ok(()),
    }
}

pub fn on_chan_open_ack_execute<Ctx>(
    ctx: &mut Ctx,
    connection_id: &ConnectionId,
    port_id: &PortId,
    channel_id: &ChannelId,
    counterparty_version: &str,
) -> Result<(), InterchainTxsError>
where
    Ctx: InterchainTxsExecutionContext,
{
    let mut account = handshaking_account(ctx, connection_id, port_id, channel_id)?;
    if account.state == AccountState::Open {
        return Ok(());
    }

    let metadata = Metadata::from_json(counterparty_version)?;

    account.state = AccountState::Open;
    account.address = Some(metadata.address.clone());

    ctx.log_message(format!(
        "interchain account {} opened on {port_id}/{channel_id}",
        metadata.address
    ))?;
    ctx.store_interchain_account(account)?;
    ctx.emit_module_event(
        ChannelOpenedEvent {
            port_id: port_id.clone(),
            channel_id: channel_id.clone(),
            address: metadata.address,
        }
        .into(),
    )?;

    Ok(())
}

fn handshaking_account<Ctx>(
    ctx: &Ctx,
    connection_id: &ConnectionId,
    port_id: &PortId,
    channel_id: &ChannelId,
) -> Result<InterchainAccount, InterchainTxsError>
where
    Ctx: InterchainTxsValidationContext,
{
    let account = ctx
        .interchain_account(connection_id, port_id)?
        .ok_or_else(|| InterchainTxsError::AccountNotFound {
            connection_id: connection_id.clone(),
            port_id: port_id.clone(),
        })?;

    if &account.channel_id != channel_id || account.state == AccountState::Closed {
        return Err(InterchainTxsError::ActiveChannelNotFound {
            connection_id: connection_id.clone(),
            port_id: port_id.clone(),
        });
    }

    Ok(account)
}
