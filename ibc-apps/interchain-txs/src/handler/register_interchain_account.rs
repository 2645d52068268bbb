use ibc_app_interchain_txs_types::error::InterchainTxsError;
use ibc_app_interchain_txs_types::events::AccountRegisteredEvent;
use ibc_app_interchain_txs_types::msgs::MsgRegisterInterchainAccount;
use ibc_app_interchain_txs_types::{AccountState, InterchainAccount, Metadata};
use ibc_core_host_types::identifiers::ChannelId;
use ibc_primitives::prelude::*;

use crate::context::{InterchainTxsExecutionContext, InterchainTxsValidationContext};

/// Entry point for registering an interchain account. Returns the channel
/// whose handshake was started.
///
/// - Derives the controller port from the owner and the interchain account id.
/// - Fails while a handshake is in flight or the channel is open.
/// - A closed channel is reopened; the address bound by the first handshake
///   is kept.
pub fn register_interchain_account<Ctx>(
    ctx: &mut Ctx,
    msg: MsgRegisterInterchainAccount,
) -> Result<ChannelId, InterchainTxsError>
where
    Ctx: InterchainTxsExecutionContext,
{
    register_interchain_account_validate(ctx, &msg)?;
    register_interchain_account_execute(ctx, msg)
}

pub fn register_interchain_account_validate<Ctx>(
    ctx: &Ctx,
    msg: &MsgRegisterInterchainAccount,
) -> Result<(), InterchainTxsError>
where
    Ctx: InterchainTxsValidationContext,
{
    msg.validate_basic()?;

    let connection_id = msg.connection_id()?;
    let port_id = msg.port_id()?;

    if let Some(account) = ctx.interchain_account(&connection_id, &port_id)? {
        if account.state != AccountState::Closed {
            return Err(InterchainTxsError::AlreadyRegistered {
                connection_id,
                port_id,
            });
        }
    }

    Ok(())
}

/// Opens the handshake. A prior call to [`register_interchain_account_validate`]
/// MUST have succeeded.
pub fn register_interchain_account_execute<Ctx>(
    ctx: &mut Ctx,
    msg: MsgRegisterInterchainAccount,
) -> Result<ChannelId, InterchainTxsError>
where
    Ctx: InterchainTxsExecutionContext,
{
    let connection_id = msg.connection_id()?;
    let port_id = msg.port_id()?;

    let previous_address = ctx
        .interchain_account(&connection_id, &port_id)?
        .and_then(|account| account.address);

    let version = Metadata::new_default(&connection_id).to_json()?;
    let channel_id = ctx.open_channel(&connection_id, &port_id, &version)?;

    ctx.log_message(format!(
        "interchain account {} of {} registered on {connection_id}, opening {port_id}/{channel_id}",
        msg.interchain_account_id, msg.from_address
    ))?;

    let event = AccountRegisteredEvent {
        owner: msg.from_address.clone(),
        connection_id: connection_id.clone(),
        port_id: port_id.clone(),
        channel_id: channel_id.clone(),
    };

    ctx.store_interchain_account(InterchainAccount {
        owner: msg.from_address,
        interchain_account_id: msg.interchain_account_id,
        connection_id,
        port_id,
        channel_id: channel_id.clone(),
        state: AccountState::Init,
        address: previous_address,
    })?;
    ctx.emit_module_event(event.into())?;

    Ok(channel_id)
}
