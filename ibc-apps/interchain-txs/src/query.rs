//! Read-only queries over the interchain transactions state.
use core::str::FromStr;

use ibc_app_interchain_txs_types::error::InterchainTxsError;
use ibc_app_interchain_txs_types::{controller_port_id, Failure};
use ibc_core_host_types::identifiers::ConnectionId;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use crate::context::InterchainTxsValidationContext;

/// Returns the address of `owner`'s interchain account
/// `interchain_account_id` on `connection_id`.
///
/// Fails with [`InterchainTxsError::AccountNotFound`] until the handshake
/// has completed once.
pub fn interchain_account_address<Ctx>(
    ctx: &Ctx,
    owner: &Signer,
    connection_id: &str,
    interchain_account_id: &str,
) -> Result<String, InterchainTxsError>
where
    Ctx: InterchainTxsValidationContext,
{
    if connection_id.is_empty() {
        return Err(InterchainTxsError::EmptyConnectionId);
    }
    let connection_id = ConnectionId::from_str(connection_id)?;
    let port_id = controller_port_id(owner, interchain_account_id)?;

    ctx.interchain_account(&connection_id, &port_id)?
        .and_then(|account| account.address)
        .ok_or(InterchainTxsError::AccountNotFound {
            connection_id,
            port_id,
        })
}

/// Failures recorded for `address`.
pub fn failures<Ctx>(ctx: &Ctx, address: &Signer) -> Result<Vec<Failure>, InterchainTxsError>
where
    Ctx: InterchainTxsValidationContext,
{
    ctx.failures(address)
}

pub fn all_failures<Ctx>(ctx: &Ctx) -> Result<Vec<Failure>, InterchainTxsError>
where
    Ctx: InterchainTxsValidationContext,
{
    ctx.all_failures()
}
