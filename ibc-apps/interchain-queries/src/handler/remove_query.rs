use ibc_app_interchain_queries_types::error::InterchainQueryError;
use ibc_app_interchain_queries_types::events::QueryRemovedEvent;
use ibc_app_interchain_queries_types::msgs::MsgRemoveInterchainQuery;
use ibc_primitives::prelude::*;

use crate::context::{InterchainQueryExecutionContext, InterchainQueryValidationContext};

/// Removes a query. Equivalent to calling [`remove_query_validate`], followed by
/// [`remove_query_execute`].
pub fn remove_query<Ctx>(
    ctx: &mut Ctx,
    msg: MsgRemoveInterchainQuery,
) -> Result<(), InterchainQueryError>
where
    Ctx: InterchainQueryExecutionContext,
{
    remove_query_validate(ctx, &msg)?;
    remove_query_execute(ctx, msg)
}

/// The owner and the maintainers may always remove a query; anyone else
/// only once it went without a result for longer than the submit timeout.
pub fn remove_query_validate<Ctx>(
    ctx: &Ctx,
    msg: &MsgRemoveInterchainQuery,
) -> Result<(), InterchainQueryError>
where
    Ctx: InterchainQueryValidationContext,
{
    msg.validate_basic()?;

    let query = ctx.registered_query(msg.query_id)?;
    if query.is_owned_by(&msg.sender) || ctx.is_maintainer(&msg.sender) {
        return Ok(());
    }

    let params = ctx.params()?;
    if query.is_submit_timed_out(ctx.host_height()?, params.query_submit_timeout) {
        return Ok(());
    }

    Err(InterchainQueryError::Unauthorized {
        sender: msg.sender.to_string(),
        query_id: msg.query_id,
        action: "remove",
    })
}

/// Deletes the query with its results. A prior call to [`remove_query_validate`]
/// MUST have succeeded.
pub fn remove_query_execute<Ctx>(
    ctx: &mut Ctx,
    msg: MsgRemoveInterchainQuery,
) -> Result<(), InterchainQueryError>
where
    Ctx: InterchainQueryExecutionContext,
{
    let query = ctx.registered_query(msg.query_id)?;

    ctx.delete_transactions(query.id)?;
    ctx.delete_query_result(query.id)?;
    ctx.delete_registered_query(query.id)?;

    ctx.log_message(format!(
        "interchain query {} removed by {}",
        query.id, msg.sender
    ))?;

    let event = QueryRemovedEvent {
        query_id: query.id,
        owner: query.owner,
        removed_by: msg.sender,
    };
    ctx.emit_module_event(event.into())?;

    Ok(())
}
