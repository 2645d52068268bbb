use ibc_app_interchain_queries_types::error::InterchainQueryError;
use ibc_app_interchain_queries_types::events::QueryRegisteredEvent;
use ibc_app_interchain_queries_types::msgs::MsgRegisterInterchainQuery;
use ibc_app_interchain_queries_types::{RegisteredQuery, RemoteHeight};
use ibc_primitives::prelude::*;

use crate::context::{
    InterchainQueryExecutionContext, InterchainQueryValidationContext, LightClientContext,
};

/// Registers a query. Equivalent to calling [`register_query_validate`], followed by
/// [`register_query_execute`]. Returns the identifier of the new query.
pub fn register_query<Ctx>(
    ctx: &mut Ctx,
    msg: MsgRegisterInterchainQuery,
) -> Result<u64, InterchainQueryError>
where
    Ctx: InterchainQueryExecutionContext,
{
    register_query_validate(ctx, &msg)?;
    register_query_execute(ctx, msg)
}

pub fn register_query_validate<Ctx>(
    ctx: &Ctx,
    msg: &MsgRegisterInterchainQuery,
) -> Result<(), InterchainQueryError>
where
    Ctx: InterchainQueryValidationContext,
{
    msg.validate_basic()?;

    let params = ctx.params()?;
    msg.query_kind(&params)?;

    let connection_id = msg.connection_id()?;
    ctx.light_client().client_id(&connection_id)?;

    Ok(())
}

/// Stores the query. A prior call to [`register_query_validate`] MUST have succeeded.
pub fn register_query_execute<Ctx>(
    ctx: &mut Ctx,
    msg: MsgRegisterInterchainQuery,
) -> Result<u64, InterchainQueryError>
where
    Ctx: InterchainQueryExecutionContext,
{
    let params = ctx.params()?;
    let kind = msg.query_kind(&params)?;
    let connection_id = msg.connection_id()?;
    let host_height = ctx.host_height()?;
    let query_id = ctx.next_query_id()?;

    let query = RegisteredQuery {
        id: query_id,
        owner: msg.sender,
        kind,
        connection_id,
        zone_id: msg.zone_id,
        update_period: msg.update_period,
        registered_at_height: host_height,
        last_emitted_height: host_height,
        last_submitted_result_local_height: 0,
        last_submitted_result_remote_height: RemoteHeight::default(),
    };

    let event = QueryRegisteredEvent {
        query_id,
        owner: query.owner.clone(),
        connection_id: query.connection_id.clone(),
        query_type: query.query_type(),
    };

    ctx.log_message(format!(
        "interchain query {query_id} of type {} registered by {} on {}",
        query.query_type(),
        query.owner,
        query.connection_id
    ))?;

    ctx.store_registered_query(query)?;
    ctx.increase_query_counter(query_id)?;
    ctx.emit_module_event(event.into())?;

    Ok(query_id)
}
