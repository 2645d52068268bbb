use ibc_app_interchain_queries_types::error::InterchainQueryError;
use ibc_app_interchain_queries_types::events::QueryUpdatedEvent;
use ibc_app_interchain_queries_types::msgs::MsgUpdateInterchainQuery;
use ibc_app_interchain_queries_types::{
    Params, QueryKind, RegisteredQuery, TransactionsFilter,
};
use ibc_primitives::prelude::*;

use crate::context::{InterchainQueryExecutionContext, InterchainQueryValidationContext};

/// Updates a query. Equivalent to calling [`update_query_validate`], followed by
/// [`update_query_execute`].
pub fn update_query<Ctx>(
    ctx: &mut Ctx,
    msg: MsgUpdateInterchainQuery,
) -> Result<(), InterchainQueryError>
where
    Ctx: InterchainQueryExecutionContext,
{
    update_query_validate(ctx, &msg)?;
    update_query_execute(ctx, msg)
}

pub fn update_query_validate<Ctx>(
    ctx: &Ctx,
    msg: &MsgUpdateInterchainQuery,
) -> Result<(), InterchainQueryError>
where
    Ctx: InterchainQueryValidationContext,
{
    msg.validate_basic()?;

    let query = ctx.registered_query(msg.query_id)?;
    if !query.is_owned_by(&msg.sender) {
        return Err(InterchainQueryError::Unauthorized {
            sender: msg.sender.to_string(),
            query_id: msg.query_id,
            action: "update",
        });
    }

    updated_query(query, msg, &ctx.params()?).map(|_| ())
}

/// Applies the update. A prior call to [`update_query_validate`] MUST have succeeded.
pub fn update_query_execute<Ctx>(
    ctx: &mut Ctx,
    msg: MsgUpdateInterchainQuery,
) -> Result<(), InterchainQueryError>
where
    Ctx: InterchainQueryExecutionContext,
{
    let query = ctx.registered_query(msg.query_id)?;
    let query = updated_query(query, &msg, &ctx.params()?)?;

    let event = QueryUpdatedEvent {
        query_id: query.id,
        owner: query.owner.clone(),
        update_period: query.update_period,
    };

    ctx.store_registered_query(query)?;
    ctx.log_message(format!("interchain query {} updated", msg.query_id))?;
    ctx.emit_module_event(event.into())?;

    Ok(())
}

fn updated_query(
    mut query: RegisteredQuery,
    msg: &MsgUpdateInterchainQuery,
    params: &Params,
) -> Result<RegisteredQuery, InterchainQueryError> {
    if let Some(period) = msg.new_update_period {
        query.update_period = period;
    }

    match (&mut query.kind, &msg.new_keys, &msg.new_transactions_filter) {
        (QueryKind::Kv(keys), Some(new_keys), None) => {
            new_keys.validate_basic(params.max_kv_query_keys_count)?;
            *keys = new_keys.clone();
        }
        (QueryKind::Tx(filter), None, Some(new_filter)) => {
            *filter = TransactionsFilter::parse(new_filter, params.max_transactions_filters)?;
        }
        (_, None, None) => {}
        (kind, _, _) => {
            return Err(InterchainQueryError::InvalidQueryType {
                reason: format!(
                    "query {} of type {} cannot take the requested update",
                    msg.query_id,
                    kind.query_type()
                ),
            });
        }
    }

    Ok(query)
}
