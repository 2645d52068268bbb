use ibc_app_interchain_queries_types::error::InterchainQueryError;
use ibc_app_interchain_queries_types::events::QueryResultSubmittedEvent;
use ibc_app_interchain_queries_types::msgs::MsgSubmitQueryResult;
use ibc_app_interchain_queries_types::{QueryResult, SubmittedResult};
use ibc_primitives::prelude::*;

use crate::context::{
    InterchainQueryExecutionContext, InterchainQueryValidationContext, LightClientContext,
};
use crate::verify::verify_result;

/// Accepts a query result. Equivalent to calling [`submit_query_result_validate`],
/// followed by [`submit_query_result_execute`].
pub fn submit_query_result<Ctx>(
    ctx: &mut Ctx,
    msg: MsgSubmitQueryResult,
) -> Result<(), InterchainQueryError>
where
    Ctx: InterchainQueryExecutionContext,
{
    submit_query_result_validate(ctx, &msg)?;
    submit_query_result_execute(ctx, msg)
}

/// Checks the result and its proofs. Performs no writes.
pub fn submit_query_result_validate<Ctx>(
    ctx: &Ctx,
    msg: &MsgSubmitQueryResult,
) -> Result<(), InterchainQueryError>
where
    Ctx: InterchainQueryValidationContext,
{
    msg.validate_basic()?;

    let query = ctx.registered_query(msg.query_id)?;

    let client_id = ctx.light_client().client_id(&query.connection_id)?;
    if client_id != msg.client_id {
        return Err(InterchainQueryError::InvalidClientId(msg.client_id.clone()));
    }

    let params = ctx.params()?;
    verify_result(ctx.light_client(), &params, &query, &msg.result)
}

/// Stores the result. A prior call to [`submit_query_result_validate`] MUST have succeeded.
pub fn submit_query_result_execute<Ctx>(
    ctx: &mut Ctx,
    msg: MsgSubmitQueryResult,
) -> Result<(), InterchainQueryError>
where
    Ctx: InterchainQueryExecutionContext,
{
    let mut query = ctx.registered_query(msg.query_id)?;
    let remote_height = msg.result.remote_height();

    query.last_submitted_result_local_height = ctx.host_height()?;
    query.last_submitted_result_remote_height = remote_height;

    let event = QueryResultSubmittedEvent {
        query_id: query.id,
        sender: msg.sender,
        remote_height,
        query_type: query.query_type(),
    };
    let query_id = query.id;
    ctx.store_registered_query(query)?;

    match msg.result {
        SubmittedResult::Kv(kv) => {
            let result = QueryResult {
                kv_results: kv
                    .kv_results
                    .into_iter()
                    .map(|value| value.into_kv_result())
                    .collect(),
                height: kv.height,
                revision: kv.revision,
            };
            ctx.store_query_result(query_id, result)?;
            ctx.log_message(format!(
                "stored kv result of interchain query {query_id} at {remote_height}"
            ))?;
        }
        SubmittedResult::Tx(tx) => {
            let count = tx.transactions.len();
            for record in tx.transactions {
                ctx.store_transaction(record.into_stored(query_id))?;
            }
            ctx.log_message(format!(
                "stored {count} transactions of interchain query {query_id} up to {remote_height}"
            ))?;
        }
    }

    ctx.emit_module_event(event.into())?;

    Ok(())
}
