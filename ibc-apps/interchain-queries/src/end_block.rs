//! End-of-block scheduling of query solicitations.
use ibc_app_interchain_queries_types::error::InterchainQueryError;
use ibc_app_interchain_queries_types::events::SolicitationEvent;
use ibc_app_interchain_queries_types::{QueryKind, RegisteredQuery};
use ibc_primitives::prelude::*;

use crate::context::InterchainQueryExecutionContext;

/// Emits a solicitation for every query due at the current height and
/// records the emission height, visiting queries in ascending id order.
///
/// A query that is never answered is solicited again every time its update
/// period elapses. Failing to persist one query is logged and does not stop
/// the pass.
pub fn end_block<Ctx>(ctx: &mut Ctx) -> Result<(), InterchainQueryError>
where
    Ctx: InterchainQueryExecutionContext,
{
    let host_height = ctx.host_height()?;

    for mut query in ctx.registered_queries()? {
        if !query.is_due(host_height) {
            continue;
        }

        let query_id = query.id;
        let event = match solicitation_event(&query) {
            Ok(event) => event,
            Err(e) => {
                ctx.log_message(format!(
                    "skipping solicitation of interchain query {query_id}: {e}"
                ))?;
                continue;
            }
        };
        ctx.emit_module_event(event.into())?;

        query.last_emitted_height = host_height;
        if let Err(e) = ctx.store_registered_query(query) {
            ctx.log_message(format!(
                "failed to save interchain query {query_id} at height {host_height}: {e}"
            ))?;
        }
    }

    Ok(())
}

pub fn solicitation_event(
    query: &RegisteredQuery,
) -> Result<SolicitationEvent, InterchainQueryError> {
    let (kv_key, tx_filter) = match &query.kind {
        QueryKind::Kv(keys) => (keys.to_string(), String::new()),
        QueryKind::Tx(filter) => (String::new(), filter.to_json()?),
    };

    Ok(SolicitationEvent {
        query_id: query.id,
        owner: query.owner.clone(),
        connection_id: query.connection_id.clone(),
        zone_id: query.zone_id.clone(),
        query_type: query.query_type(),
        kv_key,
        tx_filter,
    })
}
