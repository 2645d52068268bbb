//! Read-only queries over the interchain queries state.
use ibc_app_interchain_queries_types::error::InterchainQueryError;
use ibc_app_interchain_queries_types::{QueryResult, RegisteredQuery, StoredTransaction};
use ibc_core_host_types::identifiers::ConnectionId;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use crate::context::InterchainQueryValidationContext;

/// Offset and limit applied to list queries. A zero limit returns
/// everything after the offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }

    /// Skips `offset` items and keeps at most `limit` of the rest.
    pub fn paginate<T>(&self, items: impl Iterator<Item = T>) -> Vec<T> {
        let items = items.skip(usize::try_from(self.offset).unwrap_or(usize::MAX));
        match usize::try_from(self.limit) {
            Ok(0) => items.collect(),
            Ok(limit) => items.take(limit).collect(),
            Err(_) => items.collect(),
        }
    }
}

/// Registered queries, optionally restricted to the given owners and to one
/// connection, in ascending id order.
pub fn registered_queries<Ctx>(
    ctx: &Ctx,
    owners: &[Signer],
    connection_id: Option<&ConnectionId>,
    page: PageRequest,
) -> Result<Vec<RegisteredQuery>, InterchainQueryError>
where
    Ctx: InterchainQueryValidationContext,
{
    let queries = ctx.registered_queries()?.into_iter().filter(|q| {
        (owners.is_empty() || owners.contains(&q.owner))
            && connection_id.map_or(true, |id| &q.connection_id == id)
    });
    Ok(page.paginate(queries))
}

pub fn registered_query<Ctx>(
    ctx: &Ctx,
    query_id: u64,
) -> Result<RegisteredQuery, InterchainQueryError>
where
    Ctx: InterchainQueryValidationContext,
{
    ctx.registered_query(query_id)
}

/// The last verified result of a key-value query.
pub fn query_result<Ctx>(ctx: &Ctx, query_id: u64) -> Result<QueryResult, InterchainQueryError>
where
    Ctx: InterchainQueryValidationContext,
{
    ctx.registered_query(query_id)?;
    ctx.query_result(query_id)?
        .ok_or(InterchainQueryError::NoQueryResult { query_id })
}

/// Transactions verified for a transaction-search query with a remote height
/// within `start_height..=end_height`, ordered by height then index. An
/// empty range yields nothing.
pub fn matched_transactions<Ctx>(
    ctx: &Ctx,
    query_id: u64,
    start_height: u64,
    end_height: u64,
) -> Result<Box<dyn Iterator<Item = StoredTransaction> + '_>, InterchainQueryError>
where
    Ctx: InterchainQueryValidationContext,
{
    ctx.registered_query(query_id)?;
    if start_height > end_height {
        return Ok(Box::new(core::iter::empty()));
    }
    ctx.stored_transactions(query_id, start_height, end_height)
}
