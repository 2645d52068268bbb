//! Verification of submitted query results against the remote roots the
//! host's light clients trust.
//!
//! Verification only reads committed state, so the same payload always
//! yields the same outcome.
use ibc_app_interchain_queries_types::error::InterchainQueryError;
use ibc_app_interchain_queries_types::merkle::verify_commitment_proof;
use ibc_app_interchain_queries_types::{
    KvKey, KvQueryResult, Params, RegisteredQuery, RemoteHeight, SubmittedResult, TxQueryResult,
};
use ibc_core_host_types::identifiers::ConnectionId;
use ibc_primitives::prelude::*;
use ics23::HostFunctionsManager;

use crate::context::LightClientContext;

/// Verifies `result` for `query`, dispatching on the result kind.
pub fn verify_result<L>(
    light_client: &L,
    params: &Params,
    query: &RegisteredQuery,
    result: &SubmittedResult,
) -> Result<(), InterchainQueryError>
where
    L: LightClientContext,
{
    let remote_height = result.remote_height();
    if remote_height < query.last_submitted_result_remote_height {
        return Err(InterchainQueryError::InvalidHeight {
            reason: format!(
                "result at {remote_height} is older than the last accepted one at {}",
                query.last_submitted_result_remote_height
            ),
        });
    }

    match result {
        SubmittedResult::Kv(kv) => verify_kv_result(light_client, params, query, kv),
        SubmittedResult::Tx(tx) => verify_tx_result(light_client, params, query, tx),
    }
}

fn trusted_root<L>(
    light_client: &L,
    connection_id: &ConnectionId,
    height: RemoteHeight,
) -> Result<Vec<u8>, InterchainQueryError>
where
    L: LightClientContext,
{
    light_client
        .consensus_root(connection_id, height)?
        .ok_or_else(|| InterchainQueryError::InvalidHeader {
            reason: format!("no trusted consensus state for {connection_id} at {height}"),
        })
}

/// Every submitted pair must answer one registered key, every registered key
/// must be answered once, and every value must be proven under the app hash
/// the light client trusts at the result height. Empty values are proven
/// absent.
pub fn verify_kv_result<L>(
    light_client: &L,
    params: &Params,
    query: &RegisteredQuery,
    result: &KvQueryResult,
) -> Result<(), InterchainQueryError>
where
    L: LightClientContext,
{
    let keys = query
        .keys()
        .ok_or_else(|| InterchainQueryError::InvalidQueryType {
            reason: format!("query {} does not read keys", query.id),
        })?;

    let height = result.remote_height();
    if result.header.height != height {
        return Err(InterchainQueryError::InvalidHeight {
            reason: format!(
                "header at {} does not match result at {height}",
                result.header.height
            ),
        });
    }

    let root = trusted_root(light_client, &query.connection_id, height)?;
    if root != result.header.app_hash {
        return Err(InterchainQueryError::InvalidHeader {
            reason: format!("app hash at {height} does not match the trusted root"),
        });
    }

    for (i, value) in result.kv_results.iter().enumerate() {
        let key = keys.find(&value.storage_prefix, &value.key).ok_or_else(|| {
            InterchainQueryError::InvalidType {
                query_id: query.id,
                key: KvKey::new(value.storage_prefix.clone(), value.key.clone()).to_string(),
            }
        })?;
        let duplicate = result.kv_results[..i]
            .iter()
            .any(|v| v.storage_prefix == value.storage_prefix && v.key == value.key);
        if duplicate {
            return Err(InterchainQueryError::InvalidSubmittedResult {
                reason: format!("key `{key}` is answered more than once"),
            });
        }
    }
    if result.kv_results.len() != keys.len() {
        return Err(InterchainQueryError::InvalidSubmittedResult {
            reason: format!(
                "query {} reads {} keys, {} were answered",
                query.id,
                keys.len(),
                result.kv_results.len()
            ),
        });
    }

    for value in &result.kv_results {
        let proof = value.merkle_proof()?;
        let path = [value.storage_prefix.as_bytes(), value.key.as_slice()];
        if value.value.is_empty() {
            proof.verify_non_membership::<HostFunctionsManager>(&params.proof_specs, &root, &path)?;
        } else {
            proof.verify_membership::<HostFunctionsManager>(
                &params.proof_specs,
                &root,
                &path,
                value.value.clone(),
                0,
            )?;
        }
    }

    Ok(())
}

/// Every submitted transaction must lie between the last accepted remote
/// height and the result height (inclusive), satisfy the query's filter, and
/// be proven under the root trusted at its own height. The proven value
/// commits to the transaction's position in its block, so a record can only
/// be stored under the index it actually has.
pub fn verify_tx_result<L>(
    light_client: &L,
    params: &Params,
    query: &RegisteredQuery,
    result: &TxQueryResult,
) -> Result<(), InterchainQueryError>
where
    L: LightClientContext,
{
    let filter = query
        .transactions_filter()
        .ok_or_else(|| InterchainQueryError::InvalidQueryType {
            reason: format!("query {} does not search transactions", query.id),
        })?;

    let last = query.last_submitted_result_remote_height;
    let lower_bound = if last.revision_number == result.revision {
        last.revision_height
    } else {
        0
    };

    for (i, record) in result.transactions.iter().enumerate() {
        if record.height < lower_bound || record.height > result.height {
            return Err(InterchainQueryError::InvalidSubmittedResult {
                reason: format!(
                    "transaction at height {} is outside of [{lower_bound}, {}]",
                    record.height, result.height
                ),
            });
        }
        let duplicate = result.transactions[..i].iter().any(|t| {
            t.height == record.height && (t.index == record.index || t.tx == record.tx)
        });
        if duplicate {
            return Err(InterchainQueryError::InvalidSubmittedResult {
                reason: format!(
                    "transaction {} at height {} is submitted more than once",
                    record.index, record.height
                ),
            });
        }
        if !filter.matches(&record.events) {
            return Err(InterchainQueryError::InvalidSubmittedResult {
                reason: format!(
                    "transaction {} at height {} does not match `{filter}`",
                    record.index, record.height
                ),
            });
        }

        let root = trusted_root(
            light_client,
            &query.connection_id,
            RemoteHeight::new(result.revision, record.height),
        )?;
        verify_commitment_proof::<HostFunctionsManager>(
            &params.tx_proof_spec,
            &root,
            &record.proof,
            &record.hash(),
            &record.commitment_value(),
        )?;
    }

    Ok(())
}
