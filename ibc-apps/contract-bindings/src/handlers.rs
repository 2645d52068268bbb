//! Dispatch of decoded requests and queries to the applications.
use core::str::FromStr;

use ibc_app_interchain_queries::context::{
    InterchainQueryExecutionContext, InterchainQueryValidationContext,
};
use ibc_app_interchain_queries::handler::{register_query, remove_query, update_query};
use ibc_app_interchain_queries::query as icq;
use ibc_app_interchain_txs::context::{InterchainTxsExecutionContext, InterchainTxsValidationContext};
use ibc_app_interchain_txs::handler::{register_interchain_account, submit_tx};
use ibc_app_interchain_txs::query as ica;
use ibc_core_host_types::identifiers::ConnectionId;
use ibc_primitives::Signer;
use serde::Serialize;
use tracing::debug;

use crate::{
    BindingError, CustomMsg, CustomQuery, EmptyResponse, FailureJson, HostMsg, QueryFailuresResponse,
    QueryInterchainAccountAddressResponse, QueryRegisteredQueriesResponse,
    QueryRegisteredQueryResponse, QueryRegisteredQueryResultResponse,
    QueryTransactionsSearchResponse, RegisterInterchainAccountResponse,
    RegisterInterchainQueryResponse, RegisteredQueryJson, SubmitTxResponse, TransactionJson,
};

fn to_json<T: Serialize>(response: &T) -> Result<Vec<u8>, BindingError> {
    serde_json::to_vec(response).map_err(|e| BindingError::Encode(e.to_string()))
}

/// Decodes a JSON request sent by `contract` and executes it.
pub fn handle_msg_json<Ctx>(
    ctx: &mut Ctx,
    contract: Signer,
    request: &[u8],
) -> Result<Vec<u8>, BindingError>
where
    Ctx: InterchainQueryExecutionContext + InterchainTxsExecutionContext,
{
    let msg: CustomMsg = serde_json::from_slice(request).map_err(|e| {
        debug!(%contract, error = %e, "rejected malformed contract request");
        BindingError::Decode(e.to_string())
    })?;
    handle_msg(ctx, contract, msg)
}

/// Executes `msg` on behalf of `contract`, returning the JSON response.
pub fn handle_msg<Ctx>(
    ctx: &mut Ctx,
    contract: Signer,
    msg: CustomMsg,
) -> Result<Vec<u8>, BindingError>
where
    Ctx: InterchainQueryExecutionContext + InterchainTxsExecutionContext,
{
    let kind = msg.kind();
    let result = HostMsg::new(contract.clone(), msg).and_then(|msg| dispatch(ctx, msg));
    match &result {
        Ok(response) => debug!(
            %contract,
            kind,
            response = %String::from_utf8_lossy(response),
            "executed contract request"
        ),
        Err(e) => debug!(%contract, kind, error = %e, "contract request failed"),
    }
    result
}

fn dispatch<Ctx>(ctx: &mut Ctx, msg: HostMsg) -> Result<Vec<u8>, BindingError>
where
    Ctx: InterchainQueryExecutionContext + InterchainTxsExecutionContext,
{
    match msg {
        HostMsg::RegisterInterchainAccount(msg) => {
            let port_id = msg.port_id()?;
            let channel_id = register_interchain_account(ctx, msg)?;
            to_json(&RegisterInterchainAccountResponse {
                port_id: port_id.to_string(),
                channel_id: channel_id.to_string(),
            })
        }
        HostMsg::SubmitTx(msg) => {
            let response = submit_tx(ctx, msg)?;
            to_json(&SubmitTxResponse {
                sequence_id: response.sequence.value(),
                channel: response.channel_id.to_string(),
            })
        }
        HostMsg::RegisterInterchainQuery(msg) => {
            let id = register_query(ctx, msg)?;
            to_json(&RegisterInterchainQueryResponse { id })
        }
        HostMsg::UpdateInterchainQuery(msg) => {
            update_query(ctx, msg)?;
            to_json(&EmptyResponse {})
        }
        HostMsg::RemoveInterchainQuery(msg) => {
            remove_query(ctx, msg)?;
            to_json(&EmptyResponse {})
        }
    }
}

/// Decodes a JSON query and answers it.
pub fn handle_query_json<Ctx>(ctx: &Ctx, request: &[u8]) -> Result<Vec<u8>, BindingError>
where
    Ctx: InterchainQueryValidationContext + InterchainTxsValidationContext,
{
    let query: CustomQuery = serde_json::from_slice(request).map_err(|e| {
        debug!(error = %e, "rejected malformed contract query");
        BindingError::Decode(e.to_string())
    })?;
    handle_query(ctx, query)
}

/// Answers `query` with a JSON response.
pub fn handle_query<Ctx>(ctx: &Ctx, query: CustomQuery) -> Result<Vec<u8>, BindingError>
where
    Ctx: InterchainQueryValidationContext + InterchainTxsValidationContext,
{
    let kind = query.kind();
    let result = answer(ctx, query);
    if let Err(e) = &result {
        debug!(kind, error = %e, "contract query failed");
    }
    result
}

fn answer<Ctx>(ctx: &Ctx, query: CustomQuery) -> Result<Vec<u8>, BindingError>
where
    Ctx: InterchainQueryValidationContext + InterchainTxsValidationContext,
{
    match query {
        CustomQuery::InterchainQueryResult { query_id } => {
            let result = icq::query_result(ctx, query_id)?;
            to_json(&QueryRegisteredQueryResultResponse {
                result: result.into(),
            })
        }
        CustomQuery::InterchainAccountAddress {
            owner_address,
            interchain_account_id,
            connection_id,
        } => {
            let address = ica::interchain_account_address(
                ctx,
                &Signer::from(owner_address),
                &connection_id,
                &interchain_account_id,
            )?;
            to_json(&QueryInterchainAccountAddressResponse {
                interchain_account_address: address,
            })
        }
        CustomQuery::RegisteredInterchainQueries {
            owners,
            connection_id,
            pagination,
        } => {
            let owners: Vec<Signer> = owners.into_iter().map(Signer::from).collect();
            let connection_id = if connection_id.is_empty() {
                None
            } else {
                Some(ConnectionId::from_str(&connection_id)?)
            };
            let registered_queries =
                icq::registered_queries(ctx, &owners, connection_id.as_ref(), pagination.into())?
                    .into_iter()
                    .map(RegisteredQueryJson::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
            to_json(&QueryRegisteredQueriesResponse { registered_queries })
        }
        CustomQuery::RegisteredInterchainQuery { query_id } => {
            let registered_query = RegisteredQueryJson::try_from(icq::registered_query(ctx, query_id)?)?;
            to_json(&QueryRegisteredQueryResponse { registered_query })
        }
        CustomQuery::TransactionsSearchResult {
            query_id,
            start_height,
            end_height,
        } => {
            let transactions = icq::matched_transactions(ctx, query_id, start_height, end_height)?
                .map(TransactionJson::from)
                .collect();
            to_json(&QueryTransactionsSearchResponse { transactions })
        }
        CustomQuery::Failures {
            address,
            pagination,
        } => {
            let failures = match address {
                Some(address) => ica::failures(ctx, &Signer::from(address))?,
                None => ica::all_failures(ctx)?,
            };
            let failures = icq::PageRequest::from(pagination)
                .paginate(failures.into_iter())
                .into_iter()
                .map(FailureJson::from)
                .collect();
            to_json(&QueryFailuresResponse { failures })
        }
    }
}
