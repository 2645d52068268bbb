use ibc_app_contract_bindings::{
    handle_msg_json, handle_query_json, BindingError, EmptyResponse, QueryFailuresResponse,
    QueryInterchainAccountAddressResponse, QueryRegisteredQueriesResponse,
    QueryRegisteredQueryResponse, QueryRegisteredQueryResultResponse,
    RegisterInterchainAccountResponse, RegisterInterchainQueryResponse, SubmitTxResponse,
};
use ibc_app_interchain_queries::handler::submit_query_result;
use ibc_app_interchain_queries::types::error::{InterchainQueryError, ERROR_CODE_BASE};
use ibc_app_interchain_queries::types::{KvKey, RemoteHeight};
use ibc_app_interchain_txs::handler::{on_acknowledgement, on_chan_open_ack};
use ibc_app_interchain_txs::types::error::InterchainTxsError;
use ibc_app_interchain_txs::types::controller_port_id;
use ibc_core_host_types::identifiers::{ChannelId, Sequence};
use ibc_testkit::fixtures::applications::interchain_queries::kv_result_msg;
use ibc_testkit::fixtures::applications::interchain_txs::{
    counterparty_version, error_ack, DUMMY_INTERCHAIN_ACCOUNT_ID, DUMMY_REMOTE_ADDRESS,
};
use ibc_testkit::fixtures::core::commitment::RemoteState;
use ibc_testkit::fixtures::core::context::{
    dummy_connection_id, dummy_light_client, MockContextConfig,
};
use ibc_testkit::fixtures::core::signer::{dummy_account_id, dummy_contract_address};
use ibc_testkit::testapp::ibc::core::types::MockContext;
use rstest::rstest;
use serde::de::DeserializeOwned;

const REGISTER_KV_QUERY: &str = r#"{"register_interchain_query":{
    "query_type":"kv",
    "keys":[{"path":"bank","key":"YmFsYW5jZS9hbGljZQ=="}],
    "transactions_filter":"",
    "connection_id":"connection-0",
    "zone_id":"cosmoshub-4",
    "update_period":10
}}"#;

const REGISTER_ACCOUNT: &str = r#"{"register_interchain_account":{
    "connection_id":"connection-0",
    "interchain_account_id":"test-1"
}}"#;

const SUBMIT_TX: &str = r#"{"submit_tx":{
    "connection_id":"connection-0",
    "interchain_account_id":"test-1",
    "msgs":[{"type_url":"/cosmos.bank.v1beta1.MsgSend","value":"CgMBAgM="}],
    "memo":"",
    "timeout":0
}}"#;

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).unwrap()
}

fn execute<T: DeserializeOwned>(ctx: &mut MockContext, request: &str) -> T {
    decode(&handle_msg_json(ctx, dummy_contract_address(), request.as_bytes()).unwrap())
}

fn query<T: DeserializeOwned>(ctx: &MockContext, request: &str) -> T {
    decode(&handle_query_json(ctx, request.as_bytes()).unwrap())
}

fn alice_state() -> RemoteState {
    RemoteState::new().with_value("bank", b"balance/alice", b"100")
}

/// A context with the dummy contract's account registered and opened.
fn opened_account_context() -> MockContext {
    let mut ctx = MockContext::default();
    let registered: RegisterInterchainAccountResponse = execute(&mut ctx, REGISTER_ACCOUNT);
    let port_id = controller_port_id(&dummy_contract_address(), DUMMY_INTERCHAIN_ACCOUNT_ID).unwrap();
    assert_eq!(registered.port_id, port_id.as_str());
    assert_eq!(registered.channel_id, "channel-0");

    let version = counterparty_version(&dummy_connection_id(), DUMMY_REMOTE_ADDRESS).unwrap();
    on_chan_open_ack(
        &mut ctx,
        &dummy_connection_id(),
        &port_id,
        &ChannelId::new(0),
        &version,
    )
    .unwrap();
    ctx
}

#[rstest]
#[test_log::test]
#[case::not_json("register_interchain_query")]
#[case::unknown_tag(r#"{"register_everything":{}}"#)]
#[case::unknown_field(r#"{"remove_interchain_query":{"query_id":1,"force":true}}"#)]
#[case::bad_base64(
    r#"{"submit_tx":{"connection_id":"connection-0","interchain_account_id":"test-1","msgs":[{"type_url":"/a.B","value":"!!"}],"memo":"","timeout":0}}"#
)]
fn test_malformed_request_is_rejected(#[case] request: &str) {
    let mut ctx = MockContext::default();
    let res = handle_msg_json(&mut ctx, dummy_contract_address(), request.as_bytes());
    assert!(matches!(res, Err(BindingError::Decode(_))));
    assert!(ctx.events().is_empty());
}

#[test_log::test]
fn test_malformed_query_is_rejected() {
    let ctx = MockContext::default();
    let res = handle_query_json(&ctx, br#"{"interchain_query_result":{}}"#);
    assert!(matches!(res, Err(BindingError::Decode(_))));
}

#[test_log::test]
fn test_register_and_read_kv_query() {
    let mut ctx = MockContext::default();
    let registered: RegisterInterchainQueryResponse = execute(&mut ctx, REGISTER_KV_QUERY);
    assert_eq!(registered.id, 1);

    let response: QueryRegisteredQueryResponse =
        query(&ctx, r#"{"registered_interchain_query":{"query_id":1}}"#);
    let registered_query = response.registered_query;
    assert_eq!(registered_query.owner, dummy_contract_address().to_string());
    assert_eq!(registered_query.query_type, "kv");
    assert_eq!(registered_query.keys.len(), 1);
    assert_eq!(registered_query.keys[0].path, "bank");
    assert_eq!(registered_query.keys[0].key.as_slice(), b"balance/alice");
    assert_eq!(registered_query.connection_id, "connection-0");
    assert_eq!(registered_query.update_period, 10);
    assert_eq!(registered_query.last_submitted_result_remote_height.revision_height, 0);

    let listed: QueryRegisteredQueriesResponse =
        query(&ctx, r#"{"registered_interchain_queries":{}}"#);
    assert_eq!(listed.registered_queries, vec![registered_query]);

    let listed: QueryRegisteredQueriesResponse = query(
        &ctx,
        &format!(
            r#"{{"registered_interchain_queries":{{"owners":["{}"]}}}}"#,
            dummy_account_id()
        ),
    );
    assert!(listed.registered_queries.is_empty());
}

#[test_log::test]
fn test_unknown_query_type_carries_error_code() {
    let mut ctx = MockContext::default();
    let request = REGISTER_KV_QUERY.replace(r#""kv""#, r#""balance""#);

    let err = handle_msg_json(&mut ctx, dummy_contract_address(), request.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        BindingError::Query(InterchainQueryError::InvalidQueryType { .. })
    ));
    assert_eq!(err.query_error_code(), Some(ERROR_CODE_BASE + 6));
}

#[test_log::test]
fn test_kv_result_is_served() {
    let state = alice_state();
    let light_client = dummy_light_client().with_root(
        dummy_connection_id(),
        RemoteHeight::new(1, 20),
        state.app_hash(),
    );
    let mut ctx = MockContextConfig::builder()
        .light_client(light_client)
        .build();
    let _: RegisterInterchainQueryResponse = execute(&mut ctx, REGISTER_KV_QUERY);

    let request = r#"{"interchain_query_result":{"query_id":1}}"#;
    let err = handle_query_json(&ctx, request.as_bytes()).unwrap_err();
    assert_eq!(err.query_error_code(), Some(ERROR_CODE_BASE + 15));

    let keys = [KvKey::new("bank", b"balance/alice".to_vec())];
    submit_query_result(
        &mut ctx,
        kv_result_msg(1, &state, &keys, RemoteHeight::new(1, 20)),
    )
    .unwrap();

    let response: QueryRegisteredQueryResultResponse = query(&ctx, request);
    assert_eq!(response.result.height, 20);
    assert_eq!(response.result.revision, 1);
    assert_eq!(response.result.kv_results.len(), 1);
    assert_eq!(response.result.kv_results[0].storage_prefix, "bank");
    assert_eq!(response.result.kv_results[0].value.as_slice(), b"100");
}

#[test_log::test]
fn test_update_and_remove_through_bindings() {
    let mut ctx = MockContext::default();
    let _: RegisterInterchainQueryResponse = execute(&mut ctx, REGISTER_KV_QUERY);

    let _: EmptyResponse = execute(
        &mut ctx,
        r#"{"update_interchain_query":{"query_id":1,"new_update_period":25}}"#,
    );
    let response: QueryRegisteredQueryResponse =
        query(&ctx, r#"{"registered_interchain_query":{"query_id":1}}"#);
    assert_eq!(response.registered_query.update_period, 25);

    // only the owner may remove it
    let res = handle_msg_json(
        &mut ctx,
        dummy_account_id(),
        br#"{"remove_interchain_query":{"query_id":1}}"#,
    );
    assert!(matches!(res, Err(BindingError::Query(_))));

    let _: EmptyResponse = execute(&mut ctx, r#"{"remove_interchain_query":{"query_id":1}}"#);
    let res = handle_query_json(&ctx, br#"{"registered_interchain_query":{"query_id":1}}"#);
    assert!(matches!(
        res,
        Err(BindingError::Query(InterchainQueryError::InvalidQueryId { .. }))
    ));
}

#[test_log::test]
fn test_interchain_account_address() {
    let mut ctx = MockContext::default();
    let request = format!(
        r#"{{"interchain_account_address":{{"owner_address":"{}","interchain_account_id":"test-1","connection_id":"connection-0"}}}}"#,
        dummy_contract_address()
    );

    let res = handle_query_json(&ctx, request.as_bytes());
    assert!(matches!(
        res,
        Err(BindingError::Txs(InterchainTxsError::AccountNotFound { .. }))
    ));

    let _: RegisterInterchainAccountResponse = execute(&mut ctx, REGISTER_ACCOUNT);
    let res = handle_query_json(&ctx, request.as_bytes());
    assert!(matches!(
        res,
        Err(BindingError::Txs(InterchainTxsError::AccountNotFound { .. }))
    ));

    let ctx = opened_account_context();
    let response: QueryInterchainAccountAddressResponse = query(&ctx, &request);
    assert_eq!(response.interchain_account_address, DUMMY_REMOTE_ADDRESS);
}

#[test_log::test]
fn test_submit_tx_and_failures() {
    let mut ctx = opened_account_context();

    let response: SubmitTxResponse = execute(&mut ctx, SUBMIT_TX);
    assert_eq!(response.sequence_id, 1);
    assert_eq!(response.channel, "channel-0");
    assert_eq!(ctx.sent_packets().len(), 1);

    let port_id = controller_port_id(&dummy_contract_address(), DUMMY_INTERCHAIN_ACCOUNT_ID).unwrap();
    on_acknowledgement(
        &mut ctx,
        &port_id,
        &ChannelId::new(0),
        Sequence::from(1),
        &error_ack("insufficient funds").unwrap(),
    )
    .unwrap();

    let own = format!(r#"{{"failures":{{"address":"{}"}}}}"#, dummy_contract_address());
    let response: QueryFailuresResponse = query(&ctx, &own);
    assert_eq!(response.failures.len(), 1);
    assert_eq!(response.failures[0].id, 0);
    assert_eq!(response.failures[0].sequence_id, 1);
    assert_eq!(response.failures[0].channel_id, "channel-0");
    assert_eq!(response.failures[0].ack_type, "ack");
    assert_eq!(response.failures[0].error, "insufficient funds");

    let other = format!(r#"{{"failures":{{"address":"{}"}}}}"#, dummy_account_id());
    let response: QueryFailuresResponse = query(&ctx, &other);
    assert!(response.failures.is_empty());

    let response: QueryFailuresResponse = query(&ctx, r#"{"failures":{}}"#);
    assert_eq!(response.failures.len(), 1);
}

#[test_log::test]
fn test_submit_tx_without_account() {
    let mut ctx = MockContext::default();
    let res = handle_msg_json(&mut ctx, dummy_contract_address(), SUBMIT_TX.as_bytes());
    assert!(matches!(
        res,
        Err(BindingError::Txs(InterchainTxsError::AccountNotFound { .. }))
    ));
    assert!(ctx.sent_packets().is_empty());
}
