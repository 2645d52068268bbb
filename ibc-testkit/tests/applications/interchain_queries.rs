use ibc_app_interchain_queries::end_block::end_block;
use ibc_app_interchain_queries::handler::{
    register_query, register_query_execute, register_query_validate, remove_query,
    submit_query_result, update_query,
};
use ibc_app_interchain_queries::query::{
    matched_transactions, query_result, registered_queries, registered_query, PageRequest,
};
use ibc_app_interchain_queries::types::error::InterchainQueryError;
use ibc_app_interchain_queries::types::msgs::{MsgRegisterInterchainQuery, MsgUpdateInterchainQuery};
use ibc_app_interchain_queries::types::{KvKey, RemoteHeight, SubmittedResult, TxEventAttribute};
use ibc_core_host_types::identifiers::ConnectionId;
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::Signer;
use ibc_testkit::fixtures::applications::interchain_queries::{
    dummy_kv_query_msg, dummy_remove_query_msg, dummy_tx_query_msg, kv_result_msg, tx_result_msg,
};
use ibc_testkit::fixtures::core::commitment::{RemoteBlock, RemoteState};
use ibc_testkit::fixtures::core::context::{
    dummy_connection_id, dummy_light_client, tendermint_query_params, MockContextConfig,
};
use ibc_testkit::fixtures::core::signer::{dummy_account_id, dummy_contract_address};
use ibc_testkit::fixtures::{Expect, Fixture};
use ibc_testkit::testapp::ibc::core::types::{MockContext, DEFAULT_HOST_HEIGHT};
use rstest::rstest;

const AMOUNT_FILTER: &str = r#"[{"field":"amount","op":"gte","value":"100"}]"#;

fn attribute<'a>(event: &'a ModuleEvent, key: &str) -> Option<&'a str> {
    event
        .attributes
        .iter()
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.as_str())
}

fn solicitations(ctx: &mut MockContext) -> Vec<ModuleEvent> {
    ctx.take_events()
        .into_iter()
        .filter(|event| attribute(event, "action") == Some("query"))
        .collect()
}

fn remote_state() -> RemoteState {
    RemoteState::new()
        .with_value("bank", b"balance/alice", b"100")
        .with_value("bank", b"balance/bob", b"42")
        .with_value("staking", b"validator/1", b"bonded")
        .with_value("gov", b"proposal/1", b"passed")
}

fn alice_balance() -> KvKey {
    KvKey::new("bank", b"balance/alice".to_vec())
}

fn validator() -> KvKey {
    KvKey::new("staking", b"validator/1".to_vec())
}

/// A context at height 5 trusting `state` at remote height 1-20.
fn trusting_context(state: &RemoteState) -> MockContext {
    let light_client = dummy_light_client().with_root(
        dummy_connection_id(),
        RemoteHeight::new(1, 20),
        state.app_hash(),
    );
    MockContextConfig::builder().light_client(light_client).build()
}

enum Msg {
    Default,
    ZeroUpdatePeriod,
    UnknownConnection,
    NoKeys,
    TooManyKeys,
    TxWithoutFilter,
}

fn register_query_fixture(msg_variant: Msg) -> Fixture<MsgRegisterInterchainQuery> {
    let msg_default = dummy_kv_query_msg(vec![alice_balance()], 10);
    let msg = match msg_variant {
        Msg::Default => msg_default,
        Msg::ZeroUpdatePeriod => dummy_kv_query_msg(vec![alice_balance()], 0),
        Msg::UnknownConnection => MsgRegisterInterchainQuery {
            connection_id: "connection-7".to_string(),
            ..msg_default
        },
        Msg::NoKeys => dummy_kv_query_msg(vec![], 10),
        Msg::TooManyKeys => dummy_kv_query_msg(
            (0..33u8)
                .map(|i| KvKey::new("bank", vec![i + 1]))
                .collect(),
            10,
        ),
        Msg::TxWithoutFilter => dummy_tx_query_msg("", 10),
    };

    Fixture {
        ctx: MockContext::default(),
        msg,
    }
}

fn register_query_validate_fixture(fxt: &Fixture<MsgRegisterInterchainQuery>, expect: Expect) {
    let res = register_query_validate(&fxt.ctx, &fxt.msg);
    let err_msg = fxt.generate_error_msg(&expect, "validation", &res);
    match expect {
        Expect::Failure => assert!(res.is_err(), "{err_msg}"),
        Expect::Success => assert!(res.is_ok(), "{err_msg}"),
    }
}

#[rstest]
#[test_log::test]
#[case::default(Msg::Default, Expect::Success)]
#[case::zero_update_period(Msg::ZeroUpdatePeriod, Expect::Failure)]
#[case::unknown_connection(Msg::UnknownConnection, Expect::Failure)]
#[case::no_keys(Msg::NoKeys, Expect::Failure)]
#[case::too_many_keys(Msg::TooManyKeys, Expect::Failure)]
#[case::tx_without_filter(Msg::TxWithoutFilter, Expect::Failure)]
fn test_register_query_validate(#[case] msg_variant: Msg, #[case] expect: Expect) {
    let fxt = register_query_fixture(msg_variant);
    register_query_validate_fixture(&fxt, expect);
}

#[test_log::test]
fn test_register_query_rejects_zero_update_period() {
    let mut ctx = MockContext::default();
    let res = register_query(&mut ctx, dummy_kv_query_msg(vec![alice_balance()], 0));
    assert!(matches!(res, Err(InterchainQueryError::InvalidUpdatePeriod)));
    assert!(registered_query(&ctx, 1).is_err());
}

#[test_log::test]
fn test_register_query_assigns_increasing_ids() {
    let mut fxt = register_query_fixture(Msg::Default);
    register_query_validate_fixture(&fxt, Expect::Success);

    let first = register_query_execute(&mut fxt.ctx, fxt.msg.clone()).unwrap();
    let second = register_query(&mut fxt.ctx, dummy_tx_query_msg(AMOUNT_FILTER, 5)).unwrap();
    assert_eq!(first, 1);
    assert_eq!(second, 2);

    let query = registered_query(&fxt.ctx, first).unwrap();
    assert_eq!(query.owner, dummy_contract_address());
    assert_eq!(query.connection_id, dummy_connection_id());
    assert_eq!(query.registered_at_height, DEFAULT_HOST_HEIGHT);
    assert_eq!(query.last_emitted_height, DEFAULT_HOST_HEIGHT);
    assert_eq!(query.last_submitted_result_local_height, 0);
    assert_eq!(query.last_submitted_result_remote_height, RemoteHeight::default());

    let events = fxt.ctx.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, "query_registered");
    assert_eq!(attribute(&events[1], "query_id"), Some("2"));
}

#[test_log::test]
fn test_end_block_solicits_due_queries() {
    let mut ctx = MockContextConfig::builder().host_height(100).build();
    let query_id = register_query(&mut ctx, dummy_tx_query_msg(AMOUNT_FILTER, 10)).unwrap();
    ctx.take_events();

    ctx.advance_to_height(109);
    end_block(&mut ctx).unwrap();
    assert!(solicitations(&mut ctx).is_empty());

    ctx.advance_to_height(110);
    end_block(&mut ctx).unwrap();
    let events = solicitations(&mut ctx);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, "message");
    assert_eq!(attribute(&events[0], "module"), Some("interchainqueries"));
    assert_eq!(attribute(&events[0], "query_id"), Some("1"));
    assert_eq!(attribute(&events[0], "type"), Some("tx"));
    assert_eq!(attribute(&events[0], "tx_filter"), Some(AMOUNT_FILTER));
    assert_eq!(attribute(&events[0], "kv_key"), Some(""));
    assert_eq!(
        registered_query(&ctx, query_id).unwrap().last_emitted_height,
        110
    );

    // the schedule restarts from the last emission
    ctx.advance_to_height(119);
    end_block(&mut ctx).unwrap();
    assert!(solicitations(&mut ctx).is_empty());

    ctx.advance_to_height(120);
    end_block(&mut ctx).unwrap();
    assert_eq!(solicitations(&mut ctx).len(), 1);
}

#[test_log::test]
fn test_end_block_continues_past_failed_save() {
    let mut ctx = MockContextConfig::builder().host_height(100).build();
    let first = register_query(&mut ctx, dummy_tx_query_msg(AMOUNT_FILTER, 10)).unwrap();
    let second = register_query(&mut ctx, dummy_kv_query_msg(vec![alice_balance()], 10)).unwrap();
    ctx.take_events();
    ctx.fail_query_saves(first);

    ctx.advance_to_height(110);
    end_block(&mut ctx).unwrap();

    let solicited: Vec<_> = solicitations(&mut ctx)
        .iter()
        .filter_map(|event| attribute(event, "query_id").map(str::to_string))
        .collect();
    assert_eq!(solicited, vec![first.to_string(), second.to_string()]);

    assert_eq!(registered_query(&ctx, first).unwrap().last_emitted_height, 100);
    assert_eq!(registered_query(&ctx, second).unwrap().last_emitted_height, 110);
    assert!(ctx
        .logs()
        .iter()
        .any(|log| log.starts_with(&format!("failed to save interchain query {first}"))));
}

#[test_log::test]
fn test_end_block_renders_kv_keys() {
    let mut ctx = MockContext::default();
    register_query(&mut ctx, dummy_kv_query_msg(vec![alice_balance(), validator()], 1)).unwrap();
    ctx.take_events();

    ctx.advance_to_height(DEFAULT_HOST_HEIGHT + 1);
    end_block(&mut ctx).unwrap();

    let events = solicitations(&mut ctx);
    assert_eq!(events.len(), 1);
    assert_eq!(
        attribute(&events[0], "kv_key"),
        Some("bank/62616c616e63652f616c696365,staking/76616c696461746f722f31")
    );
    assert_eq!(attribute(&events[0], "tx_filter"), Some(""));
}

#[test_log::test]
fn test_kv_result_round_trip() {
    let state = remote_state();
    let mut ctx = trusting_context(&state);
    let keys = vec![alice_balance(), validator()];
    let query_id = register_query(&mut ctx, dummy_kv_query_msg(keys.clone(), 10)).unwrap();

    let msg = kv_result_msg(query_id, &state, &keys, RemoteHeight::new(1, 20));
    submit_query_result(&mut ctx, msg.clone()).unwrap();

    let result = query_result(&ctx, query_id).unwrap();
    assert_eq!(result.height, 20);
    assert_eq!(result.revision, 1);
    assert_eq!(result.kv_results.len(), 2);
    assert_eq!(result.kv_results[0].storage_prefix, "bank");
    assert_eq!(result.kv_results[0].key, b"balance/alice".to_vec());
    assert_eq!(result.kv_results[0].value, b"100".to_vec());
    assert_eq!(result.kv_results[1].value, b"bonded".to_vec());

    let query = registered_query(&ctx, query_id).unwrap();
    assert_eq!(query.last_submitted_result_local_height, DEFAULT_HOST_HEIGHT);
    assert_eq!(
        query.last_submitted_result_remote_height,
        RemoteHeight::new(1, 20)
    );

    // resubmitting at the same height is accepted and changes nothing
    submit_query_result(&mut ctx, msg).unwrap();
    assert_eq!(query_result(&ctx, query_id).unwrap(), result);
}

#[test_log::test]
fn test_kv_result_proves_absent_key() {
    let state = remote_state();
    let mut ctx = trusting_context(&state);
    let keys = vec![KvKey::new("bank", b"balance/mallory".to_vec())];
    let query_id = register_query(&mut ctx, dummy_kv_query_msg(keys.clone(), 10)).unwrap();

    let msg = kv_result_msg(query_id, &state, &keys, RemoteHeight::new(1, 20));
    submit_query_result(&mut ctx, msg).unwrap();

    let result = query_result(&ctx, query_id).unwrap();
    assert!(result.kv_results[0].value.is_empty());
}

#[test_log::test]
fn test_kv_result_with_unregistered_key_is_rejected() {
    let state = remote_state();
    let mut ctx = trusting_context(&state);
    let keys = vec![alice_balance(), validator()];
    let query_id = register_query(&mut ctx, dummy_kv_query_msg(keys.clone(), 10)).unwrap();

    submit_query_result(
        &mut ctx,
        kv_result_msg(query_id, &state, &keys, RemoteHeight::new(1, 20)),
    )
    .unwrap();
    let before = query_result(&ctx, query_id).unwrap();

    let bob = KvKey::new("bank", b"balance/bob".to_vec());
    let res = submit_query_result(
        &mut ctx,
        kv_result_msg(query_id, &state, &[alice_balance(), bob], RemoteHeight::new(1, 20)),
    );
    assert!(matches!(res, Err(InterchainQueryError::InvalidType { .. })));
    assert_eq!(query_result(&ctx, query_id).unwrap(), before);
}

#[test_log::test]
fn test_kv_result_must_answer_every_key() {
    let state = remote_state();
    let mut ctx = trusting_context(&state);
    let keys = vec![alice_balance(), validator()];
    let query_id = register_query(&mut ctx, dummy_kv_query_msg(keys, 10)).unwrap();

    let res = submit_query_result(
        &mut ctx,
        kv_result_msg(query_id, &state, &[alice_balance()], RemoteHeight::new(1, 20)),
    );
    assert!(matches!(
        res,
        Err(InterchainQueryError::InvalidSubmittedResult { .. })
    ));
    assert!(matches!(
        query_result(&ctx, query_id),
        Err(InterchainQueryError::NoQueryResult { .. })
    ));
}

#[test_log::test]
fn test_kv_result_at_untrusted_height_is_rejected() {
    let state = remote_state();
    let mut ctx = trusting_context(&state);
    let keys = vec![alice_balance()];
    let query_id = register_query(&mut ctx, dummy_kv_query_msg(keys.clone(), 10)).unwrap();

    let res = submit_query_result(
        &mut ctx,
        kv_result_msg(query_id, &state, &keys, RemoteHeight::new(1, 21)),
    );
    assert!(matches!(res, Err(InterchainQueryError::InvalidHeader { .. })));
}

#[test_log::test]
fn test_kv_result_with_forged_value_is_rejected() {
    let state = remote_state();
    let mut ctx = trusting_context(&state);
    let keys = vec![alice_balance()];
    let query_id = register_query(&mut ctx, dummy_kv_query_msg(keys.clone(), 10)).unwrap();

    let forged = remote_state().with_value("bank", b"balance/alice", b"1000000");
    let mut msg = kv_result_msg(query_id, &forged, &keys, RemoteHeight::new(1, 20));
    // keep the trusted header, present the forged value and proof
    if let SubmittedResult::Kv(kv) = &mut msg.result {
        kv.header = state.header(RemoteHeight::new(1, 20));
    }

    let res = submit_query_result(&mut ctx, msg);
    assert!(matches!(res, Err(InterchainQueryError::InvalidProof { .. })));
}

#[test_log::test]
fn test_kv_result_with_wrong_client_is_rejected() {
    let state = remote_state();
    let mut ctx = trusting_context(&state);
    let keys = vec![alice_balance()];
    let query_id = register_query(&mut ctx, dummy_kv_query_msg(keys.clone(), 10)).unwrap();

    let mut msg = kv_result_msg(query_id, &state, &keys, RemoteHeight::new(1, 20));
    msg.client_id = "07-tendermint-9".to_string();

    let res = submit_query_result(&mut ctx, msg);
    assert!(matches!(res, Err(InterchainQueryError::InvalidClientId(_))));
}

#[test_log::test]
fn test_older_result_is_rejected() {
    let state = remote_state();
    let light_client = dummy_light_client()
        .with_root(dummy_connection_id(), RemoteHeight::new(1, 20), state.app_hash())
        .with_root(dummy_connection_id(), RemoteHeight::new(1, 19), state.app_hash());
    let mut ctx = MockContextConfig::builder().light_client(light_client).build();
    let keys = vec![alice_balance()];
    let query_id = register_query(&mut ctx, dummy_kv_query_msg(keys.clone(), 10)).unwrap();

    submit_query_result(
        &mut ctx,
        kv_result_msg(query_id, &state, &keys, RemoteHeight::new(1, 20)),
    )
    .unwrap();

    let res = submit_query_result(
        &mut ctx,
        kv_result_msg(query_id, &state, &keys, RemoteHeight::new(1, 19)),
    );
    assert!(matches!(res, Err(InterchainQueryError::InvalidHeight { .. })));
}

fn tx_blocks() -> (RemoteBlock, RemoteBlock) {
    let early = RemoteBlock::new(104).with_tx(
        b"tx-a",
        vec![
            TxEventAttribute::new("sender", "cosmos1alice"),
            TxEventAttribute::new("amount", "150"),
        ],
    );
    let late = RemoteBlock::new(108)
        .with_tx(b"tx-b", vec![TxEventAttribute::new("amount", "20")])
        .with_tx(b"tx-c", vec![TxEventAttribute::new("amount", "300")])
        .with_tx(b"tx-d", vec![TxEventAttribute::new("amount", "100")]);
    (early, late)
}

fn tx_context(blocks: &[&RemoteBlock]) -> MockContext {
    let mut light_client = dummy_light_client();
    for block in blocks {
        light_client.trust_root(
            dummy_connection_id(),
            RemoteHeight::new(1, block.height),
            block.root(),
        );
    }
    MockContextConfig::builder()
        .host_height(100)
        .light_client(light_client)
        .build()
}

#[test_log::test]
fn test_tx_result_stores_matching_transactions() {
    let (early, late) = tx_blocks();
    let mut ctx = tx_context(&[&early, &late]);
    let query_id = register_query(&mut ctx, dummy_tx_query_msg(AMOUNT_FILTER, 10)).unwrap();

    let records = vec![
        early.record(0).unwrap(),
        late.record(1).unwrap(),
        late.record(2).unwrap(),
    ];
    submit_query_result(
        &mut ctx,
        tx_result_msg(query_id, RemoteHeight::new(1, 110), records),
    )
    .unwrap();

    let matched: Vec<_> = matched_transactions(&ctx, query_id, 100, 110)
        .unwrap()
        .map(|tx| (tx.height, tx.index, tx.tx))
        .collect();
    assert_eq!(
        matched,
        vec![
            (104, 0, b"tx-a".to_vec()),
            (108, 1, b"tx-c".to_vec()),
            (108, 2, b"tx-d".to_vec()),
        ]
    );

    assert_eq!(matched_transactions(&ctx, query_id, 105, 110).unwrap().count(), 2);
    assert_eq!(matched_transactions(&ctx, query_id, 110, 100).unwrap().count(), 0);
    assert_eq!(
        registered_query(&ctx, query_id)
            .unwrap()
            .last_submitted_result_remote_height,
        RemoteHeight::new(1, 110)
    );
}

#[test_log::test]
fn test_tx_result_with_unmatched_transaction_is_rejected() {
    let (early, late) = tx_blocks();
    let mut ctx = tx_context(&[&early, &late]);
    let query_id = register_query(&mut ctx, dummy_tx_query_msg(AMOUNT_FILTER, 10)).unwrap();

    let res = submit_query_result(
        &mut ctx,
        tx_result_msg(
            query_id,
            RemoteHeight::new(1, 110),
            vec![early.record(0).unwrap(), late.record(0).unwrap()],
        ),
    );
    assert!(matches!(
        res,
        Err(InterchainQueryError::InvalidSubmittedResult { .. })
    ));
    assert_eq!(ctx.stored_transaction_count(), 0);
}

#[test_log::test]
fn test_tx_result_outside_of_window_is_rejected() {
    let (early, late) = tx_blocks();
    let mut ctx = tx_context(&[&early, &late]);
    let query_id = register_query(&mut ctx, dummy_tx_query_msg(AMOUNT_FILTER, 10)).unwrap();

    // beyond the result height
    let res = submit_query_result(
        &mut ctx,
        tx_result_msg(query_id, RemoteHeight::new(1, 106), late.records()),
    );
    assert!(res.is_err());

    submit_query_result(
        &mut ctx,
        tx_result_msg(query_id, RemoteHeight::new(1, 106), vec![early.record(0).unwrap()]),
    )
    .unwrap();

    // below the last accepted height
    let res = submit_query_result(
        &mut ctx,
        tx_result_msg(query_id, RemoteHeight::new(1, 120), vec![early.record(0).unwrap()]),
    );
    assert!(matches!(
        res,
        Err(InterchainQueryError::InvalidSubmittedResult { .. })
    ));
}

#[test_log::test]
fn test_tx_result_with_tampered_events_is_rejected() {
    let (early, late) = tx_blocks();
    let mut ctx = tx_context(&[&early, &late]);
    let query_id = register_query(&mut ctx, dummy_tx_query_msg(AMOUNT_FILTER, 10)).unwrap();

    let mut record = late.record(1).unwrap();
    record.events = vec![TxEventAttribute::new("amount", "3000")];

    let res = submit_query_result(
        &mut ctx,
        tx_result_msg(query_id, RemoteHeight::new(1, 110), vec![record]),
    );
    assert!(matches!(res, Err(InterchainQueryError::InvalidProof { .. })));
}

#[test_log::test]
fn test_tx_result_cannot_store_a_transaction_under_another_index() {
    let (early, late) = tx_blocks();
    let mut ctx = tx_context(&[&early, &late]);
    let query_id = register_query(&mut ctx, dummy_tx_query_msg(AMOUNT_FILTER, 10)).unwrap();

    let mut moved = early.record(0).unwrap();
    moved.index = 7;

    let res = submit_query_result(
        &mut ctx,
        tx_result_msg(
            query_id,
            RemoteHeight::new(1, 110),
            vec![early.record(0).unwrap(), moved.clone()],
        ),
    );
    assert!(matches!(
        res,
        Err(InterchainQueryError::InvalidSubmittedResult { .. })
    ));

    let res = submit_query_result(
        &mut ctx,
        tx_result_msg(query_id, RemoteHeight::new(1, 110), vec![moved]),
    );
    assert!(matches!(res, Err(InterchainQueryError::InvalidProof { .. })));
    assert_eq!(ctx.stored_transaction_count(), 0);

    submit_query_result(
        &mut ctx,
        tx_result_msg(query_id, RemoteHeight::new(1, 110), vec![early.record(0).unwrap()]),
    )
    .unwrap();
    let matched: Vec<_> = matched_transactions(&ctx, query_id, 100, 110)
        .unwrap()
        .map(|tx| (tx.height, tx.index))
        .collect();
    assert_eq!(matched, vec![(104, 0)]);
}

#[test_log::test]
fn test_update_query() {
    let mut ctx = MockContext::default();
    let query_id = register_query(&mut ctx, dummy_kv_query_msg(vec![alice_balance()], 10)).unwrap();

    let msg = MsgUpdateInterchainQuery {
        sender: dummy_contract_address(),
        query_id,
        new_keys: Some(vec![validator()].into()),
        new_update_period: Some(20),
        new_transactions_filter: None,
    };

    let res = update_query(
        &mut ctx,
        MsgUpdateInterchainQuery {
            sender: dummy_account_id(),
            ..msg.clone()
        },
    );
    assert!(matches!(res, Err(InterchainQueryError::Unauthorized { .. })));

    let res = update_query(
        &mut ctx,
        MsgUpdateInterchainQuery {
            new_keys: None,
            new_transactions_filter: Some(AMOUNT_FILTER.to_string()),
            ..msg.clone()
        },
    );
    assert!(matches!(res, Err(InterchainQueryError::InvalidQueryType { .. })));

    update_query(&mut ctx, msg).unwrap();
    let query = registered_query(&ctx, query_id).unwrap();
    assert_eq!(query.update_period, 20);
    assert!(query.keys().unwrap().find("staking", b"validator/1").is_some());
}

#[test_log::test]
fn test_remove_query_by_owner_clears_results() {
    let state = remote_state();
    let mut ctx = trusting_context(&state);
    let keys = vec![alice_balance()];
    let query_id = register_query(&mut ctx, dummy_kv_query_msg(keys.clone(), 10)).unwrap();
    submit_query_result(
        &mut ctx,
        kv_result_msg(query_id, &state, &keys, RemoteHeight::new(1, 20)),
    )
    .unwrap();

    let res = remove_query(&mut ctx, dummy_remove_query_msg(dummy_account_id(), query_id));
    assert!(matches!(res, Err(InterchainQueryError::Unauthorized { .. })));

    remove_query(
        &mut ctx,
        dummy_remove_query_msg(dummy_contract_address(), query_id),
    )
    .unwrap();
    assert!(matches!(
        registered_query(&ctx, query_id),
        Err(InterchainQueryError::InvalidQueryId { .. })
    ));
    assert!(query_result(&ctx, query_id).is_err());
    assert_eq!(ctx.events().last().unwrap().kind, "query_removed");
}

#[test_log::test]
fn test_remove_query_by_maintainer() {
    let maintainer = Signer::from("neutron1maintainer".to_string());
    let mut ctx = MockContext::default().with_maintainer(maintainer.clone());
    let query_id = register_query(&mut ctx, dummy_kv_query_msg(vec![alice_balance()], 10)).unwrap();

    remove_query(&mut ctx, dummy_remove_query_msg(maintainer, query_id)).unwrap();
    assert!(registered_query(&ctx, query_id).is_err());
}

#[rstest]
#[test_log::test]
#[case::before_timeout(DEFAULT_HOST_HEIGHT + 10, false)]
#[case::after_timeout(DEFAULT_HOST_HEIGHT + 11, true)]
fn test_remove_query_after_submit_timeout(#[case] height: u64, #[case] removable: bool) {
    let mut params = tendermint_query_params();
    params.query_submit_timeout = 10;
    let mut ctx = MockContextConfig::builder().query_params(params).build();
    let query_id = register_query(&mut ctx, dummy_kv_query_msg(vec![alice_balance()], 10)).unwrap();

    ctx.advance_to_height(height);
    let res = remove_query(&mut ctx, dummy_remove_query_msg(dummy_account_id(), query_id));
    assert_eq!(res.is_ok(), removable, "{res:?}");
}

#[test_log::test]
fn test_registered_queries_filters_and_paginates() {
    let mut ctx = MockContext::default();
    for _ in 0..3 {
        register_query(&mut ctx, dummy_kv_query_msg(vec![alice_balance()], 10)).unwrap();
    }
    let mut other = dummy_tx_query_msg(AMOUNT_FILTER, 10);
    other.sender = dummy_account_id();
    register_query(&mut ctx, other).unwrap();

    let all = registered_queries(&ctx, &[], None, PageRequest::default()).unwrap();
    assert_eq!(all.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);

    let owned = registered_queries(
        &ctx,
        &[dummy_contract_address()],
        None,
        PageRequest::new(1, 1),
    )
    .unwrap();
    assert_eq!(owned.iter().map(|q| q.id).collect::<Vec<_>>(), vec![2]);

    let elsewhere = registered_queries(&ctx, &[], Some(&ConnectionId::new(3)), PageRequest::default())
        .unwrap();
    assert!(elsewhere.is_empty());
}
