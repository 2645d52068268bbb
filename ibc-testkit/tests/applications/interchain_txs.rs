use ibc_app_interchain_txs::handler::{
    on_acknowledgement, on_chan_open_ack, on_timeout, register_interchain_account,
    register_interchain_account_validate, submit_tx, submit_tx_validate,
};
use ibc_app_interchain_txs::query::{all_failures, failures, interchain_account_address};
use ibc_app_interchain_txs::types::error::InterchainTxsError;
use ibc_app_interchain_txs::types::msgs::{MsgRegisterInterchainAccount, MsgSubmitTx};
use ibc_app_interchain_txs::types::{
    controller_port_id, AccountState, AckType, InterchainAccountPacketData, Metadata, PacketType,
};
use ibc_core_host_types::identifiers::{ChannelId, PortId, Sequence};
use ibc_testkit::fixtures::applications::interchain_txs::{
    counterparty_version, dummy_any_msg, dummy_register_account_msg, dummy_submit_tx_msg,
    error_ack, success_ack, DUMMY_INTERCHAIN_ACCOUNT_ID, DUMMY_REMOTE_ADDRESS,
};
use ibc_testkit::fixtures::core::context::dummy_connection_id;
use ibc_testkit::fixtures::core::signer::{dummy_account_id, dummy_contract_address};
use ibc_testkit::fixtures::{Expect, Fixture};
use ibc_testkit::testapp::ibc::core::types::{MockContext, DEFAULT_HOST_TIMESTAMP};
use rstest::rstest;

fn port_id() -> PortId {
    controller_port_id(&dummy_contract_address(), DUMMY_INTERCHAIN_ACCOUNT_ID).unwrap()
}

/// Registers the dummy account and completes its handshake.
fn open_account(ctx: &mut MockContext) -> ChannelId {
    let channel_id = register_interchain_account(
        ctx,
        dummy_register_account_msg(DUMMY_INTERCHAIN_ACCOUNT_ID),
    )
    .unwrap();
    let version = counterparty_version(&dummy_connection_id(), DUMMY_REMOTE_ADDRESS).unwrap();
    on_chan_open_ack(ctx, &dummy_connection_id(), &port_id(), &channel_id, &version).unwrap();
    channel_id
}

fn submit_dummy_tx(ctx: &mut MockContext) -> Sequence {
    submit_tx(
        ctx,
        dummy_submit_tx_msg(DUMMY_INTERCHAIN_ACCOUNT_ID, vec![dummy_any_msg()]),
    )
    .unwrap()
    .sequence
}

enum RegisterMsg {
    Default,
    EmptyConnection,
    EmptyAccountId,
    LongAccountId,
}

#[rstest]
#[test_log::test]
#[case::default(RegisterMsg::Default, Expect::Success)]
#[case::empty_connection(RegisterMsg::EmptyConnection, Expect::Failure)]
#[case::empty_account_id(RegisterMsg::EmptyAccountId, Expect::Failure)]
#[case::long_account_id(RegisterMsg::LongAccountId, Expect::Failure)]
fn test_register_interchain_account_validate(
    #[case] msg_variant: RegisterMsg,
    #[case] expect: Expect,
) {
    let msg = dummy_register_account_msg(DUMMY_INTERCHAIN_ACCOUNT_ID);
    let msg = match msg_variant {
        RegisterMsg::Default => msg,
        RegisterMsg::EmptyConnection => MsgRegisterInterchainAccount {
            connection_id: String::new(),
            ..msg
        },
        RegisterMsg::EmptyAccountId => dummy_register_account_msg(""),
        RegisterMsg::LongAccountId => dummy_register_account_msg(&"a".repeat(48)),
    };
    let fxt = Fixture {
        ctx: MockContext::default(),
        msg,
    };

    let res = register_interchain_account_validate(&fxt.ctx, &fxt.msg);
    let err_msg = fxt.generate_error_msg(&expect, "validation", &res);
    match expect {
        Expect::Failure => assert!(res.is_err(), "{err_msg}"),
        Expect::Success => assert!(res.is_ok(), "{err_msg}"),
    }
}

#[test_log::test]
fn test_register_interchain_account() {
    let mut ctx = MockContext::default();
    let channel_id = register_interchain_account(
        &mut ctx,
        dummy_register_account_msg(DUMMY_INTERCHAIN_ACCOUNT_ID),
    )
    .unwrap();
    assert_eq!(channel_id, ChannelId::new(0));

    let account = ctx.account(&dummy_connection_id(), &port_id()).unwrap();
    assert_eq!(account.state, AccountState::Init);
    assert_eq!(account.owner, dummy_contract_address());
    assert_eq!(account.address, None);
    assert_eq!(
        port_id().as_str(),
        format!("icacontroller-{}.{DUMMY_INTERCHAIN_ACCOUNT_ID}", dummy_contract_address())
    );

    let opened = ctx.store.lock().transport.channels.get(&channel_id).cloned().unwrap();
    let metadata = Metadata::from_json(&opened.version).unwrap();
    assert_eq!(metadata, Metadata::new_default(&dummy_connection_id()));

    assert_eq!(ctx.events()[0].kind, "interchain_account_registered");
}

#[test_log::test]
fn test_register_interchain_account_twice() {
    let mut ctx = MockContext::default();
    let msg = dummy_register_account_msg(DUMMY_INTERCHAIN_ACCOUNT_ID);
    register_interchain_account(&mut ctx, msg.clone()).unwrap();

    let res = register_interchain_account(&mut ctx, msg.clone());
    assert!(matches!(res, Err(InterchainTxsError::AlreadyRegistered { .. })));

    let mut ctx = MockContext::default();
    open_account(&mut ctx);
    let res = register_interchain_account(&mut ctx, msg);
    assert!(matches!(res, Err(InterchainTxsError::AlreadyRegistered { .. })));
}

#[test_log::test]
fn test_account_address_is_bound_by_handshake() {
    let mut ctx = MockContext::default();
    let owner = dummy_contract_address();

    let res = interchain_account_address(&ctx, &owner, "connection-0", DUMMY_INTERCHAIN_ACCOUNT_ID);
    assert!(matches!(res, Err(InterchainTxsError::AccountNotFound { .. })));

    let channel_id = register_interchain_account(
        &mut ctx,
        dummy_register_account_msg(DUMMY_INTERCHAIN_ACCOUNT_ID),
    )
    .unwrap();
    let res = interchain_account_address(&ctx, &owner, "connection-0", DUMMY_INTERCHAIN_ACCOUNT_ID);
    assert!(matches!(res, Err(InterchainTxsError::AccountNotFound { .. })));

    let version = counterparty_version(&dummy_connection_id(), DUMMY_REMOTE_ADDRESS).unwrap();
    on_chan_open_ack(&mut ctx, &dummy_connection_id(), &port_id(), &channel_id, &version).unwrap();

    let address =
        interchain_account_address(&ctx, &owner, "connection-0", DUMMY_INTERCHAIN_ACCOUNT_ID)
            .unwrap();
    assert_eq!(address, DUMMY_REMOTE_ADDRESS);
    assert_eq!(
        ctx.account(&dummy_connection_id(), &port_id()).unwrap().state,
        AccountState::Open
    );

    // a repeated acknowledgement changes nothing
    let events = ctx.events().len();
    on_chan_open_ack(&mut ctx, &dummy_connection_id(), &port_id(), &channel_id, &version).unwrap();
    assert_eq!(ctx.events().len(), events);

    let res = interchain_account_address(&ctx, &owner, "", DUMMY_INTERCHAIN_ACCOUNT_ID);
    assert!(matches!(res, Err(InterchainTxsError::EmptyConnectionId)));
}

#[test_log::test]
fn test_handshake_with_bad_metadata_is_rejected() {
    let mut ctx = MockContext::default();
    let channel_id = register_interchain_account(
        &mut ctx,
        dummy_register_account_msg(DUMMY_INTERCHAIN_ACCOUNT_ID),
    )
    .unwrap();

    let res = on_chan_open_ack(
        &mut ctx,
        &dummy_connection_id(),
        &port_id(),
        &channel_id,
        "not a version",
    );
    assert!(res.is_err());

    let mut metadata = Metadata::new_default(&dummy_connection_id());
    metadata.host_connection_id = "connection-0".to_string();
    let res = on_chan_open_ack(
        &mut ctx,
        &dummy_connection_id(),
        &port_id(),
        &channel_id,
        &metadata.to_json().unwrap(),
    );
    assert!(res.is_err(), "an empty address must not be bound");

    let version = counterparty_version(&dummy_connection_id(), DUMMY_REMOTE_ADDRESS).unwrap();
    let res = on_chan_open_ack(
        &mut ctx,
        &dummy_connection_id(),
        &port_id(),
        &ChannelId::new(9),
        &version,
    );
    assert!(matches!(
        res,
        Err(InterchainTxsError::ActiveChannelNotFound { .. })
    ));
    assert_eq!(
        ctx.account(&dummy_connection_id(), &port_id()).unwrap().state,
        AccountState::Init
    );
}

enum SubmitMsg {
    Default,
    NoMessages,
    EmptyConnection,
    UnknownAccount,
    TooManyMessages,
    BadTypeUrl,
    EmptyBody,
}

#[rstest]
#[test_log::test]
#[case::default(SubmitMsg::Default, Expect::Success)]
#[case::no_messages(SubmitMsg::NoMessages, Expect::Failure)]
#[case::empty_connection(SubmitMsg::EmptyConnection, Expect::Failure)]
#[case::unknown_account(SubmitMsg::UnknownAccount, Expect::Failure)]
#[case::too_many_messages(SubmitMsg::TooManyMessages, Expect::Failure)]
#[case::bad_type_url(SubmitMsg::BadTypeUrl, Expect::Failure)]
#[case::empty_body(SubmitMsg::EmptyBody, Expect::Failure)]
fn test_submit_tx_validate(#[case] msg_variant: SubmitMsg, #[case] expect: Expect) {
    let mut ctx = MockContext::default();
    open_account(&mut ctx);

    let msg = dummy_submit_tx_msg(DUMMY_INTERCHAIN_ACCOUNT_ID, vec![dummy_any_msg()]);
    let msg = match msg_variant {
        SubmitMsg::Default => msg,
        SubmitMsg::NoMessages => MsgSubmitTx {
            msgs: vec![],
            ..msg
        },
        SubmitMsg::EmptyConnection => MsgSubmitTx {
            connection_id: String::new(),
            ..msg
        },
        SubmitMsg::UnknownAccount => dummy_submit_tx_msg("test-2", vec![dummy_any_msg()]),
        SubmitMsg::TooManyMessages => MsgSubmitTx {
            msgs: vec![dummy_any_msg(); 17],
            ..msg
        },
        SubmitMsg::BadTypeUrl => {
            let mut any = dummy_any_msg();
            any.type_url = "cosmos.bank.v1beta1.MsgSend".to_string();
            MsgSubmitTx {
                msgs: vec![dummy_any_msg(), any],
                ..msg
            }
        }
        SubmitMsg::EmptyBody => {
            let mut any = dummy_any_msg();
            any.value.clear();
            MsgSubmitTx {
                msgs: vec![dummy_any_msg(), any],
                ..msg
            }
        }
    };
    let fxt = Fixture { ctx, msg };

    let res = submit_tx_validate(&fxt.ctx, &fxt.msg);
    let err_msg = fxt.generate_error_msg(&expect, "validation", &res);
    match expect {
        Expect::Failure => assert!(res.is_err(), "{err_msg}"),
        Expect::Success => assert!(res.is_ok(), "{err_msg}"),
    }
}

#[test_log::test]
fn test_submit_tx_reports_first_error() {
    let mut ctx = MockContext::default();
    open_account(&mut ctx);

    let msg = dummy_submit_tx_msg(DUMMY_INTERCHAIN_ACCOUNT_ID, vec![]);
    let res = submit_tx(&mut ctx, msg.clone());
    assert!(matches!(res, Err(InterchainTxsError::NoMessages)));

    let res = submit_tx(
        &mut ctx,
        MsgSubmitTx {
            connection_id: String::new(),
            ..msg
        },
    );
    assert!(matches!(res, Err(InterchainTxsError::EmptyConnectionId)));
    assert!(ctx.sent_packets().is_empty());
}

#[test_log::test]
fn test_submit_tx_rejects_message_failing_host_checks() {
    let mut ctx = MockContext::default();
    open_account(&mut ctx);

    let mut empty = dummy_any_msg();
    empty.value.clear();
    let res = submit_tx(
        &mut ctx,
        dummy_submit_tx_msg(DUMMY_INTERCHAIN_ACCOUNT_ID, vec![dummy_any_msg(), empty]),
    );
    match res {
        Err(InterchainTxsError::InvalidMessage { index, reason }) => {
            assert_eq!(index, 1);
            assert!(reason.contains("empty body"), "{reason}");
        }
        other => panic!("expected an invalid message, got {other:?}"),
    }
    assert!(ctx.sent_packets().is_empty());
    assert_eq!(submit_dummy_tx(&mut ctx), Sequence::from(1));
}

#[test_log::test]
fn test_submit_tx_before_handshake() {
    let mut ctx = MockContext::default();
    register_interchain_account(
        &mut ctx,
        dummy_register_account_msg(DUMMY_INTERCHAIN_ACCOUNT_ID),
    )
    .unwrap();

    let res = submit_tx(
        &mut ctx,
        dummy_submit_tx_msg(DUMMY_INTERCHAIN_ACCOUNT_ID, vec![dummy_any_msg()]),
    );
    assert!(matches!(
        res,
        Err(InterchainTxsError::ActiveChannelNotFound { .. })
    ));
}

#[test_log::test]
fn test_submit_tx() {
    let mut ctx = MockContext::default();
    let channel_id = open_account(&mut ctx);

    let mut msg = dummy_submit_tx_msg(DUMMY_INTERCHAIN_ACCOUNT_ID, vec![dummy_any_msg()]);
    msg.memo = "swap".to_string();
    let response = submit_tx(&mut ctx, msg).unwrap();
    assert_eq!(response.channel_id, channel_id);
    assert_eq!(response.sequence, Sequence::from(1));

    let packets = ctx.sent_packets();
    assert_eq!(packets.len(), 1);
    assert_eq!(packets[0].port_id, port_id());
    assert_eq!(
        packets[0].timeout_timestamp,
        DEFAULT_HOST_TIMESTAMP + 600 * 1_000_000_000
    );
    let data = InterchainAccountPacketData::decode_vec(&packets[0].data).unwrap();
    assert_eq!(data.packet_type, PacketType::ExecuteTx);
    assert_eq!(data.messages, vec![dummy_any_msg()]);
    assert_eq!(data.memo, "swap");

    let mut msg = dummy_submit_tx_msg(DUMMY_INTERCHAIN_ACCOUNT_ID, vec![dummy_any_msg()]);
    msg.timeout = 30;
    let response = submit_tx(&mut ctx, msg).unwrap();
    assert_eq!(response.sequence, Sequence::from(2));
    assert_eq!(
        ctx.sent_packets()[1].timeout_timestamp,
        DEFAULT_HOST_TIMESTAMP + 30 * 1_000_000_000
    );

    assert!(ctx
        .store
        .lock()
        .pending_txs
        .contains_key(&(port_id(), channel_id, Sequence::from(2))));
    assert_eq!(ctx.events().last().unwrap().kind, "interchain_tx_submitted");
}

#[test_log::test]
fn test_successful_acknowledgement() {
    let mut ctx = MockContext::default();
    let channel_id = open_account(&mut ctx);
    let sequence = submit_dummy_tx(&mut ctx);

    on_acknowledgement(&mut ctx, &port_id(), &channel_id, sequence, &success_ack().unwrap())
        .unwrap();

    assert!(ctx.store.lock().pending_txs.is_empty());
    assert!(all_failures(&ctx).unwrap().is_empty());
    assert_eq!(ctx.events().last().unwrap().kind, "interchain_tx_acknowledged");

    let res = on_acknowledgement(&mut ctx, &port_id(), &channel_id, sequence, &success_ack().unwrap());
    assert!(matches!(
        res,
        Err(InterchainTxsError::PendingTxNotFound { .. })
    ));
}

#[test_log::test]
fn test_error_acknowledgement_records_failure() {
    let mut ctx = MockContext::default();
    let channel_id = open_account(&mut ctx);
    let sequence = submit_dummy_tx(&mut ctx);

    on_acknowledgement(
        &mut ctx,
        &port_id(),
        &channel_id,
        sequence,
        &error_ack("insufficient funds").unwrap(),
    )
    .unwrap();

    let recorded = failures(&ctx, &dummy_contract_address()).unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].id, 0);
    assert_eq!(recorded[0].ack_type, AckType::Error);
    assert_eq!(recorded[0].error, "insufficient funds");
    assert_eq!(recorded[0].sequence, sequence);
    assert_eq!(recorded[0].channel_id, channel_id);
    assert!(failures(&ctx, &dummy_account_id()).unwrap().is_empty());

    assert_eq!(
        ctx.account(&dummy_connection_id(), &port_id()).unwrap().state,
        AccountState::Open
    );
    assert_eq!(ctx.events().last().unwrap().kind, "interchain_tx_failed");
}

#[test_log::test]
fn test_malformed_acknowledgement_is_rejected() {
    let mut ctx = MockContext::default();
    let channel_id = open_account(&mut ctx);
    let sequence = submit_dummy_tx(&mut ctx);

    let res = on_acknowledgement(&mut ctx, &port_id(), &channel_id, sequence, b"garbage");
    assert!(matches!(
        res,
        Err(InterchainTxsError::InvalidAcknowledgement { .. })
    ));
    assert_eq!(ctx.store.lock().pending_txs.len(), 1);
}

#[test_log::test]
fn test_timeout_closes_channel_and_allows_reregistration() {
    let mut ctx = MockContext::default();
    let channel_id = open_account(&mut ctx);
    let first = submit_dummy_tx(&mut ctx);
    let second = submit_dummy_tx(&mut ctx);

    on_timeout(&mut ctx, &port_id(), &channel_id, first).unwrap();
    on_acknowledgement(&mut ctx, &port_id(), &channel_id, second, &error_ack("out of gas").unwrap())
        .unwrap();

    let recorded = all_failures(&ctx).unwrap();
    assert_eq!(recorded.len(), 2);
    assert_eq!((recorded[0].id, recorded[0].ack_type), (0, AckType::Timeout));
    assert!(recorded[0].error.is_empty());
    assert_eq!((recorded[1].id, recorded[1].ack_type), (1, AckType::Error));

    let account = ctx.account(&dummy_connection_id(), &port_id()).unwrap();
    assert_eq!(account.state, AccountState::Closed);

    let res = submit_tx(
        &mut ctx,
        dummy_submit_tx_msg(DUMMY_INTERCHAIN_ACCOUNT_ID, vec![dummy_any_msg()]),
    );
    assert!(matches!(
        res,
        Err(InterchainTxsError::ActiveChannelNotFound { .. })
    ));

    let reopened = register_interchain_account(
        &mut ctx,
        dummy_register_account_msg(DUMMY_INTERCHAIN_ACCOUNT_ID),
    )
    .unwrap();
    assert_eq!(reopened, ChannelId::new(1));
    let account = ctx.account(&dummy_connection_id(), &port_id()).unwrap();
    assert_eq!(account.state, AccountState::Init);
    assert_eq!(account.address.as_deref(), Some(DUMMY_REMOTE_ADDRESS));

    // the host must keep binding the same address
    let other = counterparty_version(&dummy_connection_id(), "cosmos1other").unwrap();
    let res = on_chan_open_ack(&mut ctx, &dummy_connection_id(), &port_id(), &reopened, &other);
    assert!(matches!(res, Err(InterchainTxsError::AddressMismatch { .. })));

    let version = counterparty_version(&dummy_connection_id(), DUMMY_REMOTE_ADDRESS).unwrap();
    on_chan_open_ack(&mut ctx, &dummy_connection_id(), &port_id(), &reopened, &version).unwrap();
    let response = submit_tx(
        &mut ctx,
        dummy_submit_tx_msg(DUMMY_INTERCHAIN_ACCOUNT_ID, vec![dummy_any_msg()]),
    )
    .unwrap();
    assert_eq!(response.channel_id, reopened);
    assert_eq!(response.sequence, Sequence::from(1));
}
