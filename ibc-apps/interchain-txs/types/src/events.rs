//! Defines all interchain transactions event types
use ibc_core_host_types::identifiers::{ChannelId, ConnectionId, PortId, Sequence};
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use crate::{AckType, MODULE_ID_STR};

const EVENT_TYPE_ACCOUNT_REGISTERED: &str = "interchain_account_registered";
const EVENT_TYPE_CHANNEL_OPENED: &str = "interchain_account_opened";
const EVENT_TYPE_TX_SUBMITTED: &str = "interchain_tx_submitted";
const EVENT_TYPE_ACKNOWLEDGED: &str = "interchain_tx_acknowledged";
const EVENT_TYPE_FAILED: &str = "interchain_tx_failed";

/// Contains all events variants that can be emitted from the interchain
/// transactions application
pub enum Event {
    AccountRegistered(AccountRegisteredEvent),
    ChannelOpened(ChannelOpenedEvent),
    TxSubmitted(TxSubmittedEvent),
    Acknowledged(TxAcknowledgedEvent),
    Failed(TxFailedEvent),
}

pub struct AccountRegisteredEvent {
    pub owner: Signer,
    pub connection_id: ConnectionId,
    pub port_id: PortId,
    pub channel_id: ChannelId,
}

impl From<AccountRegisteredEvent> for ModuleEvent {
    fn from(ev: AccountRegisteredEvent) -> Self {
        let AccountRegisteredEvent {
            owner,
            connection_id,
            port_id,
            channel_id,
        } = ev;
        Self {
            kind: EVENT_TYPE_ACCOUNT_REGISTERED.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("owner", owner).into(),
                ("connection_id", connection_id).into(),
                ("port_id", port_id).into(),
                ("channel_id", channel_id).into(),
            ],
        }
    }
}

pub struct ChannelOpenedEvent {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub address: String,
}

impl From<ChannelOpenedEvent> for ModuleEvent {
    fn from(ev: ChannelOpenedEvent) -> Self {
        let ChannelOpenedEvent {
            port_id,
            channel_id,
            address,
        } = ev;
        Self {
            kind: EVENT_TYPE_CHANNEL_OPENED.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("port_id", port_id).into(),
                ("channel_id", channel_id).into(),
                ("address", address).into(),
            ],
        }
    }
}

pub struct TxSubmittedEvent {
    pub from_address: Signer,
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub sequence: Sequence,
    pub msgs_count: usize,
}

impl From<TxSubmittedEvent> for ModuleEvent {
    fn from(ev: TxSubmittedEvent) -> Self {
        let TxSubmittedEvent {
            from_address,
            port_id,
            channel_id,
            sequence,
            msgs_count,
        } = ev;
        Self {
            kind: EVENT_TYPE_TX_SUBMITTED.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("from_address", from_address).into(),
                ("port_id", port_id).into(),
                ("channel_id", channel_id).into(),
                ("sequence", sequence).into(),
                ("msgs_count", msgs_count.to_string()).into(),
            ],
        }
    }
}

/// Event emitted when the host executed a transaction successfully.
pub struct TxAcknowledgedEvent {
    pub from_address: Signer,
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub sequence: Sequence,
}

impl From<TxAcknowledgedEvent> for ModuleEvent {
    fn from(ev: TxAcknowledgedEvent) -> Self {
        let TxAcknowledgedEvent {
            from_address,
            port_id,
            channel_id,
            sequence,
        } = ev;
        Self {
            kind: EVENT_TYPE_ACKNOWLEDGED.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("from_address", from_address).into(),
                ("port_id", port_id).into(),
                ("channel_id", channel_id).into(),
                ("sequence", sequence).into(),
            ],
        }
    }
}

/// Event emitted when a failure was recorded, for an error acknowledgement
/// or a timeout.
pub struct TxFailedEvent {
    pub failure_id: u64,
    pub from_address: Signer,
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub sequence: Sequence,
    pub ack_type: AckType,
    pub error: String,
}

impl From<TxFailedEvent> for ModuleEvent {
    fn from(ev: TxFailedEvent) -> Self {
        let TxFailedEvent {
            failure_id,
            from_address,
            port_id,
            channel_id,
            sequence,
            ack_type,
            error,
        } = ev;
        Self {
            kind: EVENT_TYPE_FAILED.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("failure_id", failure_id).into(),
                ("from_address", from_address).into(),
                ("port_id", port_id).into(),
                ("channel_id", channel_id).into(),
                ("sequence", sequence).into(),
                ("ack_type", ack_type.as_str()).into(),
                ("error", error).into(),
            ],
        }
    }
}

impl From<Event> for ModuleEvent {
    fn from(ev: Event) -> Self {
        match ev {
            Event::AccountRegistered(ev) => ev.into(),
            Event::ChannelOpened(ev) => ev.into(),
            Event::TxSubmitted(ev) => ev.into(),
            Event::Acknowledged(ev) => ev.into(),
            Event::Failed(ev) => ev.into(),
        }
    }
}
