//! Defines all interchain queries event types
use ibc_core_host_types::identifiers::ConnectionId;
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use crate::{QueryType, RemoteHeight, MODULE_ID_STR, SOLICITATION_ACTION, SOLICITATION_EVENT_KIND};

const EVENT_TYPE_QUERY_REGISTERED: &str = "query_registered";
const EVENT_TYPE_QUERY_UPDATED: &str = "query_updated";
const EVENT_TYPE_QUERY_REMOVED: &str = "query_removed";
const EVENT_TYPE_QUERY_RESULT: &str = "query_result_submitted";

/// Contains all events variants that can be emitted from the interchain
/// queries application
pub enum Event {
    Solicitation(SolicitationEvent),
    Registered(QueryRegisteredEvent),
    Updated(QueryUpdatedEvent),
    Removed(QueryRemovedEvent),
    ResultSubmitted(QueryResultSubmittedEvent),
}

/// Event emitted at the end of a block for every query a new result is
/// expected for. Relayers listen for it.
///
/// `kv_key` holds the keys as `<path>/<hex key>` joined by `,` and is empty
/// for transaction-search queries; `tx_filter` holds the JSON filter and is
/// empty for key-value queries.
pub struct SolicitationEvent {
    pub query_id: u64,
    pub owner: Signer,
    pub connection_id: ConnectionId,
    pub zone_id: String,
    pub query_type: QueryType,
    pub kv_key: String,
    pub tx_filter: String,
}

impl From<SolicitationEvent> for ModuleEvent {
    fn from(ev: SolicitationEvent) -> Self {
        let SolicitationEvent {
            query_id,
            owner,
            connection_id,
            zone_id,
            query_type,
            kv_key,
            tx_filter,
        } = ev;
        Self {
            kind: SOLICITATION_EVENT_KIND.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("action", SOLICITATION_ACTION).into(),
                ("query_id", query_id).into(),
                ("owner", owner).into(),
                ("connection_id", connection_id).into(),
                ("zone_id", zone_id).into(),
                ("type", query_type).into(),
                ("kv_key", kv_key).into(),
                ("tx_filter", tx_filter).into(),
            ],
        }
    }
}

pub struct QueryRegisteredEvent {
    pub query_id: u64,
    pub owner: Signer,
    pub connection_id: ConnectionId,
    pub query_type: QueryType,
}

impl From<QueryRegisteredEvent> for ModuleEvent {
    fn from(ev: QueryRegisteredEvent) -> Self {
        let QueryRegisteredEvent {
            query_id,
            owner,
            connection_id,
            query_type,
        } = ev;
        Self {
            kind: EVENT_TYPE_QUERY_REGISTERED.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("query_id", query_id).into(),
                ("owner", owner).into(),
                ("connection_id", connection_id).into(),
                ("type", query_type).into(),
            ],
        }
    }
}

pub struct QueryUpdatedEvent {
    pub query_id: u64,
    pub owner: Signer,
    pub update_period: u64,
}

impl From<QueryUpdatedEvent> for ModuleEvent {
    fn from(ev: QueryUpdatedEvent) -> Self {
        let QueryUpdatedEvent {
            query_id,
            owner,
            update_period,
        } = ev;
        Self {
            kind: EVENT_TYPE_QUERY_UPDATED.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("query_id", query_id).into(),
                ("owner", owner).into(),
                ("update_period", update_period).into(),
            ],
        }
    }
}

/// Event emitted when a query is removed, by its owner or by someone else
/// once it timed out.
pub struct QueryRemovedEvent {
    pub query_id: u64,
    pub owner: Signer,
    pub removed_by: Signer,
}

impl From<QueryRemovedEvent> for ModuleEvent {
    fn from(ev: QueryRemovedEvent) -> Self {
        let QueryRemovedEvent {
            query_id,
            owner,
            removed_by,
        } = ev;
        Self {
            kind: EVENT_TYPE_QUERY_REMOVED.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("query_id", query_id).into(),
                ("owner", owner).into(),
                ("removed_by", removed_by).into(),
            ],
        }
    }
}

pub struct QueryResultSubmittedEvent {
    pub query_id: u64,
    pub sender: Signer,
    pub remote_height: RemoteHeight,
    pub query_type: QueryType,
}

impl From<QueryResultSubmittedEvent> for ModuleEvent {
    fn from(ev: QueryResultSubmittedEvent) -> Self {
        let QueryResultSubmittedEvent {
            query_id,
            sender,
            remote_height,
            query_type,
        } = ev;
        Self {
            kind: EVENT_TYPE_QUERY_RESULT.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("query_id", query_id).into(),
                ("sender", sender).into(),
                ("remote_height", remote_height).into(),
                ("type", query_type).into(),
            ],
        }
    }
}

impl From<Event> for ModuleEvent {
    fn from(ev: Event) -> Self {
        match ev {
            Event::Solicitation(ev) => ev.into(),
            Event::Registered(ev) => ev.into(),
            Event::Updated(ev) => ev.into(),
            Event::Removed(ev) => ev.into(),
            Event::ResultSubmitted(ev) => ev.into(),
        }
    }
}
