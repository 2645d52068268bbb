//! Data structures of the interchain transactions relay: on-chain owners
//! register accounts on remote chains over ICS-27 controller channels and
//! submit transactions for those accounts to execute.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::disallowed_methods, clippy::disallowed_types))]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod account;
mod acknowledgement;
mod failure;
mod metadata;
mod packet;
mod params;
mod port;

pub use account::*;
pub use acknowledgement::*;
pub use failure::*;
pub use metadata::*;
pub use packet::*;
pub use params::*;
pub use port::*;
pub mod error;
pub mod events;
pub mod msgs;

/// Re-exports ICS-27 proto types from the `ibc-proto` crate.
pub mod proto {
    pub use ibc_proto::google::protobuf::Any;
    pub use ibc_proto::ibc::applications::interchain_accounts::v1::{
        CosmosTx, InterchainAccountPacketData as RawInterchainAccountPacketData,
    };
}

/// Module identifier for the interchain transactions application.
pub const MODULE_ID_STR: &str = "interchaintxs";

/// ICS-27 application version.
pub const VERSION: &str = "ics27-1";

/// Prefix of every controller port.
pub const CONTROLLER_PORT_PREFIX: &str = "icacontroller-";

/// Port the counterparty host module binds to.
pub const HOST_PORT_ID_STR: &str = "icahost";
