//! Implementation of the Interchain Queries (ICQ) data structures: registered
//! queries over a remote chain's state, the results relayers submit for them
//! and the proof material those results are verified against.
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

mod filter;
mod kv;
mod params;
mod query;
mod result;

pub use filter::*;
pub use kv::*;
pub use params::*;
pub use query::*;
pub use result::*;
pub mod error;
pub mod events;
pub mod merkle;
pub mod msgs;

/// Re-exports the commitment proto types the submitted proofs are encoded with.
pub mod proto {
    pub use ibc_proto::ibc::core::commitment::v1::MerkleProof;
    pub use ics23::CommitmentProof;
}

/// Module identifier for the interchain queries application.
pub const MODULE_ID_STR: &str = "interchainqueries";

/// Kind of the event every solicitation is emitted under.
pub const SOLICITATION_EVENT_KIND: &str = "message";

/// Value of the `action` attribute on solicitation events.
pub const SOLICITATION_ACTION: &str = "query";
