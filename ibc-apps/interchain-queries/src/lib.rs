//! Implementation of the Interchain Queries (ICQ) application logic.
//!
//! Owners register queries over the state of a remote chain reachable
//! through an IBC connection. At the end of every block the module emits a
//! solicitation event for each query whose update period elapsed; relayers
//! answer with results carrying Merkle proofs, which are verified against
//! the remote roots trusted by the host's light clients before being stored.
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

pub mod context;
pub mod end_block;
pub mod handler;
pub mod query;
pub mod verify;

/// Re-exports the interchain queries data structures from the
/// `ibc-app-interchain-queries-types` crate.
pub mod types {
    #[doc(inline)]
    pub use ibc_app_interchain_queries_types::*;
}
