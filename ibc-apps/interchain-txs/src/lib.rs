//! Implementation of the interchain transactions relay.
//!
//! Owners register interchain accounts on remote chains by opening ICS-27
//! controller channels, then submit transactions those accounts execute.
//! Submission returns the packet sequence and channel right away; the
//! host's acknowledgement or a timeout arrives in a later step and failures
//! are recorded against the submitting address.
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
pub mod handler;
pub mod query;

/// Re-exports the interchain transactions data structures from the
/// `ibc-app-interchain-txs-types` crate.
pub mod types {
    #[doc(inline)]
    pub use ibc_app_interchain_txs_types::*;
}
