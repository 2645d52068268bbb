//! Testing kit for the interchain queries and interchain transactions
//! applications: a mock host implementing every context trait, a mock light
//! client, and builders for the ICS-23 proofs relayers submit.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod fixtures;
pub mod testapp;
