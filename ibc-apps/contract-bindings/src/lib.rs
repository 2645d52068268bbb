//! JSON bindings through which sandboxed smart contracts drive the
//! interchain queries and interchain transactions applications.
//!
//! Requests ([`CustomMsg`]) and queries ([`CustomQuery`]) are closed,
//! externally tagged enums with `snake_case` tags. Unknown tags and
//! malformed payloads are rejected with [`BindingError::Decode`]. Byte
//! fields travel base64-encoded.
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::disallowed_methods, clippy::disallowed_types))]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]

mod binary;
mod error;
mod handlers;
mod msg;
mod query;

pub use binary::Binary;
pub use error::BindingError;
pub use handlers::*;
pub use msg::*;
pub use query::*;
