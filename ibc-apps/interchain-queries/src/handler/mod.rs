//! Implements the processing logic for the interchain queries messages.
mod register_query;
mod remove_query;
mod submit_query_result;
mod update_query;

pub use register_query::*;
pub use remove_query::*;
pub use submit_query_result::*;
pub use update_query::*;
