use derive_more::{Display, From};
use ibc_app_interchain_queries::types::error::InterchainQueryError;
use ibc_app_interchain_txs::types::error::InterchainTxsError;
use ibc_core_host_types::error::IdentifierError;

#[derive(From, Display, Debug)]
pub enum BindingError {
    #[display(fmt = "failed to decode request: {_0}")]
    #[from(ignore)]
    Decode(String),
    #[display(fmt = "failed to encode response: {_0}")]
    #[from(ignore)]
    Encode(String),
    #[display(fmt = "interchain queries error: {_0}")]
    Query(InterchainQueryError),
    #[display(fmt = "interchain transactions error: {_0}")]
    Txs(InterchainTxsError),
    #[display(fmt = "IBC identifier error: {_0}")]
    Identifier(IdentifierError),
}

impl BindingError {
    /// Numeric code of an interchain queries error, if this is one.
    pub fn query_error_code(&self) -> Option<u32> {
        match self {
            Self::Query(e) => Some(e.code()),
            _ => None,
        }
    }
}

impl std::error::Error for BindingError {}
