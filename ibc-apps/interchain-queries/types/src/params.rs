use ics23::ProofSpec;

use crate::merkle::ProofSpecs;

/// Default number of blocks after which a query that received no result
/// may be removed by anyone.
pub const DEFAULT_QUERY_SUBMIT_TIMEOUT: u64 = 1_036_800;

pub const DEFAULT_MAX_KV_QUERY_KEYS_COUNT: u64 = 32;

pub const DEFAULT_MAX_TRANSACTIONS_FILTERS: u64 = 32;

/// Parameters of the interchain queries module.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub query_submit_timeout: u64,
    pub max_kv_query_keys_count: u64,
    pub max_transactions_filters: u64,
    /// Specs of the layers of key-value proofs, store layer first.
    pub proof_specs: ProofSpecs,
    /// Spec of the proofs transaction records are committed with.
    pub tx_proof_spec: ProofSpec,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            query_submit_timeout: DEFAULT_QUERY_SUBMIT_TIMEOUT,
            max_kv_query_keys_count: DEFAULT_MAX_KV_QUERY_KEYS_COUNT,
            max_transactions_filters: DEFAULT_MAX_TRANSACTIONS_FILTERS,
            proof_specs: ProofSpecs::cosmos(),
            tx_proof_spec: ics23::tendermint_spec(),
        }
    }
}
