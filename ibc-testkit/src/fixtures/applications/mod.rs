pub mod interchain_queries;
pub mod interchain_txs;
