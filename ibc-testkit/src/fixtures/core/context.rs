use alloc::sync::Arc;

use ibc_app_interchain_queries::types::merkle::ProofSpecs;
use ibc_app_interchain_queries::types::Params as QueryParams;
use ibc_app_interchain_txs::types::Params as TxsParams;
use ibc_core_host_types::identifiers::ConnectionId;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;
use parking_lot::Mutex;
use typed_builder::TypedBuilder;

use crate::testapp::ibc::core::light_client::{MockLightClient, DEFAULT_CLIENT_ID};
use crate::testapp::ibc::core::types::{
    MockContext, MockStore, DEFAULT_HOST_HEIGHT, DEFAULT_HOST_TIMESTAMP,
};

/// Configuration of the `MockContext` type for generating dummy contexts.
#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = MockContext))]
pub struct MockContextConfig {
    #[builder(default = DEFAULT_HOST_HEIGHT)]
    host_height: u64,

    #[builder(default = DEFAULT_HOST_TIMESTAMP)]
    host_timestamp: u64,

    #[builder(default = tendermint_query_params())]
    query_params: QueryParams,

    #[builder(default)]
    txs_params: TxsParams,

    #[builder(default)]
    maintainers: Vec<Signer>,

    #[builder(default = dummy_light_client())]
    light_client: MockLightClient,
}

impl From<MockContextConfig> for MockContext {
    fn from(params: MockContextConfig) -> Self {
        assert_ne!(
            params.host_height, 0,
            "The chain must have a non-zero height"
        );

        Self {
            host_height: params.host_height,
            host_timestamp: params.host_timestamp,
            query_params: params.query_params,
            txs_params: params.txs_params,
            maintainers: params.maintainers,
            light_client: params.light_client,
            store: Arc::new(Mutex::new(MockStore::default())),
        }
    }
}

/// Query parameters under which the proofs built by
/// [`RemoteState`](crate::fixtures::core::commitment::RemoteState) verify:
/// both layers are tendermint simple Merkle trees.
pub fn tendermint_query_params() -> QueryParams {
    QueryParams {
        proof_specs: ProofSpecs::new(vec![ics23::tendermint_spec(), ics23::tendermint_spec()])
            .expect("two tendermint layers are valid specs"),
        ..QueryParams::default()
    }
}

pub fn dummy_connection_id() -> ConnectionId {
    ConnectionId::new(0)
}

/// A light client knowing `connection-0` only, with no trusted roots.
pub fn dummy_light_client() -> MockLightClient {
    MockLightClient::default().with_connection(dummy_connection_id(), DEFAULT_CLIENT_ID)
}
