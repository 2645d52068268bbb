use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

/// Returns a dummy bech32 account address, for testing purposes only!
pub fn dummy_account_id() -> Signer {
    "cosmos1wxeyh7zgn4tctjzs0vtqpc6p5cxq5t2muzl7ng".to_string().into()
}

/// Returns a dummy contract address, for testing purposes only!
pub fn dummy_contract_address() -> Signer {
    "neutron14hj2tavq8fpesdwxxcu44rty3hh90vhujrvcmstl4zr3txmfvw9s5c2epq"
        .to_string()
        .into()
}

/// Returns a dummy relayer address, for testing purposes only!
pub fn dummy_relayer_address() -> Signer {
    "neutron1m9l358xunhhwds0568za49mzhvuxx9uxre5tud"
        .to_string()
        .into()
}
