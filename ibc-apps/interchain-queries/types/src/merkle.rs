//! Merkle proof utilities

use ibc_primitives::prelude::*;
use ibc_proto::ibc::core::commitment::v1::MerkleProof as RawMerkleProof;
use ics23::commitment_proof::Proof;
use ics23::{
    calculate_existence_root, verify_membership, verify_non_membership, CommitmentProof,
    HostFunctionsProvider, NonExistenceProof, ProofSpec,
};
use prost::Message;

use crate::error::InterchainQueryError;

/// An array of proof specifications, one per layer of a multi-layer proof,
/// leaf layer first.
#[derive(Clone, Debug, PartialEq)]
pub struct ProofSpecs(Vec<ProofSpec>);

impl ProofSpecs {
    /// Returns the specification for Cosmos-SDK proofs: an IAVL store proof
    /// followed by the multistore proof.
    pub fn cosmos() -> Self {
        Self(vec![ics23::iavl_spec(), ics23::tendermint_spec()])
    }

    pub fn new(specs: Vec<ProofSpec>) -> Result<Self, InterchainQueryError> {
        let specs = Self(specs);
        specs.validate()?;
        Ok(specs)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn validate(&self) -> Result<(), InterchainQueryError> {
        if self.is_empty() {
            return Err(InterchainQueryError::InvalidProof {
                reason: "empty proof specs".to_string(),
            });
        }
        for spec in &self.0 {
            // A non-positive depth bound means no limit.
            if 0 < spec.min_depth && 0 < spec.max_depth && spec.max_depth < spec.min_depth {
                return Err(InterchainQueryError::InvalidProof {
                    reason: format!(
                        "invalid depth range: min `{}`, max `{}`",
                        spec.min_depth, spec.max_depth
                    ),
                });
            }
        }
        Ok(())
    }

    pub fn as_slice(&self) -> &[ProofSpec] {
        &self.0
    }
}

impl Default for ProofSpecs {
    fn default() -> Self {
        Self::cosmos()
    }
}

impl From<ProofSpecs> for Vec<ProofSpec> {
    fn from(specs: ProofSpecs) -> Self {
        specs.0
    }
}

/// A chain of ICS-23 proofs, leaf layer first.
#[derive(Clone, Debug, PartialEq)]
pub struct MerkleProof {
    pub proofs: Vec<CommitmentProof>,
}

impl From<RawMerkleProof> for MerkleProof {
    fn from(proof: RawMerkleProof) -> Self {
        Self {
            proofs: proof.proofs,
        }
    }
}

impl From<MerkleProof> for RawMerkleProof {
    fn from(proof: MerkleProof) -> Self {
        Self {
            proofs: proof.proofs,
        }
    }
}

fn invalid_proof(reason: impl Into<String>) -> InterchainQueryError {
    InterchainQueryError::InvalidProof {
        reason: reason.into(),
    }
}

impl MerkleProof {
    pub fn decode(bytes: &[u8]) -> Result<Self, InterchainQueryError> {
        Ok(RawMerkleProof::decode(bytes)?.into())
    }

    pub fn encode_vec(self) -> Vec<u8> {
        RawMerkleProof::from(self).encode_to_vec()
    }

    /// Verifies that `value` is stored under `keys` (root-to-leaf) in the
    /// tree committed to by `root`, skipping the first `start_index` layers.
    pub fn verify_membership<H: HostFunctionsProvider>(
        &self,
        specs: &ProofSpecs,
        root: &[u8],
        keys: &[&[u8]],
        value: Vec<u8>,
        start_index: usize,
    ) -> Result<(), InterchainQueryError> {
        self.validate_layout(specs, root, keys)?;
        if value.is_empty() {
            return Err(invalid_proof("empty verified value"));
        }

        let mut subroot = value.clone();
        let mut value = value;
        for ((proof, spec), key) in self
            .proofs
            .iter()
            .zip(specs.as_slice())
            .zip(keys.iter().rev())
            .skip(start_index)
        {
            match &proof.proof {
                Some(Proof::Exist(existence_proof)) => {
                    subroot = calculate_existence_root::<H>(existence_proof)
                        .map_err(|e| invalid_proof(format!("{e}")))?;

                    if !verify_membership::<H>(proof, spec, &subroot, key, &value) {
                        return Err(invalid_proof("membership verification failed"));
                    }
                    value.clone_from(&subroot);
                }
                _ => return Err(invalid_proof("expected an existence proof")),
            }
        }

        if root != subroot.as_slice() {
            return Err(invalid_proof("proof does not lead to the trusted root"));
        }

        Ok(())
    }

    /// Verifies that nothing is stored under `keys` (root-to-leaf) in the
    /// tree committed to by `root`.
    pub fn verify_non_membership<H: HostFunctionsProvider>(
        &self,
        specs: &ProofSpecs,
        root: &[u8],
        keys: &[&[u8]],
    ) -> Result<(), InterchainQueryError> {
        self.validate_layout(specs, root, keys)?;

        let proof = self
            .proofs
            .first()
            .ok_or_else(|| invalid_proof("empty merkle proof"))?;
        let spec = specs
            .as_slice()
            .first()
            .ok_or_else(|| invalid_proof("empty proof specs"))?;
        let key = keys
            .last()
            .ok_or_else(|| invalid_proof("empty merkle path"))?;
        match &proof.proof {
            Some(Proof::Nonexist(non_existence_proof)) => {
                let subroot = calculate_non_existence_root::<H>(non_existence_proof)?;

                if !verify_non_membership::<H>(proof, spec, &subroot, key) {
                    return Err(invalid_proof("non-membership verification failed"));
                }

                // the upper layers prove the subtree root itself
                self.verify_membership::<H>(specs, root, keys, subroot, 1)
            }
            _ => Err(invalid_proof("expected a non-existence proof")),
        }
    }

    fn validate_layout(
        &self,
        specs: &ProofSpecs,
        root: &[u8],
        keys: &[&[u8]],
    ) -> Result<(), InterchainQueryError> {
        if self.proofs.is_empty() {
            return Err(invalid_proof("empty merkle proof"));
        }
        if root.is_empty() {
            return Err(invalid_proof("empty merkle root"));
        }
        if specs.len() != self.proofs.len() {
            return Err(invalid_proof(format!(
                "expected {} proof layers, got {}",
                specs.len(),
                self.proofs.len()
            )));
        }
        if keys.len() != self.proofs.len() {
            return Err(invalid_proof(format!(
                "merkle path has {} keys for {} proof layers",
                keys.len(),
                self.proofs.len()
            )));
        }
        Ok(())
    }
}

fn calculate_non_existence_root<H: HostFunctionsProvider>(
    proof: &NonExistenceProof,
) -> Result<Vec<u8>, InterchainQueryError> {
    let neighbour = proof
        .left
        .as_ref()
        .or(proof.right.as_ref())
        .ok_or_else(|| invalid_proof("non-existence proof without neighbours"))?;
    calculate_existence_root::<H>(neighbour).map_err(|e| invalid_proof(format!("{e}")))
}

/// Verifies a single layer protobuf encoded `CommitmentProof` of `key`
/// mapping to `value` under `root`.
pub fn verify_commitment_proof<H: HostFunctionsProvider>(
    spec: &ProofSpec,
    root: &[u8],
    proof: &[u8],
    key: &[u8],
    value: &[u8],
) -> Result<(), InterchainQueryError> {
    if root.is_empty() {
        return Err(invalid_proof("empty merkle root"));
    }
    let proof = CommitmentProof::decode(proof)?;
    let root = root.to_vec();
    if !verify_membership::<H>(&proof, spec, &root, key, value) {
        return Err(invalid_proof("membership verification failed"));
    }
    Ok(())
}
