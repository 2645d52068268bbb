//! Builders of the ICS-23 proofs a relayer submits: a tendermint simple
//! Merkle tree over sorted key-value pairs, and a multistore of such trees
//! committed to by an app hash.

use alloc::collections::BTreeMap;

use ibc_app_interchain_queries::types::merkle::MerkleProof;
use ibc_app_interchain_queries::types::{
    tx_commitment_value, tx_hash, RemoteHeader, RemoteHeight, StorageValue, TxEventAttribute,
    TxRecord,
};
use ibc_primitives::prelude::*;
use ics23::commitment_proof::Proof;
use ics23::{
    CommitmentProof, ExistenceProof, HashOp, InnerOp, LeafOp, LengthOp, NonExistenceProof,
};
use prost::Message;
use sha2::{Digest, Sha256};

const LEAF_PREFIX: u8 = 0;
const INNER_PREFIX: u8 = 1;

fn leaf_op() -> LeafOp {
    LeafOp {
        hash: HashOp::Sha256.into(),
        prehash_key: HashOp::NoHash.into(),
        prehash_value: HashOp::Sha256.into(),
        length: LengthOp::VarProto.into(),
        prefix: vec![LEAF_PREFIX],
    }
}

fn leaf_hash(key: &[u8], value: &[u8]) -> Vec<u8> {
    let mut preimage = vec![LEAF_PREFIX];
    prost::encoding::encode_varint(key.len() as u64, &mut preimage);
    preimage.extend_from_slice(key);
    let value_hash = Sha256::digest(value);
    prost::encoding::encode_varint(value_hash.len() as u64, &mut preimage);
    preimage.extend_from_slice(&value_hash);
    Sha256::digest(&preimage).to_vec()
}

fn inner_hash(left: &[u8], right: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update([INNER_PREFIX]);
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().to_vec()
}

/// Largest power of two strictly below `n`, for `n >= 2`.
fn split_point(n: usize) -> usize {
    let mut k = 1;
    while k * 2 < n {
        k *= 2;
    }
    k
}

/// A tendermint simple Merkle tree. Test stores and the multistore above
/// them share this layout.
#[derive(Clone, Debug, Default)]
pub struct MerkleTree {
    leaves: Vec<(Vec<u8>, Vec<u8>)>,
}

impl MerkleTree {
    /// Builds a tree over `entries`, sorted by key. Later duplicates win.
    pub fn new(entries: impl IntoIterator<Item = (Vec<u8>, Vec<u8>)>) -> Self {
        let sorted: BTreeMap<Vec<u8>, Vec<u8>> = entries.into_iter().collect();
        Self {
            leaves: sorted.into_iter().collect(),
        }
    }

    pub fn root(&self) -> Vec<u8> {
        Self::subtree_root(&self.leaves)
    }

    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.position(key).ok().map(|i| self.leaves[i].1.as_slice())
    }

    fn position(&self, key: &[u8]) -> Result<usize, usize> {
        self.leaves
            .binary_search_by(|(k, _)| k.as_slice().cmp(key))
    }

    fn subtree_root(leaves: &[(Vec<u8>, Vec<u8>)]) -> Vec<u8> {
        match leaves {
            [] => Sha256::digest(b"").to_vec(),
            [(key, value)] => leaf_hash(key, value),
            _ => {
                let k = split_point(leaves.len());
                inner_hash(
                    &Self::subtree_root(&leaves[..k]),
                    &Self::subtree_root(&leaves[k..]),
                )
            }
        }
    }

    /// Inner ops from the leaf at `index` up to the root.
    fn path(leaves: &[(Vec<u8>, Vec<u8>)], index: usize) -> Vec<InnerOp> {
        if leaves.len() <= 1 {
            return Vec::new();
        }
        let k = split_point(leaves.len());
        if index < k {
            let mut path = Self::path(&leaves[..k], index);
            path.push(InnerOp {
                hash: HashOp::Sha256.into(),
                prefix: vec![INNER_PREFIX],
                suffix: Self::subtree_root(&leaves[k..]),
            });
            path
        } else {
            let mut path = Self::path(&leaves[k..], index - k);
            let mut prefix = vec![INNER_PREFIX];
            prefix.extend(Self::subtree_root(&leaves[..k]));
            path.push(InnerOp {
                hash: HashOp::Sha256.into(),
                prefix,
                suffix: Vec::new(),
            });
            path
        }
    }

    fn existence_at(&self, index: usize) -> ExistenceProof {
        let (key, value) = &self.leaves[index];
        ExistenceProof {
            key: key.clone(),
            value: value.clone(),
            leaf: Some(leaf_op()),
            path: Self::path(&self.leaves, index),
        }
    }

    /// Proves that `key` is present, or that it is absent by exhibiting its
    /// neighbours.
    pub fn prove(&self, key: &[u8]) -> CommitmentProof {
        let proof = match self.position(key) {
            Ok(index) => Proof::Exist(self.existence_at(index)),
            Err(index) => Proof::Nonexist(NonExistenceProof {
                key: key.to_vec(),
                left: index.checked_sub(1).map(|i| self.existence_at(i)),
                right: (index < self.leaves.len()).then(|| self.existence_at(index)),
            }),
        };
        CommitmentProof { proof: Some(proof) }
    }
}

/// The state of a remote chain: named stores, each a [`MerkleTree`], whose
/// roots are committed to by the app hash.
#[derive(Clone, Debug, Default)]
pub struct RemoteState {
    stores: BTreeMap<String, BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl RemoteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, store: &str, key: &[u8], value: &[u8]) -> Self {
        self.set(store, key, value);
        self
    }

    pub fn set(&mut self, store: &str, key: &[u8], value: &[u8]) {
        self.stores
            .entry(store.to_string())
            .or_default()
            .insert(key.to_vec(), value.to_vec());
    }

    fn store_tree(&self, store: &str) -> MerkleTree {
        let entries = self.stores.get(store).cloned().unwrap_or_default();
        MerkleTree::new(entries)
    }

    fn multistore(&self) -> MerkleTree {
        MerkleTree::new(
            self.stores
                .keys()
                .map(|name| (name.as_bytes().to_vec(), self.store_tree(name).root())),
        )
    }

    pub fn app_hash(&self) -> Vec<u8> {
        self.multistore().root()
    }

    pub fn header(&self, height: RemoteHeight) -> RemoteHeader {
        RemoteHeader {
            height,
            app_hash: self.app_hash(),
        }
    }

    /// Reads `key` from `store` along with its proof under the app hash. An
    /// absent key reads as an empty value proven absent.
    pub fn storage_value(&self, store: &str, key: &[u8]) -> StorageValue {
        let tree = self.store_tree(store);
        let value = tree.get(key).map(<[u8]>::to_vec).unwrap_or_default();
        let proof = MerkleProof {
            proofs: vec![tree.prove(key), self.multistore().prove(store.as_bytes())],
        };
        StorageValue {
            storage_prefix: store.to_string(),
            key: key.to_vec(),
            value,
            proof: proof.encode_vec(),
        }
    }
}

/// Transactions included in one remote block, committed to by a tree of
/// transaction hashes to event bytes.
#[derive(Clone, Debug)]
pub struct RemoteBlock {
    pub height: u64,
    txs: Vec<(Vec<u8>, Vec<TxEventAttribute>)>,
}

impl RemoteBlock {
    pub fn new(height: u64) -> Self {
        Self {
            height,
            txs: Vec::new(),
        }
    }

    pub fn with_tx(mut self, tx: &[u8], events: Vec<TxEventAttribute>) -> Self {
        self.txs.push((tx.to_vec(), events));
        self
    }

    fn tree(&self) -> MerkleTree {
        MerkleTree::new(
            self.txs
                .iter()
                .zip(0u64..)
                .map(|((tx, events), index)| (tx_hash(tx), tx_commitment_value(index, events))),
        )
    }

    /// Root the light client must trust at this block's height.
    pub fn root(&self) -> Vec<u8> {
        self.tree().root()
    }

    /// The transaction at `index` with its inclusion proof.
    pub fn record(&self, index: usize) -> Option<TxRecord> {
        let (tx, events) = self.txs.get(index)?;
        let proof = self.tree().prove(&tx_hash(tx)).encode_to_vec();
        Some(TxRecord {
            height: self.height,
            index: index as u64,
            tx: tx.clone(),
            events: events.clone(),
            proof,
        })
    }

    pub fn records(&self) -> Vec<TxRecord> {
        (0..self.txs.len()).filter_map(|i| self.record(i)).collect()
    }
}
