//! Results relayers submit for registered queries, and the form they are
//! stored in once verified.
use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_primitives::prelude::*;
use sha2::{Digest, Sha256};

use crate::error::InterchainQueryError;
use crate::merkle::MerkleProof;

/// Height of the remote chain, ordered by revision first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RemoteHeight {
    pub revision_number: u64,
    pub revision_height: u64,
}

impl RemoteHeight {
    pub fn new(revision_number: u64, revision_height: u64) -> Self {
        Self {
            revision_number,
            revision_height,
        }
    }
}

impl Display for RemoteHeight {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}-{}", self.revision_number, self.revision_height)
    }
}

/// The part of a remote block header a key-value result is anchored to.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteHeader {
    pub height: RemoteHeight,
    pub app_hash: Vec<u8>,
}

/// A submitted key-value pair together with its Merkle proof.
///
/// `proof` is a protobuf encoded `ibc.core.commitment.v1.MerkleProof`
/// proving `key` inside the store `storage_prefix` (leaf layer first). An
/// empty `value` asks for a proof of absence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageValue {
    pub storage_prefix: String,
    pub key: Vec<u8>,
    pub value: Vec<u8>,
    pub proof: Vec<u8>,
}

impl StorageValue {
    pub fn merkle_proof(&self) -> Result<MerkleProof, InterchainQueryError> {
        MerkleProof::decode(&self.proof)
    }

    /// Strips the proof off the value.
    pub fn into_kv_result(self) -> KvResult {
        KvResult {
            storage_prefix: self.storage_prefix,
            key: self.key,
            value: self.value,
        }
    }
}

/// A verified key-value pair, as kept by the result store.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KvResult {
    pub storage_prefix: String,
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

/// The last verified result of a key-value query.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub kv_results: Vec<KvResult>,
    pub height: u64,
    pub revision: u64,
}

/// Key-value result as submitted by a relayer.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KvQueryResult {
    pub kv_results: Vec<StorageValue>,
    pub height: u64,
    pub revision: u64,
    pub header: RemoteHeader,
}

impl KvQueryResult {
    pub fn remote_height(&self) -> RemoteHeight {
        RemoteHeight::new(self.revision, self.height)
    }
}

/// One attribute of an event a remote transaction emitted, keyed by
/// `<event type>.<attribute key>`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxEventAttribute {
    pub key: String,
    pub value: String,
}

impl TxEventAttribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A remote transaction matched by a transaction-search query.
///
/// `proof` is a protobuf encoded ICS-23 `CommitmentProof` of
/// [`TxRecord::hash`] mapping to [`TxRecord::commitment_value`] under the
/// remote root at `height`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxRecord {
    pub height: u64,
    pub index: u64,
    pub tx: Vec<u8>,
    pub events: Vec<TxEventAttribute>,
    pub proof: Vec<u8>,
}

impl TxRecord {
    pub fn hash(&self) -> Vec<u8> {
        tx_hash(&self.tx)
    }

    pub fn commitment_value(&self) -> Vec<u8> {
        tx_commitment_value(self.index, &self.events)
    }

    pub fn into_stored(self, query_id: u64) -> StoredTransaction {
        StoredTransaction {
            query_id,
            height: self.height,
            index: self.index,
            tx: self.tx,
            events: self.events,
        }
    }
}

/// Transaction-search result as submitted by a relayer. `height` is the
/// remote height the search was run up to.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxQueryResult {
    pub height: u64,
    pub revision: u64,
    pub transactions: Vec<TxRecord>,
}

impl TxQueryResult {
    pub fn remote_height(&self) -> RemoteHeight {
        RemoteHeight::new(self.revision, self.height)
    }
}

/// A verified transaction, as kept by the result store.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredTransaction {
    pub query_id: u64,
    pub height: u64,
    pub index: u64,
    pub tx: Vec<u8>,
    pub events: Vec<TxEventAttribute>,
}

/// Result submitted for a registered query.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmittedResult {
    Kv(KvQueryResult),
    Tx(TxQueryResult),
}

impl SubmittedResult {
    pub fn remote_height(&self) -> RemoteHeight {
        match self {
            Self::Kv(kv) => kv.remote_height(),
            Self::Tx(tx) => tx.remote_height(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Kv(kv) => kv.kv_results.is_empty(),
            Self::Tx(tx) => tx.transactions.is_empty(),
        }
    }
}

/// SHA-256 of a raw transaction, the key transactions are proven under.
pub fn tx_hash(tx: &[u8]) -> Vec<u8> {
    Sha256::digest(tx).to_vec()
}

/// The value a transaction is proven with: the big-endian `u64` position of
/// the transaction in its block followed by [`canonical_event_bytes`] of its
/// events.
pub fn tx_commitment_value(index: u64, events: &[TxEventAttribute]) -> Vec<u8> {
    let mut bytes = index.to_be_bytes().to_vec();
    bytes.extend(canonical_event_bytes(events));
    bytes
}

/// Encodes event attributes: for each attribute, the big-endian `u32` length of the key, the key, the
/// big-endian `u32` length of the value and the value.
pub fn canonical_event_bytes(events: &[TxEventAttribute]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for attr in events {
        for field in [attr.key.as_bytes(), attr.value.as_bytes()] {
            bytes.extend_from_slice(&(field.len() as u32).to_be_bytes());
            bytes.extend_from_slice(field);
        }
    }
    bytes
}
