//! Storage keys of key-value interchain queries.
use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use derive_more::{From, Into};
use ibc_primitives::prelude::*;
use subtle_encoding::hex;

use crate::error::InterchainQueryError;

const PATH_KEY_DELIMITER: char = '/';
const KEYS_DELIMITER: char = ',';

/// A single key read from a remote store.
///
/// `path` is the name of the remote store (the storage prefix, e.g. `bank`)
/// and `key` the raw bytes of the key inside that store. Rendered as
/// `<path>/<hex(key)>`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KvKey {
    pub path: String,
    pub key: Vec<u8>,
}

impl KvKey {
    pub fn new(path: impl Into<String>, key: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn validate_basic(&self) -> Result<(), InterchainQueryError> {
        if self.path.is_empty() {
            return Err(InterchainQueryError::InvalidQueryType {
                reason: "kv key path must not be empty".to_string(),
            });
        }
        if self.path.contains(PATH_KEY_DELIMITER) || self.path.contains(KEYS_DELIMITER) {
            return Err(InterchainQueryError::InvalidQueryType {
                reason: format!("kv key path `{}` contains a delimiter", self.path),
            });
        }
        if self.key.is_empty() {
            return Err(InterchainQueryError::InvalidQueryType {
                reason: format!("kv key in path `{}` must not be empty", self.path),
            });
        }
        Ok(())
    }
}

impl Display for KvKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        let encoded = hex::encode(&self.key);
        write!(
            f,
            "{}{}{}",
            self.path,
            PATH_KEY_DELIMITER,
            String::from_utf8_lossy(&encoded)
        )
    }
}

impl FromStr for KvKey {
    type Err = InterchainQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, encoded) = s.split_once(PATH_KEY_DELIMITER).ok_or_else(|| {
            InterchainQueryError::InvalidQueryType {
                reason: format!("kv key `{s}` is not of the form <path>/<hex key>"),
            }
        })?;
        let key = hex::decode(encoded).map_err(|_| InterchainQueryError::InvalidQueryType {
            reason: format!("kv key `{s}` has an invalid hex encoding"),
        })?;
        let kv_key = Self::new(path, key);
        kv_key.validate_basic()?;
        Ok(kv_key)
    }
}

/// Ordered list of the keys a key-value query reads.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq, From, Into)]
pub struct KvKeys(Vec<KvKey>);

impl KvKeys {
    pub fn new(keys: Vec<KvKey>) -> Self {
        Self(keys)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KvKey> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[KvKey] {
        &self.0
    }

    /// Returns the key registered under `path` with the given raw bytes, if any.
    pub fn find(&self, path: &str, key: &[u8]) -> Option<&KvKey> {
        self.0.iter().find(|k| k.path == path && k.key == key)
    }

    pub fn validate_basic(&self, max_keys: u64) -> Result<(), InterchainQueryError> {
        if self.0.is_empty() {
            return Err(InterchainQueryError::InvalidQueryType {
                reason: "kv query requires at least one key".to_string(),
            });
        }
        if self.0.len() as u64 > max_keys {
            return Err(InterchainQueryError::InvalidQueryType {
                reason: format!(
                    "kv query has {} keys, at most {max_keys} are allowed",
                    self.0.len()
                ),
            });
        }
        for (i, key) in self.0.iter().enumerate() {
            key.validate_basic()?;
            if self.0[..i].contains(key) {
                return Err(InterchainQueryError::InvalidQueryType {
                    reason: format!("duplicate kv key `{key}`"),
                });
            }
        }
        Ok(())
    }
}

impl Display for KvKeys {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{KEYS_DELIMITER}")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl FromStr for KvKeys {
    type Err = InterchainQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::default());
        }
        s.split(KEYS_DELIMITER)
            .map(KvKey::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl<'a> IntoIterator for &'a KvKeys {
    type Item = &'a KvKey;
    type IntoIter = core::slice::Iter<'a, KvKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
