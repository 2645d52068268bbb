use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use ibc_core_host_types::identifiers::ConnectionId;
use ibc_primitives::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::InterchainTxsError;
use crate::VERSION;

/// ICS-27 channel version metadata, carried JSON-encoded in the channel
/// version of the handshake.
///
/// The address is empty when the controller opens the handshake and holds
/// the interchain account address in the host's acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub version: String,
    pub controller_connection_id: String,
    pub host_connection_id: String,
    pub address: String,
    pub encoding: SupportedEncoding,
    pub tx_type: SupportedTxType,
}

impl Metadata {
    /// Metadata proposed by the controller when it opens the handshake.
    pub fn new_default(controller_connection_id: &ConnectionId) -> Self {
        Self {
            version: VERSION.to_string(),
            controller_connection_id: controller_connection_id.to_string(),
            host_connection_id: String::new(),
            address: String::new(),
            encoding: SupportedEncoding::Proto3,
            tx_type: SupportedTxType::SdkMultiMsg,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, InterchainTxsError> {
        serde_json::from_str(raw).map_err(|e| InterchainTxsError::InvalidMetadata {
            reason: e.to_string(),
        })
    }

    pub fn to_json(&self) -> Result<String, InterchainTxsError> {
        serde_json::to_string(self).map_err(|e| InterchainTxsError::InvalidMetadata {
            reason: e.to_string(),
        })
    }

    /// Checks the metadata a host acknowledged for a handshake opened on
    /// `connection_id`. The acknowledged metadata must bind an address.
    pub fn validate_ack(&self, connection_id: &ConnectionId) -> Result<(), InterchainTxsError> {
        if self.version != VERSION {
            return Err(InterchainTxsError::InvalidMetadata {
                reason: format!("expected version `{VERSION}`, got `{}`", self.version),
            });
        }
        if self.controller_connection_id != connection_id.as_str() {
            return Err(InterchainTxsError::InvalidMetadata {
                reason: format!(
                    "expected controller connection `{connection_id}`, got `{}`",
                    self.controller_connection_id
                ),
            });
        }
        if self.host_connection_id.is_empty() {
            return Err(InterchainTxsError::InvalidMetadata {
                reason: "missing host connection id".to_string(),
            });
        }
        if self.address.is_empty() {
            return Err(InterchainTxsError::InvalidMetadata {
                reason: "missing interchain account address".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportedEncoding {
    #[serde(rename = "proto3")]
    Proto3,
}

impl Display for SupportedEncoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            Self::Proto3 => write!(f, "proto3"),
        }
    }
}

impl FromStr for SupportedEncoding {
    type Err = InterchainTxsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proto3" => Ok(Self::Proto3),
            _ => Err(InterchainTxsError::InvalidMetadata {
                reason: format!("unsupported encoding `{s}`"),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportedTxType {
    #[serde(rename = "sdk_multi_msg")]
    SdkMultiMsg,
}

impl Display for SupportedTxType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            Self::SdkMultiMsg => write!(f, "sdk_multi_msg"),
        }
    }
}

impl FromStr for SupportedTxType {
    type Err = InterchainTxsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sdk_multi_msg" => Ok(Self::SdkMultiMsg),
            _ => Err(InterchainTxsError::InvalidMetadata {
                reason: format!("unsupported tx type `{s}`"),
            }),
        }
    }
}
