use ibc_primitives::prelude::*;
use ibc_proto::google::protobuf::Any;
use ibc_proto::ibc::applications::interchain_accounts::v1::{
    CosmosTx, InterchainAccountPacketData as RawInterchainAccountPacketData,
};
use prost::Message;

use crate::error::InterchainTxsError;

/// Longest memo a packet may carry.
pub const MAX_MEMO_CHAR_LENGTH: usize = 256;

/// Classification of the packets a controller sends to its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PacketType {
    /// Execute a transaction on the host chain.
    ExecuteTx = 1,
}

/// ICS-27 packet data: the messages an interchain account executes on the
/// host chain, packaged as one `CosmosTx`.
#[derive(Clone, Debug, PartialEq)]
pub struct InterchainAccountPacketData {
    pub packet_type: PacketType,
    pub messages: Vec<Any>,
    pub memo: String,
}

impl InterchainAccountPacketData {
    pub fn execute_tx(messages: Vec<Any>, memo: String) -> Result<Self, InterchainTxsError> {
        if messages.is_empty() {
            return Err(InterchainTxsError::NoMessages);
        }
        validate_memo(&memo)?;
        Ok(Self {
            packet_type: PacketType::ExecuteTx,
            messages,
            memo,
        })
    }

    /// Protobuf bytes sent as the packet data.
    pub fn encode_vec(self) -> Vec<u8> {
        RawInterchainAccountPacketData::from(self).encode_to_vec()
    }

    pub fn decode_vec(bytes: &[u8]) -> Result<Self, InterchainTxsError> {
        let raw = RawInterchainAccountPacketData::decode(bytes)?;
        raw.try_into()
    }
}

pub fn validate_memo(memo: &str) -> Result<(), InterchainTxsError> {
    if memo.chars().count() > MAX_MEMO_CHAR_LENGTH {
        return Err(InterchainTxsError::MemoTooLong {
            max: MAX_MEMO_CHAR_LENGTH,
        });
    }
    Ok(())
}

impl From<InterchainAccountPacketData> for RawInterchainAccountPacketData {
    fn from(domain: InterchainAccountPacketData) -> Self {
        Self {
            r#type: domain.packet_type as i32,
            data: CosmosTx {
                messages: domain.messages,
            }
            .encode_to_vec(),
            memo: domain.memo,
        }
    }
}

impl TryFrom<RawInterchainAccountPacketData> for InterchainAccountPacketData {
    type Error = InterchainTxsError;

    fn try_from(raw: RawInterchainAccountPacketData) -> Result<Self, Self::Error> {
        if raw.r#type != PacketType::ExecuteTx as i32 {
            return Err(InterchainTxsError::ProtoUnmarshal {
                reason: format!("unsupported packet type {}", raw.r#type),
            });
        }
        let tx = CosmosTx::decode(raw.data.as_slice())?;
        Self::execute_tx(tx.messages, raw.memo)
    }
}
