//! Stand-in for the channel layer: opens channels on request and records
//! every packet sent on them.

use alloc::collections::BTreeMap;

use ibc_app_interchain_txs::types::error::InterchainTxsError;
use ibc_core_host_types::identifiers::{ChannelId, ConnectionId, PortId, Sequence};
use ibc_primitives::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentPacket {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub sequence: Sequence,
    pub data: Vec<u8>,
    pub timeout_timestamp: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenedChannel {
    pub connection_id: ConnectionId,
    pub port_id: PortId,
    pub version: String,
}

#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    pub channel_ids_counter: u64,
    pub channels: BTreeMap<ChannelId, OpenedChannel>,
    pub next_sequence_send: BTreeMap<(PortId, ChannelId), Sequence>,
    pub sent_packets: Vec<SentPacket>,
}

impl MockTransport {
    pub fn open_channel(
        &mut self,
        connection_id: &ConnectionId,
        port_id: &PortId,
        version: &str,
    ) -> ChannelId {
        let channel_id = ChannelId::new(self.channel_ids_counter);
        self.channel_ids_counter += 1;
        self.channels.insert(
            channel_id.clone(),
            OpenedChannel {
                connection_id: connection_id.clone(),
                port_id: port_id.clone(),
                version: version.to_string(),
            },
        );
        channel_id
    }

    /// Fails unless `channel_id` was opened for `port_id`.
    pub fn send_packet(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        data: Vec<u8>,
        timeout_timestamp: u64,
    ) -> Result<Sequence, InterchainTxsError> {
        match self.channels.get(channel_id) {
            Some(channel) if &channel.port_id == port_id => {}
            _ => {
                return Err(InterchainTxsError::Transport {
                    description: format!("no channel {channel_id} bound to {port_id}"),
                })
            }
        }

        let next = self
            .next_sequence_send
            .entry((port_id.clone(), channel_id.clone()))
            .or_insert_with(|| Sequence::from(1));
        let sequence = *next;
        *next = Sequence::from(sequence.value() + 1);

        self.sent_packets.push(SentPacket {
            port_id: port_id.clone(),
            channel_id: channel_id.clone(),
            sequence,
            data,
            timeout_timestamp,
        });

        Ok(sequence)
    }
}
