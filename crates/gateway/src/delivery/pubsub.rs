use super::Delivery;
use crate::transport::config::{DeliveryConfig, Keys};
use log::debug;
use tbot_core::Record;
use tbot_ports::{BusConnection, TransportError, TransportResult};

/// Broadcasts records on the per-client channel
///
/// Fire-and-forget: only subscribers connected at publish time see the
/// message. Zero receivers is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPublisher {
    channel: String,
}

impl ChannelPublisher {
    pub fn new(client_id: &str) -> Self {
        Self {
            channel: Keys::channel(client_id),
        }
    }

    pub fn from_config(config: &DeliveryConfig) -> Self {
        Self {
            channel: config.channel_name(),
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Publish `json(record)` as the whole message body
    pub fn publish(
        &self,
        conn: &mut dyn BusConnection,
        record: Record,
    ) -> TransportResult<Delivery> {
        let payload = record
            .to_json()
            .map_err(|e| TransportError::Serialization(e.to_string()))?;

        let receivers = conn.broadcast(&self.channel, &payload)?;
        debug!("---> pushed to redis {} ({} receivers)", self.channel, receivers);

        Ok(Delivery::Published {
            channel: self.channel.clone(),
            receivers,
        })
    }
}
