use super::Delivery;
use crate::transport::config::{DeliveryConfig, Keys};
use log::debug;
use tbot_core::Record;
use tbot_ports::{BusConnection, TransportError, TransportResult};

/// Appends records to the per-client stream
///
/// Each record becomes one entry with a single field holding its JSON.
/// There is no retry or dedup here; ordering is whatever the connection
/// gives for successive appends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamPublisher {
    stream_key: String,
    field_key: &'static str,
}

impl StreamPublisher {
    pub fn new(client_id: &str) -> Self {
        Self {
            stream_key: Keys::stream(client_id),
            field_key: Keys::STREAM_FIELD,
        }
    }

    pub fn from_config(config: &DeliveryConfig) -> Self {
        Self {
            stream_key: config.stream_key(),
            field_key: config.stream_field_key(),
        }
    }

    pub fn stream_key(&self) -> &str {
        &self.stream_key
    }

    pub fn field_key(&self) -> &str {
        self.field_key
    }

    /// Append one entry `{field_key: json(record)}` to the stream
    pub fn publish(
        &self,
        conn: &mut dyn BusConnection,
        record: Record,
    ) -> TransportResult<Delivery> {
        let payload = record
            .to_json()
            .map_err(|e| TransportError::Serialization(e.to_string()))?;

        let entry_id = conn.append(&self.stream_key, &[(self.field_key, payload.as_str())])?;
        debug!("->pushed| {}:{}", self.stream_key, self.field_key);

        Ok(Delivery::Appended {
            stream: self.stream_key.clone(),
            entry_id,
        })
    }
}
