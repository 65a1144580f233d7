//! Delivery action
//!
//! Validation-gated, mode-selected publishing of trading events:
//!
//! ```text
//! raw event ──► Action::run ──► gate ──► DeliveryAction ──┬──► StreamPublisher  (XADD)
//!                                                          └──► ChannelPublisher (PUBLISH)
//! ```

mod action;
mod gate;
mod pubsub;
mod stream;

pub use action::DeliveryAction;
pub use gate::validate_broker_data;
pub use pubsub::ChannelPublisher;
pub use stream::StreamPublisher;

/// Outcome of a single delivery attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Entry appended to a stream
    Appended { stream: String, entry_id: String },
    /// Message broadcast on a channel
    Published { channel: String, receivers: u64 },
    /// Event failed validation; nothing was sent
    Skipped,
}

impl Delivery {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Delivery::Skipped)
    }
}
