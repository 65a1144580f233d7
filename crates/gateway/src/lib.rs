//! TradingBoat Gateway
//!
//! Gateway layer for the TradingBoat relay. Provides:
//! - Delivery configuration and key/channel naming
//! - Redis transport (TCP or Unix domain socket) behind the bus ports
//! - The delivery action: validation gate, mode router, stream and channel publishers
//! - Upstream adapters (webhook alerts)
//!
//! ## Architecture
//!
//! ```text
//! Upstream producer (webhook alerts)
//!         │ raw event
//!    ┌────▼──────────┐
//!    │ Validation    │── invalid ──► skipped (debug log)
//!    │ Gate          │
//!    └────┬──────────┘
//!         │ Record
//!    ┌────▼──────────┐
//!    │ Delivery      │  mode fixed at construction
//!    │ Router        │
//!    └──┬─────────┬──┘
//!       │         │
//!  REDIS_SKEY_{id} REDIS_CH_{id}
//!    (XADD)     (PUBLISH)
//!       │         │
//!    ┌──▼─────────▼──┐
//!    │  Redis (tcp / │
//!    │  unix socket) │
//!    └───────────────┘
//! ```

pub mod adapters;
pub mod delivery;
pub mod error;
pub mod transport;

// Re-export commonly used types
pub use adapters::{AlertSchema, WebhookAlert};
pub use delivery::{ChannelPublisher, Delivery, DeliveryAction, StreamPublisher};
pub use error::{ConfigError, DeliveryError, TransportError};
pub use transport::{
    DeliveryConfig, DeliveryMode, EnvVars, Keys, RedisBusConnection, RedisConnector,
};
