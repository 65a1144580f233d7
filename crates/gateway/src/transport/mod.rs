//! Transport layer
//!
//! Configuration, key naming and the Redis implementation of the bus ports.
//! The ports themselves live in `tbot-ports` so other transports (or test
//! doubles) can be plugged into the delivery action.

pub mod config;
pub mod redis_bus;

pub use config::{DeliveryConfig, DeliveryMode, EnvVars, Keys};
pub use redis_bus::{RedisBusConnection, RedisConnector};
pub use tbot_ports::{BusConnection, Connector, Endpoint};
