//! Error types for the gateway crate

pub use tbot_ports::TransportError;
use thiserror::Error;

/// Configuration errors raised while building a `DeliveryConfig`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid boolean for {name}: '{value}'")]
    InvalidFlag { name: String, value: String },

    #[error("Invalid port for {name}: '{value}'")]
    InvalidPort { name: String, value: String },
}

/// Delivery-level errors (surfaced to the caller of `run`)
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Invalid mode for operation")]
    InvalidMode,
}
