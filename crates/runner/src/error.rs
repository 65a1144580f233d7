//! Error types for the runner

use tbot_gateway::{ConfigError, DeliveryError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Delivery failed: {0}")]
    Delivery(#[from] DeliveryError),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
