use thiserror::Error;

/// Transport-level errors talking to the message bus
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connect step failed (refused, bad address, auth rejected)
    #[error("Connection failed: {0}")]
    Connection(String),

    /// No connection was ever established for this instance
    #[error("Transport unavailable: no connection to the bus")]
    Unavailable,

    /// A command failed on an established connection
    #[error("Command failed: {0}")]
    Command(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

pub type TransportResult<T> = std::result::Result<T, TransportError>;
