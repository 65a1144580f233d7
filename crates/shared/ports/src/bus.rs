use std::fmt;
use std::path::PathBuf;

use crate::error::TransportResult;

/// Address of the message bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Networked transport
    Tcp { host: String, port: u16 },
    /// Local domain-socket transport
    Unix { path: PathBuf },
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Tcp { host, port } => write!(f, "tcp://{}:{}", host, port),
            Endpoint::Unix { path } => write!(f, "unix://{}", path.display()),
        }
    }
}

/// Port for a live connection to the message bus
///
/// Replies are decoded to text before they are returned.
pub trait BusConnection: Send {
    /// Append one entry to a stream, returning the bus-assigned entry id
    fn append(&mut self, stream: &str, fields: &[(&str, &str)]) -> TransportResult<String>;

    /// Broadcast a message on a channel, returning the number of receivers
    fn broadcast(&mut self, channel: &str, message: &str) -> TransportResult<u64>;
}

/// Port for opening bus connections
pub trait Connector {
    /// Open a connection, authenticating when a password is given
    fn connect(
        &self,
        endpoint: &Endpoint,
        password: Option<&str>,
    ) -> TransportResult<Box<dyn BusConnection>>;
}
