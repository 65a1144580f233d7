//! Redis transport
//!
//! Blocking client: every append or broadcast is one round trip on a
//! connection opened once by `RedisConnector`.

use log::debug;
use redis::{
    Client, Commands, Connection, ConnectionAddr, ConnectionInfo, RedisConnectionInfo, RedisError,
};
use tbot_ports::{BusConnection, Connector, Endpoint, TransportError, TransportResult};

/// Opens Redis connections over TCP or a Unix domain socket
#[derive(Debug, Clone, Copy, Default)]
pub struct RedisConnector;

impl RedisConnector {
    pub fn new() -> Self {
        Self
    }

    /// Translate an endpoint into client connection parameters
    pub fn connection_info(endpoint: &Endpoint, password: Option<&str>) -> ConnectionInfo {
        let addr = match endpoint {
            Endpoint::Tcp { host, port } => ConnectionAddr::Tcp(host.clone(), *port),
            Endpoint::Unix { path } => ConnectionAddr::Unix(path.clone()),
        };

        ConnectionInfo {
            addr,
            redis: RedisConnectionInfo {
                password: password.map(str::to_owned),
                ..Default::default()
            },
        }
    }
}

impl Connector for RedisConnector {
    fn connect(
        &self,
        endpoint: &Endpoint,
        password: Option<&str>,
    ) -> TransportResult<Box<dyn BusConnection>> {
        let info = Self::connection_info(endpoint, password);
        let client = Client::open(info).map_err(connection_error)?;
        let conn = client.get_connection().map_err(connection_error)?;

        debug!("Connected to redis at {}", endpoint);
        Ok(Box::new(RedisBusConnection::new(conn)))
    }
}

/// Live Redis connection implementing the bus port
pub struct RedisBusConnection {
    conn: Connection,
}

impl RedisBusConnection {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl BusConnection for RedisBusConnection {
    fn append(&mut self, stream: &str, fields: &[(&str, &str)]) -> TransportResult<String> {
        self.conn.xadd(stream, "*", fields).map_err(command_error)
    }

    fn broadcast(&mut self, channel: &str, message: &str) -> TransportResult<u64> {
        self.conn.publish(channel, message).map_err(command_error)
    }
}

fn connection_error(err: RedisError) -> TransportError {
    TransportError::Connection(err.to_string())
}

fn command_error(err: RedisError) -> TransportError {
    TransportError::Command(err.to_string())
}
