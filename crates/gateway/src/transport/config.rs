//! Delivery configuration
//!
//! Built once by the caller and handed to `DeliveryAction::new`. The
//! environment loader is a convenience on top of `from_lookup`, which keeps
//! construction testable without touching the process environment.

use crate::error::ConfigError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tbot_ports::Endpoint;

/// Key and channel naming shared with the webhook side
///
/// Both ends derive names from the client id so several producers can share
/// one bus without colliding.
pub struct Keys;

impl Keys {
    /// Prefix of the per-client stream key
    pub const STREAM_PREFIX: &'static str = "REDIS_SKEY_";

    /// Prefix of the per-client pub/sub channel
    pub const CHANNEL_PREFIX: &'static str = "REDIS_CH_";

    /// Name of the single field carrying the payload in a stream entry
    pub const STREAM_FIELD: &'static str = "tradingboat";

    /// Stream key for a client: `REDIS_SKEY_7`
    pub fn stream(client_id: &str) -> String {
        format!("{}{}", Self::STREAM_PREFIX, client_id)
    }

    /// Channel name for a client: `REDIS_CH_7`
    pub fn channel(client_id: &str) -> String {
        format!("{}{}", Self::CHANNEL_PREFIX, client_id)
    }
}

/// Environment variable names recognised by `DeliveryConfig::from_env`
pub struct EnvVars;

impl EnvVars {
    pub const CLIENT_ID: &'static str = "TBOT_IBKR_CLIENTID";
    pub const USES_STREAM: &'static str = "TBOT_USES_REDIS_STREAM";
    pub const PASSWORD: &'static str = "TBOT_REDIS_PASSWORD";
    pub const HOST: &'static str = "TBOT_REDIS_HOST";
    pub const PORT: &'static str = "TBOT_REDIS_PORT";
    pub const UNIX_SOCKET: &'static str = "TBOT_REDIS_UNIXDOMAIN_SOCK";
}

pub const DEFAULT_CLIENT_ID: &str = "1";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 6379;

/// Delivery mode, fixed for the lifetime of a delivery action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DeliveryMode {
    /// Append-only stream (XADD)
    #[default]
    Stream,
    /// Broadcast channel (PUBLISH)
    PubSub,
}

impl DeliveryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stream => "stream",
            Self::PubSub => "pubsub",
        }
    }

    /// Map the stream-mode flag to a mode
    ///
    /// Accepts `y yes t true on 1` for Stream and `n no f false off 0` for
    /// PubSub, case-insensitively. Anything else is `None`.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" | "t" | "true" | "on" | "1" => Some(Self::Stream),
            "n" | "no" | "f" | "false" | "off" | "0" => Some(Self::PubSub),
            _ => None,
        }
    }
}

impl FromStr for DeliveryMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_flag(s).ok_or_else(|| ConfigError::InvalidFlag {
            name: EnvVars::USES_STREAM.to_string(),
            value: s.to_string(),
        })
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root delivery configuration
#[derive(Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    /// Distinguishes producers sharing one bus
    pub client_id: String,
    pub mode: DeliveryMode,
    /// Networked host; empty selects the local socket
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    /// Shared bus credential; empty disables AUTH
    pub password: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            client_id: DEFAULT_CLIENT_ID.to_string(),
            mode: DeliveryMode::Stream,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            unix_socket_path: String::new(),
            password: String::new(),
        }
    }
}

impl fmt::Debug for DeliveryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() { "" } else { "***" };
        f.debug_struct("DeliveryConfig")
            .field("client_id", &self.client_id)
            .field("mode", &self.mode)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("unix_socket_path", &self.unix_socket_path)
            .field("password", &password)
            .finish()
    }
}

impl DeliveryConfig {
    /// Stream-mode config over the default TCP endpoint
    pub fn stream(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            mode: DeliveryMode::Stream,
            ..Default::default()
        }
    }

    /// PubSub-mode config over the default TCP endpoint
    pub fn pubsub(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            mode: DeliveryMode::PubSub,
            ..Default::default()
        }
    }

    /// Use the networked transport
    pub fn with_tcp(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Use the local-socket transport (clears the host)
    pub fn with_unix_socket(mut self, path: impl Into<String>) -> Self {
        self.host.clear();
        self.unix_socket_path = path.into();
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup, applying defaults for absent keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match lookup(EnvVars::USES_STREAM) {
            Some(flag) => flag.parse::<DeliveryMode>()?,
            None => DeliveryMode::default(),
        };

        let port = match lookup(EnvVars::PORT) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort {
                    name: EnvVars::PORT.to_string(),
                    value: raw.clone(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            client_id: lookup(EnvVars::CLIENT_ID).unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string()),
            mode,
            host: lookup(EnvVars::HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            unix_socket_path: lookup(EnvVars::UNIX_SOCKET).unwrap_or_default(),
            password: lookup(EnvVars::PASSWORD).unwrap_or_default(),
        })
    }

    pub fn stream_key(&self) -> String {
        Keys::stream(&self.client_id)
    }

    pub fn channel_name(&self) -> String {
        Keys::channel(&self.client_id)
    }

    pub fn stream_field_key(&self) -> &'static str {
        Keys::STREAM_FIELD
    }

    /// Transport endpoint; host presence is the only discriminator
    pub fn endpoint(&self) -> Endpoint {
        if self.host.is_empty() {
            Endpoint::Unix {
                path: PathBuf::from(&self.unix_socket_path),
            }
        } else {
            Endpoint::Tcp {
                host: self.host.clone(),
                port: self.port,
            }
        }
    }

    /// Password to authenticate with, if any
    pub fn password(&self) -> Option<&str> {
        (!self.password.is_empty()).then_some(self.password.as_str())
    }
}
