//! TradingBoat Runner - stdin-to-Redis relay
//!
//! Hosts a `DeliveryAction` in a process:
//!
//! - **Logging**: installs `env_logger`, level taken from `TBOT_LOGLEVEL`
//! - **Configuration**: `DeliveryConfig` loaded once from the environment
//! - **Relay loop**: one raw event per input line, delivered in order
//!
//! ```text
//!  stdin (one alert per line)
//!        │
//!        ▼
//!  ┌───────────────┐     ┌──────────────────┐
//!  │  relay loop   │────►│  DeliveryAction  │────► Redis
//!  └───────────────┘     └──────────────────┘
//! ```
//!
//! A transport failure stops the loop and is returned, so the process exits
//! non-zero and whatever supervises it decides whether to restart.

pub mod error;
pub mod logging;
pub mod relay;

pub use error::RelayError;
pub use logging::{LOG_LEVEL_VAR, init_logging, parse_level};
pub use relay::{RelaySummary, relay};
