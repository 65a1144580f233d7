//! TradingBoat Ports
//!
//! Port definitions (traits) for the TradingBoat relay.
//! These define the boundaries between delivery logic and infrastructure.

mod action;
mod bus;
mod error;

pub use action::Action;
pub use bus::{BusConnection, Connector, Endpoint};
pub use error::{TransportError, TransportResult};
