//! TradingBoat Core Domain
//!
//! Pure domain types for the TradingBoat relay.
//! This crate contains no I/O and is 100% unit testable.

pub mod error;
pub mod record;

// Re-export commonly used types at crate root
pub use error::{ValidationError, ValidationResult};
pub use record::Record;
