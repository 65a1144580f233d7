//! Upstream adapters
//!
//! Adapters turn external producer input (webhook bodies, etc.) into
//! validated records through the `Action` port.

pub mod webhook;

pub use webhook::{AlertSchema, WebhookAlert};
