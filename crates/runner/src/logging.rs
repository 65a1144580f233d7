//! Logger setup for the relay process

use log::LevelFilter;

/// Environment variable holding the relay log level
pub const LOG_LEVEL_VAR: &str = "TBOT_LOGLEVEL";

/// Map a level name to a filter
///
/// Accepts the `log` names plus the aliases used by the rest of the
/// TradingBoat stack (`WARNING`, `SUCCESS`, `CRITICAL`). Unknown names fall
/// back to `Info`.
pub fn parse_level(raw: &str) -> LevelFilter {
    match raw.trim().to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" | "success" => LevelFilter::Info,
        "warn" | "warning" => LevelFilter::Warn,
        "error" | "critical" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Install the process-wide logger
///
/// `TBOT_LOGLEVEL` sets the base level; `RUST_LOG` directives, when present,
/// are applied on top of it.
pub fn init_logging() {
    let level = std::env::var(LOG_LEVEL_VAR)
        .map(|raw| parse_level(&raw))
        .unwrap_or(LevelFilter::Info);

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
