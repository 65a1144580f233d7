use log::{error, info};
use std::io;
use std::process::ExitCode;
use tbot_gateway::{DeliveryAction, DeliveryConfig, RedisConnector, WebhookAlert};
use tbot_runner::{RelayError, RelaySummary, init_logging, relay};

fn print_help() {
    eprintln!(
        r#"TradingBoat relay - delivers webhook alerts to Redis

USAGE:
    tbot-relay [OPTIONS] < alerts.jsonl

Reads one JSON alert per line from stdin.

OPTIONS:
    --help              Print this help message

ENVIRONMENT VARIABLES:
    TBOT_IBKR_CLIENTID          Client id used in key names (default: 1)
    TBOT_USES_REDIS_STREAM      true = stream (XADD), false = pub/sub (default: true)
    TBOT_REDIS_HOST             Redis host, empty for unix socket (default: 127.0.0.1)
    TBOT_REDIS_PORT             Redis port (default: 6379)
    TBOT_REDIS_UNIXDOMAIN_SOCK  Unix socket path, used when host is empty
    TBOT_REDIS_PASSWORD         Redis password (default: none)
    TBOT_LOGLEVEL               Log level (default: INFO)
    RUST_LOG                    Extra log filter directives
"#
    );
}

fn run() -> Result<RelaySummary, RelayError> {
    let config = DeliveryConfig::from_env()?;
    let mut action = DeliveryAction::new(config, &RedisConnector::new(), WebhookAlert::default());

    let stdin = io::stdin();
    relay(stdin.lock(), &mut action)
}

fn main() -> ExitCode {
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                return ExitCode::SUCCESS;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_help();
                return ExitCode::FAILURE;
            }
        }
    }

    init_logging();

    match run() {
        Ok(summary) => {
            info!("Input closed: {}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
