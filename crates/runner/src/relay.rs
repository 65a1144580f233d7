//! Line-oriented relay loop

use crate::error::RelayError;
use log::debug;
use std::fmt;
use std::io::BufRead;
use tbot_gateway::{Delivery, DeliveryAction};
use tbot_ports::Action;

/// Counts of what happened to each input line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelaySummary {
    pub appended: u64,
    pub published: u64,
    pub skipped: u64,
}

impl RelaySummary {
    fn record(&mut self, delivery: &Delivery) {
        match delivery {
            Delivery::Appended { .. } => self.appended += 1,
            Delivery::Published { .. } => self.published += 1,
            Delivery::Skipped => self.skipped += 1,
        }
    }

    pub fn delivered(&self) -> u64 {
        self.appended + self.published
    }
}

impl fmt::Display for RelaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "appended={} published={} skipped={}",
            self.appended, self.published, self.skipped
        )
    }
}

/// Feed every non-blank line of `input` through the delivery action
///
/// A line that is not valid UTF-8 is counted as skipped. Stops at the first
/// transport or read error.
pub fn relay<R, A>(mut input: R, action: &mut DeliveryAction<A>) -> Result<RelaySummary, RelayError>
where
    R: BufRead,
    A: Action,
{
    let mut summary = RelaySummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                debug!("skipping undecodable input line, {}", e);
                summary.record(&Delivery::Skipped);
                continue;
            }
        };
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }

        let delivery = action.run(raw)?;
        summary.record(&delivery);
    }

    Ok(summary)
}
