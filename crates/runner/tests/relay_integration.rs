//! Relay loop integration test
//!
//! Drives `relay` with an in-memory input and a connector double.

use std::io::{self, BufRead, Cursor, Read};
use std::sync::{Arc, Mutex};
use tbot_gateway::{DeliveryAction, DeliveryConfig, DeliveryError, TransportError, WebhookAlert};
use tbot_ports::{BusConnection, Connector, Endpoint, TransportResult};
use tbot_runner::{RelayError, RelaySummary, relay};

/// Records (target, payload) pairs; fails every command after `fail_after`
#[derive(Default)]
struct MockConnector {
    sent: Arc<Mutex<Vec<(String, String)>>>,
    fail_after: Option<usize>,
    refuse: bool,
}

struct MockConnection {
    sent: Arc<Mutex<Vec<(String, String)>>>,
    fail_after: Option<usize>,
}

impl MockConnection {
    fn push(&mut self, target: &str, payload: &str) -> TransportResult<usize> {
        let mut sent = self.sent.lock().unwrap();
        if self.fail_after.is_some_and(|n| sent.len() >= n) {
            return Err(TransportError::Command("broken pipe".to_string()));
        }
        sent.push((target.to_string(), payload.to_string()));
        Ok(sent.len())
    }
}

impl BusConnection for MockConnection {
    fn append(&mut self, stream: &str, fields: &[(&str, &str)]) -> TransportResult<String> {
        let n = self.push(stream, fields[0].1)?;
        Ok(format!("0-{}", n))
    }

    fn broadcast(&mut self, channel: &str, message: &str) -> TransportResult<u64> {
        self.push(channel, message)?;
        Ok(1)
    }
}

impl Connector for MockConnector {
    fn connect(
        &self,
        _endpoint: &Endpoint,
        _password: Option<&str>,
    ) -> TransportResult<Box<dyn BusConnection>> {
        if self.refuse {
            return Err(TransportError::Connection("Connection refused".to_string()));
        }
        Ok(Box::new(MockConnection {
            sent: self.sent.clone(),
            fail_after: self.fail_after,
        }))
    }
}

const ALERTS: &str = r#"{"ticker":"AAPL","qty":10}

{"qty":5}
   {"ticker":"MSFT","direction":"strategy.entryshort"}   
garbage
"#;

#[test]
fn test_stream_relay_counts_each_line() {
    let _ = env_logger::try_init();

    let connector = MockConnector::default();
    let mut action =
        DeliveryAction::new(DeliveryConfig::stream("2"), &connector, WebhookAlert::default());

    let summary = relay(Cursor::new(ALERTS), &mut action).unwrap();

    assert_eq!(
        summary,
        RelaySummary {
            appended: 2,
            published: 0,
            skipped: 2,
        }
    );
    assert_eq!(summary.delivered(), 2);

    let sent = connector.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().all(|(target, _)| target == "REDIS_SKEY_2"));
    assert_eq!(sent[0].1, r#"{"ticker":"AAPL","qty":10}"#);
    assert_eq!(
        sent[1].1,
        r#"{"ticker":"MSFT","direction":"strategy.entryshort"}"#
    );
}

#[test]
fn test_pubsub_relay() {
    let connector = MockConnector::default();
    let mut action =
        DeliveryAction::new(DeliveryConfig::pubsub("2"), &connector, WebhookAlert::default());

    let summary = relay(Cursor::new(ALERTS), &mut action).unwrap();

    assert_eq!(summary.published, 2);
    assert_eq!(summary.appended, 0);
    assert_eq!(summary.to_string(), "appended=0 published=2 skipped=2");
    assert!(
        connector
            .sent
            .lock()
            .unwrap()
            .iter()
            .all(|(target, _)| target == "REDIS_CH_2")
    );
}

#[test]
fn test_transport_failure_stops_the_relay() {
    let connector = MockConnector {
        fail_after: Some(1),
        ..Default::default()
    };
    let mut action =
        DeliveryAction::new(DeliveryConfig::stream("1"), &connector, WebhookAlert::default());

    let err = relay(Cursor::new(ALERTS), &mut action).unwrap_err();

    assert!(matches!(
        err,
        RelayError::Delivery(DeliveryError::Transport(TransportError::Command(_)))
    ));
    assert_eq!(connector.sent.lock().unwrap().len(), 1);
}

#[test]
fn test_unreachable_bus_fails_on_first_valid_alert() {
    let connector = MockConnector {
        refuse: true,
        ..Default::default()
    };
    let mut action =
        DeliveryAction::new(DeliveryConfig::stream("1"), &connector, WebhookAlert::default());

    // Invalid lines are still skipped quietly before the first valid one
    let input = "{\"qty\":1}\n{\"ticker\":\"AAPL\"}\n";
    let err = relay(Cursor::new(input), &mut action).unwrap_err();

    assert!(matches!(
        err,
        RelayError::Delivery(DeliveryError::Transport(TransportError::Unavailable))
    ));
}

#[test]
fn test_empty_input() {
    let connector = MockConnector::default();
    let mut action =
        DeliveryAction::new(DeliveryConfig::stream("1"), &connector, WebhookAlert::default());

    let summary = relay(Cursor::new(""), &mut action).unwrap();
    assert_eq!(summary, RelaySummary::default());
}

#[test]
fn test_undecodable_line_is_skipped() {
    let _ = env_logger::try_init();

    let connector = MockConnector::default();
    let mut action =
        DeliveryAction::new(DeliveryConfig::stream("1"), &connector, WebhookAlert::default());

    let input: &[u8] = b"{\"ticker\":\"AAPL\"}\n\xff\xfe garbage\n{\"ticker\":\"MSFT\"}\n";
    let summary = relay(Cursor::new(input), &mut action).unwrap();

    assert_eq!(
        summary,
        RelaySummary {
            appended: 2,
            published: 0,
            skipped: 1,
        }
    );
    let sent = connector.sent.lock().unwrap();
    assert_eq!(sent[0].1, r#"{"ticker":"AAPL"}"#);
    assert_eq!(sent[1].1, r#"{"ticker":"MSFT"}"#);
}

/// Yields one good line, then fails every read
struct FailingInput {
    inner: Cursor<&'static [u8]>,
}

impl Read for FailingInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let amt = {
            let available = self.fill_buf()?;
            let amt = available.len().min(buf.len());
            buf[..amt].copy_from_slice(&available[..amt]);
            amt
        };
        self.consume(amt);
        Ok(amt)
    }
}

impl BufRead for FailingInput {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.inner.position() as usize >= self.inner.get_ref().len() {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"));
        }
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

#[test]
fn test_read_error_stops_the_relay() {
    let connector = MockConnector::default();
    let mut action =
        DeliveryAction::new(DeliveryConfig::stream("1"), &connector, WebhookAlert::default());

    let input = FailingInput {
        inner: Cursor::new(&b"{\"ticker\":\"AAPL\"}\n"[..]),
    };
    let err = relay(input, &mut action).unwrap_err();

    assert!(matches!(err, RelayError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    assert_eq!(connector.sent.lock().unwrap().len(), 1);
}
