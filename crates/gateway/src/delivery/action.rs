use super::gate::validate_broker_data;
use super::{ChannelPublisher, Delivery, StreamPublisher};
use crate::error::DeliveryError;
use crate::transport::config::{DeliveryConfig, DeliveryMode};
use log::{error, info};
use tbot_ports::{Action, BusConnection, Connector, TransportError};

/// Publish route, chosen once at construction
#[derive(Debug)]
enum Route {
    Stream(StreamPublisher),
    PubSub(ChannelPublisher),
}

/// Validation-gated delivery of upstream events to the message bus
///
/// The mode is fixed by `DeliveryConfig::mode` when the action is built and
/// cannot change afterwards; switching modes means building a new action.
///
/// The bus connection is opened once in `new`. A failed connect is logged
/// and leaves the action without a connection: it stays usable, but every
/// delivery of a valid record then fails with `TransportError::Unavailable`.
/// `run` takes `&mut self`, so concurrent callers must serialize access.
pub struct DeliveryAction<A: Action> {
    config: DeliveryConfig,
    route: Route,
    connection: Option<Box<dyn BusConnection>>,
    action: A,
}

impl<A: Action> DeliveryAction<A> {
    pub fn new(config: DeliveryConfig, connector: &dyn Connector, action: A) -> Self {
        let route = match config.mode {
            DeliveryMode::Stream => Route::Stream(StreamPublisher::from_config(&config)),
            DeliveryMode::PubSub => Route::PubSub(ChannelPublisher::from_config(&config)),
        };

        let endpoint = config.endpoint();
        let connection = match connector.connect(&endpoint, config.password()) {
            Ok(conn) => {
                info!(
                    "{} delivery for client {} connected to {}",
                    config.mode, config.client_id, endpoint
                );
                Some(conn)
            }
            Err(e) => {
                error!("{}: {}", endpoint, e);
                None
            }
        };

        Self {
            config,
            route,
            connection,
            action,
        }
    }

    pub fn mode(&self) -> DeliveryMode {
        self.config.mode
    }

    pub fn config(&self) -> &DeliveryConfig {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// The upstream action
    pub fn action(&self) -> &A {
        &self.action
    }

    /// Hand a raw event to the upstream action, then deliver it
    ///
    /// Returns `Delivery::Skipped` when the event fails validation. Transport
    /// failures are returned to the caller untouched.
    pub fn run(&mut self, raw: &str) -> Result<Delivery, DeliveryError> {
        self.action.run(raw);
        match self.route {
            Route::Stream(_) => self.run_stream(),
            Route::PubSub(_) => self.run_pubsub(),
        }
    }

    /// Append the current event to the stream
    pub fn run_stream(&mut self) -> Result<Delivery, DeliveryError> {
        let Route::Stream(publisher) = &self.route else {
            return Err(DeliveryError::InvalidMode);
        };
        let Some(record) = validate_broker_data(&self.action) else {
            return Ok(Delivery::Skipped);
        };

        let conn = self
            .connection
            .as_deref_mut()
            .ok_or(TransportError::Unavailable)?;
        Ok(publisher.publish(conn, record)?)
    }

    /// Broadcast the current event on the channel
    pub fn run_pubsub(&mut self) -> Result<Delivery, DeliveryError> {
        let Route::PubSub(publisher) = &self.route else {
            return Err(DeliveryError::InvalidMode);
        };
        let Some(record) = validate_broker_data(&self.action) else {
            return Ok(Delivery::Skipped);
        };

        let conn = self
            .connection
            .as_deref_mut()
            .ok_or(TransportError::Unavailable)?;
        Ok(publisher.publish(conn, record)?)
    }
}
