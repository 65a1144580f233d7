//! Webhook alert action
//!
//! Accepts TradingView-style alert bodies (flat JSON objects) and validates
//! them against a set of required fields.

use tbot_core::{Record, ValidationError, ValidationResult};
use tbot_ports::Action;

/// Required fields an alert must carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertSchema {
    required: Vec<String>,
}

impl Default for AlertSchema {
    fn default() -> Self {
        Self::new(["ticker"])
    }
}

impl AlertSchema {
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
        }
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Fails on the first required field the record lacks
    pub fn check(&self, record: &Record) -> ValidationResult<()> {
        match self.required.iter().find(|field| !record.contains(field)) {
            Some(missing) => Err(ValidationError::MissingField(missing.clone())),
            None => Ok(()),
        }
    }
}

/// Upstream action for webhook alerts
#[derive(Debug, Clone, Default)]
pub struct WebhookAlert {
    schema: AlertSchema,
    raw: Option<String>,
}

impl WebhookAlert {
    pub fn new(schema: AlertSchema) -> Self {
        Self { schema, raw: None }
    }

    pub fn schema(&self) -> &AlertSchema {
        &self.schema
    }
}

impl Action for WebhookAlert {
    fn run(&mut self, raw: &str) {
        self.raw = Some(raw.to_string());
    }

    fn validate(&self) -> ValidationResult<Record> {
        let raw = self.raw.as_deref().ok_or(ValidationError::Missing)?;
        let record = Record::parse(raw)?;
        self.schema.check(&record)?;
        Ok(record)
    }

    fn name(&self) -> &str {
        "WebhookAlert"
    }
}
