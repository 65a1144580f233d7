use crate::error::{ValidationError, ValidationResult};
use serde::Serialize;
use serde_json::{Map, Value};

/// Validated event payload
///
/// A flat mapping from field names to scalar JSON values (string, number,
/// bool or null). Field order follows the incoming event, so the serialized
/// payload mirrors what the producer sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Build a record from a JSON value, refusing non-objects and nested fields
    pub fn from_value(value: Value) -> ValidationResult<Self> {
        let Value::Object(fields) = value else {
            return Err(ValidationError::NotAnObject);
        };

        if let Some((name, _)) = fields
            .iter()
            .find(|(_, v)| matches!(v, Value::Array(_) | Value::Object(_)))
        {
            return Err(ValidationError::NestedValue(name.clone()));
        }

        Ok(Self(fields))
    }

    /// Parse a raw JSON document into a record
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| ValidationError::Malformed(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over fields in payload order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize to the JSON text placed on the wire
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }
}

impl TryFrom<Value> for Record {
    type Error = ValidationError;

    fn try_from(value: Value) -> ValidationResult<Self> {
        Self::from_value(value)
    }
}
