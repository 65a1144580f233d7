use thiserror::Error;

/// Reasons an incoming event is refused before delivery
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No event received")]
    Missing,

    #[error("Malformed event: {0}")]
    Malformed(String),

    #[error("Event is not a JSON object")]
    NotAnObject,

    #[error("Field '{0}' holds a nested value")]
    NestedValue(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
