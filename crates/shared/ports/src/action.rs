use tbot_core::{Record, ValidationResult};

/// Port for the upstream producer of trading events
///
/// `run` is the base lifecycle hook: it hands the raw event to the action
/// and must be called before `validate` is consulted for that event.
pub trait Action: Send {
    /// Accept a raw event, replacing any previous one
    fn run(&mut self, raw: &str);

    /// Validate the current event into a record
    fn validate(&self) -> ValidationResult<Record>;

    /// Name used in log lines
    fn name(&self) -> &str {
        "Action"
    }
}
