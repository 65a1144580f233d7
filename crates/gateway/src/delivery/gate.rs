use log::debug;
use tbot_core::Record;
use tbot_ports::Action;

/// Validate the action's current event, turning failure into "no record"
///
/// Invalid input never reaches the bus and never fails the relay; the skip
/// is noted at debug level only. A record with no fields carries nothing to
/// deliver and is skipped the same way.
pub fn validate_broker_data(action: &dyn Action) -> Option<Record> {
    match action.validate() {
        Ok(record) if record.is_empty() => {
            debug!("{}: skipping delivery, empty event", action.name());
            None
        }
        Ok(record) => Some(record),
        Err(e) => {
            debug!("{}: skipping delivery, {}", action.name(), e);
            None
        }
    }
}
