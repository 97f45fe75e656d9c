//! Status Extractor - one homework record into a notification

use crate::domain::{ExtractionError, HomeworkRecord, HomeworkStatus, Notification};
use serde_json::Value;
use tracing::error;

/// Decode a raw homework record
pub fn parse_record(record: &Value) -> Result<HomeworkRecord, ExtractionError> {
    let homework_name = string_field(record, "homework_name")?;
    let code = string_field(record, "status")?;

    let status = HomeworkStatus::from_code(code).ok_or_else(|| {
        let err = ExtractionError::UnknownStatus(code.to_string());
        error!(error = %err, homework = %homework_name, "Cannot build notification");
        err
    })?;

    Ok(HomeworkRecord::new(homework_name, status))
}

/// Build the status change notification for a raw homework record
pub fn extract(record: &Value) -> Result<Notification, ExtractionError> {
    parse_record(record).map(|record| Notification::status_changed(&record))
}

fn string_field<'a>(record: &'a Value, name: &'static str) -> Result<&'a str, ExtractionError> {
    record.get(name).and_then(Value::as_str).ok_or_else(|| {
        let err = ExtractionError::MissingField(name);
        error!(error = %err, "Cannot build notification");
        err
    })
}
