//! Response Validator - structural contract of the review API payload

use crate::domain::ValidationError;
use serde_json::Value;
use tracing::{debug, error};

/// Key holding the list of homework records
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Check the payload shape and return the homework records, most recent first
///
/// Checks run in order: object, non-empty, has `homeworks`, `homeworks` is
/// an array, array is non-empty. An empty array yields
/// `ValidationError::NoPendingWork`, which callers treat as "nothing new".
pub fn validate(payload: &Value) -> Result<&[Value], ValidationError> {
    let object = match payload.as_object() {
        Some(object) => object,
        None => {
            let err = ValidationError::Shape(format!(
                "expected an object, got {}",
                json_type_name(payload)
            ));
            error!(error = %err, "Invalid review API response");
            return Err(err);
        }
    };

    if object.is_empty() {
        let err = ValidationError::EmptyResponse;
        error!(error = %err, "Invalid review API response");
        return Err(err);
    }

    let homeworks = match object.get(HOMEWORKS_KEY) {
        Some(homeworks) => homeworks,
        None => {
            let err = ValidationError::MissingField(HOMEWORKS_KEY);
            error!(error = %err, "Invalid review API response");
            return Err(err);
        }
    };

    let records = match homeworks.as_array() {
        Some(records) => records,
        None => {
            let err = ValidationError::Shape(format!(
                "'{}' must be an array, got {}",
                HOMEWORKS_KEY,
                json_type_name(homeworks)
            ));
            error!(error = %err, "Invalid review API response");
            return Err(err);
        }
    };

    if records.is_empty() {
        debug!("Review API reports no homework updates");
        return Err(ValidationError::NoPendingWork);
    }

    Ok(records.as_slice())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
