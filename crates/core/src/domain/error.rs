// Domain Error Types

use thiserror::Error;

/// Structural problems with the review API payload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unexpected response shape: {0}")]
    Shape(String),

    #[error("Response is an empty object")]
    EmptyResponse,

    #[error("Response has no '{0}' key")]
    MissingField(&'static str),

    /// Not a fault: the review API has nothing new since the cursor
    #[error("No homework updates since the last poll")]
    NoPendingWork,
}

impl ValidationError {
    pub fn is_no_pending_work(&self) -> bool {
        matches!(self, ValidationError::NoPendingWork)
    }
}

/// Problems turning a single homework record into a notification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Homework record has no '{0}' field")]
    MissingField(&'static str),

    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),
}
