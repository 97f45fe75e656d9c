// Domain Layer - Homework records, status catalog, notification text

pub mod error;
pub mod homework;
pub mod status;

// Re-exports
pub use error::{ExtractionError, ValidationError};
pub use homework::{Cursor, HomeworkRecord, Notification};
pub use status::HomeworkStatus;
