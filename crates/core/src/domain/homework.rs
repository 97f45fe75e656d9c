// Homework Domain Model

use super::status::HomeworkStatus;

/// Epoch seconds watermark: "already seen up to here"
pub type Cursor = i64;

/// One submission's review state as reported by the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub homework_name: String,
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    pub fn new(homework_name: impl Into<String>, status: HomeworkStatus) -> Self {
        Self {
            homework_name: homework_name.into(),
            status,
        }
    }
}

/// Message text ready to be delivered to the chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification(String);

impl Notification {
    /// Status change notice for a homework record
    pub fn status_changed(record: &HomeworkRecord) -> Self {
        Self(format!(
            "Изменился статус проверки работы \"{}\". {}",
            record.homework_name,
            record.status.verdict()
        ))
    }

    /// Generic operator-facing failure notice
    pub fn failure(error: &dyn std::fmt::Display) -> Self {
        Self(format!("Сбой в работе программы: {}.", error))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
