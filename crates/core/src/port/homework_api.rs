// Homework Review API Port
// Abstraction over the remote "homework statuses" endpoint

use async_trait::async_trait;
use thiserror::Error;

/// Fetch-phase errors (all retryable by the poll loop)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request to the review API failed: {0}")]
    Transport(String),

    #[error("Review API answered with HTTP {status}")]
    RemoteStatus { status: u16 },

    #[error("Review API body is not valid JSON: {0}")]
    Decode(String),
}

impl FetchError {
    /// Short label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::RemoteStatus { .. } => "remote_status",
            FetchError::Decode(_) => "decode",
        }
    }
}

/// Homework API trait
///
/// Implementations:
/// - PracticumClient: HTTP client for the Practicum review API
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetch homework updates newer than `from_date` (epoch seconds)
    ///
    /// Returns the decoded JSON body as-is; shape checks belong to the validator.
    ///
    /// # Errors
    /// - FetchError::Transport if the request could not be completed
    /// - FetchError::RemoteStatus if the status code is not 200
    /// - FetchError::Decode if the body is not JSON
    async fn fetch(&self, from_date: i64) -> Result<serde_json::Value, FetchError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays scripted responses in order, then reports "nothing new"
    pub struct MockHomeworkApi {
        responses: Mutex<VecDeque<Result<serde_json::Value, FetchError>>>,
        requested: Mutex<Vec<i64>>,
    }

    impl MockHomeworkApi {
        pub fn new(responses: Vec<Result<serde_json::Value, FetchError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                requested: Mutex::new(Vec::new()),
            }
        }

        pub fn push(&self, response: Result<serde_json::Value, FetchError>) {
            self.responses.lock().unwrap().push_back(response);
        }

        /// `from_date` values passed to each fetch, in call order
        pub fn requested_cursors(&self) -> Vec<i64> {
            self.requested.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.requested.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl HomeworkApi for MockHomeworkApi {
        async fn fetch(&self, from_date: i64) -> Result<serde_json::Value, FetchError> {
            self.requested.lock().unwrap().push(from_date);

            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(serde_json::json!({ "homeworks": [] })))
        }
    }
}
