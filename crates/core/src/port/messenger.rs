// Messenger Port
// "Send text to the configured chat" collaborator

use async_trait::async_trait;
use thiserror::Error;

/// Delivery errors (always swallowed by the Notifier)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Messenger request failed: {0}")]
    Transport(String),

    #[error("Messenger rejected the message with HTTP {status}: {description}")]
    Rejected { status: u16, description: String },

    #[error("Messenger API error: {0}")]
    Api(String),
}

/// Messenger trait
///
/// Implementations:
/// - TelegramMessenger: Telegram Bot API `sendMessage`
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send `text` to the single configured destination
    async fn send_message(&self, text: &str) -> Result<(), DeliveryError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// Mock messenger behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Accept every message
        Deliver,
        /// Fail every message with a transport error
        Fail(String),
    }

    /// Records every delivered message
    pub struct RecordingMessenger {
        behavior: Mutex<MockBehavior>,
        delivered: Mutex<Vec<String>>,
        attempts: Mutex<usize>,
    }

    impl RecordingMessenger {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior: Mutex::new(behavior),
                delivered: Mutex::new(Vec::new()),
                attempts: Mutex::new(0),
            }
        }

        pub fn new_delivering() -> Self {
            Self::new(MockBehavior::Deliver)
        }

        pub fn new_failing(message: impl Into<String>) -> Self {
            Self::new(MockBehavior::Fail(message.into()))
        }

        pub fn set_behavior(&self, behavior: MockBehavior) {
            *self.behavior.lock().unwrap() = behavior;
        }

        pub fn delivered(&self) -> Vec<String> {
            self.delivered.lock().unwrap().clone()
        }

        pub fn attempts(&self) -> usize {
            *self.attempts.lock().unwrap()
        }
    }

    #[async_trait]
    impl Messenger for RecordingMessenger {
        async fn send_message(&self, text: &str) -> Result<(), DeliveryError> {
            *self.attempts.lock().unwrap() += 1;

            let behavior = self.behavior.lock().unwrap().clone();
            match behavior {
                MockBehavior::Deliver => {
                    self.delivered.lock().unwrap().push(text.to_string());
                    Ok(())
                }
                MockBehavior::Fail(msg) => Err(DeliveryError::Transport(msg)),
            }
        }
    }
}
