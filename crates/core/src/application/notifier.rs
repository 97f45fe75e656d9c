//! Notifier - best-effort delivery to the configured chat

use crate::port::Messenger;
use std::sync::Arc;
use tracing::{error, info};

/// Wraps the messenger so that delivery failures never propagate
///
/// The poll loop reports its own faults through this same path, so a failed
/// send is logged and swallowed.
pub struct Notifier {
    messenger: Arc<dyn Messenger>,
}

impl Notifier {
    pub fn new(messenger: Arc<dyn Messenger>) -> Self {
        Self { messenger }
    }

    /// Send a message; returns whether it was delivered
    pub async fn notify(&self, message: &str) -> bool {
        match self.messenger.send_message(message).await {
            Ok(()) => {
                info!(message = %message, "Message sent");
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to send message");
                false
            }
        }
    }
}
