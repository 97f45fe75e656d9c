// Poll Loop - fetch, validate, extract, notify, sleep

mod shutdown;

pub use shutdown::{shutdown_channel, ShutdownSender, ShutdownToken};

use crate::application::notifier::Notifier;
use crate::application::{extractor, validator};
use crate::config::BotConfig;
use crate::domain::{Cursor, Notification};
use crate::error::{AppError, Result};
use crate::port::{HomeworkApi, TimeProvider};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

/// Response key carrying the server-side "now", used as the next cursor
pub const CURRENT_DATE_KEY: &str = "current_date";

/// Timing of the loop between cycles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSettings {
    pub retry_interval: Duration,
    /// Upper bound of the uniform random delay added to each sleep
    pub retry_jitter: Duration,
}

impl From<&BotConfig> for PollSettings {
    fn from(config: &BotConfig) -> Self {
        Self {
            retry_interval: config.retry_interval,
            retry_jitter: config.retry_jitter,
        }
    }
}

/// What happened to a message the loop tried to send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Delivered,
    /// Delivery failed; logged by the notifier
    Failed,
    /// Failure notice identical to the last delivered one, not re-sent
    Duplicate,
}

/// Result of one poll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The most recent homework changed status
    StatusChanged(Dispatch),
    /// The API had nothing new since the cursor
    NoChange,
    /// Fetch, validation or extraction failed; a failure notice was dispatched
    Fault(Dispatch),
}

/// Poll loop owning the cursor
pub struct PollLoop {
    api: Arc<dyn HomeworkApi>,
    notifier: Notifier,
    settings: PollSettings,
    cursor: Cursor,
    /// Last failure notice delivered since the API last answered cleanly
    last_failure: Option<String>,
}

impl PollLoop {
    /// Create the loop with the cursor set to "now"
    pub fn new(
        api: Arc<dyn HomeworkApi>,
        notifier: Notifier,
        time_provider: Arc<dyn TimeProvider>,
        settings: PollSettings,
    ) -> Self {
        Self {
            api,
            notifier,
            settings,
            cursor: time_provider.now_secs(),
            last_failure: None,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Run cycles until shutdown is requested
    pub async fn run(&mut self, mut shutdown: ShutdownToken) {
        info!(cursor = self.cursor, "Poll loop started");
        loop {
            if shutdown.is_shutdown() {
                info!("Poll loop shutting down");
                break;
            }

            self.run_cycle().await;

            let pause = self.next_pause();
            debug!(pause_ms = pause.as_millis() as u64, "Sleeping until next poll");
            tokio::select! {
                _ = sleep(pause) => {},
                _ = shutdown.wait() => {
                    info!("Poll loop interrupted during sleep");
                    break;
                }
            }
        }
        info!(cursor = self.cursor, "Poll loop stopped");
    }

    /// Run a single poll cycle without sleeping
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll().await {
            Ok(Some(notification)) => {
                self.last_failure = None;
                CycleOutcome::StatusChanged(self.send(notification).await)
            }
            Ok(None) => {
                self.last_failure = None;
                CycleOutcome::NoChange
            }
            Err(e) => {
                error!(kind = e.kind(), error = %e, cursor = self.cursor, "Poll cycle failed");
                CycleOutcome::Fault(self.report_failure(Notification::failure(&e)).await)
            }
        }
    }

    async fn poll(&mut self) -> Result<Option<Notification>> {
        debug!(cursor = self.cursor, "Polling review API");
        let response = self.api.fetch(self.cursor).await?;

        let homeworks = match validator::validate(&response) {
            Ok(homeworks) => homeworks,
            Err(e) if e.is_no_pending_work() => {
                debug!("No homework status changes");
                self.advance_cursor(&response);
                return Ok(None);
            }
            Err(e) => return Err(AppError::from(e)),
        };

        if homeworks.len() > 1 {
            debug!(
                ignored = homeworks.len() - 1,
                "Only the most recent homework is reported"
            );
        }

        let notification = extractor::extract(&homeworks[0])?;
        self.advance_cursor(&response);
        Ok(Some(notification))
    }

    fn advance_cursor(&mut self, response: &serde_json::Value) {
        match response.get(CURRENT_DATE_KEY).and_then(serde_json::Value::as_i64) {
            Some(next) => {
                debug!(from = self.cursor, to = next, "Cursor advanced");
                self.cursor = next;
            }
            None => {
                warn!(
                    cursor = self.cursor,
                    "Response has no integer '{}', keeping cursor", CURRENT_DATE_KEY
                );
            }
        }
    }

    async fn send(&self, notification: Notification) -> Dispatch {
        if self.notifier.notify(notification.as_str()).await {
            Dispatch::Delivered
        } else {
            Dispatch::Failed
        }
    }

    // A fault repeating every cycle is reported once until the API recovers
    async fn report_failure(&mut self, notice: Notification) -> Dispatch {
        if self.last_failure.as_deref() == Some(notice.as_str()) {
            debug!(message = %notice, "Failure already reported, not re-sending");
            return Dispatch::Duplicate;
        }

        let text = notice.as_str().to_string();
        let dispatch = self.send(notice).await;
        if dispatch == Dispatch::Delivered {
            self.last_failure = Some(text);
        }
        dispatch
    }

    fn next_pause(&self) -> Duration {
        let jitter_ms = u64::try_from(self.settings.retry_jitter.as_millis()).unwrap_or(u64::MAX);
        if jitter_ms == 0 {
            return self.settings.retry_interval;
        }
        let extra = rand::thread_rng().gen_range(0..=jitter_ms);
        self.settings
            .retry_interval
            .saturating_add(Duration::from_millis(extra))
    }
}
