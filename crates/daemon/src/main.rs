//! Homework Bot - Main Entry Point
//! Polls the review API and reports homework status changes to Telegram

mod logging;

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use homework_bot_core::application::{shutdown_channel, Notifier, PollLoop, PollSettings};
use homework_bot_core::port::time_provider::SystemTimeProvider;
use homework_bot_core::BotConfig;
use homework_bot_infra_http::{PracticumClient, TelegramMessenger};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<()> {
    // 0. Pick up credentials from .env (real environment wins)
    let env_file = dotenvy::dotenv();

    // 1. Initialize logging
    let _log_guard = logging::init_logging()?;

    info!("Homework bot v{} starting...", VERSION);
    match env_file {
        Ok(path) => info!(path = %path.display(), "Loaded environment file"),
        Err(e) if e.not_found() => debug!("No .env file, using process environment only"),
        Err(e) => warn!(error = %e, "Ignoring unreadable .env file"),
    }

    // 2. Load configuration (startup precondition: all credentials present)
    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Cannot start without configuration");
            return Err(e.into());
        }
    };
    info!(config = ?config, "Configuration loaded");

    // 3. Setup dependencies (DI wiring)
    let time_provider = Arc::new(SystemTimeProvider);
    let api = Arc::new(PracticumClient::new(&config).context("Review API client creation failed")?);
    let messenger =
        Arc::new(TelegramMessenger::new(&config).context("Telegram client creation failed")?);

    let mut poll_loop = PollLoop::new(
        api,
        Notifier::new(messenger),
        time_provider,
        PollSettings::from(&config),
    );

    // 4. Start poll loop
    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let loop_handle = tokio::spawn(async move {
        poll_loop.run(shutdown_rx).await;
    });

    info!("Press Ctrl+C to shutdown");

    // 5. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 6. Graceful shutdown
    shutdown_tx.shutdown();
    let _ = tokio::time::timeout(SHUTDOWN_TIMEOUT, loop_handle).await;

    info!("Shutdown complete.");

    Ok(())
}
