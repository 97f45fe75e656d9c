// Homework Bot Core - Poll/validate/extract/notify logic & ports
// NO HTTP client, NO logging backend (hexagonal layout)

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

pub use config::{BotConfig, ConfigError};
pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
