// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Fetch(#[from] crate::port::FetchError),

    #[error("{0}")]
    Validation(#[from] crate::domain::ValidationError),

    #[error("{0}")]
    Extraction(#[from] crate::domain::ExtractionError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Short label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Fetch(e) => e.kind(),
            AppError::Validation(_) => "validation",
            AppError::Extraction(_) => "extraction",
            AppError::Config(_) => "config",
        }
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
