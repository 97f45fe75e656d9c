// Port Layer - Interfaces for external collaborators

pub mod homework_api;
pub mod messenger;
pub mod time_provider; // For deterministic testing

// Re-exports
pub use homework_api::{FetchError, HomeworkApi};
pub use messenger::{DeliveryError, Messenger};
pub use time_provider::TimeProvider;
