// Application Layer - Use cases of the poll-detect-notify loop

pub mod extractor;
pub mod notifier;
pub mod poller;
pub mod validator;

// Re-exports
pub use notifier::Notifier;
pub use poller::{
    shutdown_channel, CycleOutcome, Dispatch, PollLoop, PollSettings, ShutdownSender,
    ShutdownToken,
};
