// Homework Bot Infrastructure - HTTP Adapters
// Implements: HomeworkApi (Practicum review API), Messenger (Telegram Bot API)

pub mod practicum_client;
pub mod telegram_messenger;

pub use practicum_client::PracticumClient;
pub use telegram_messenger::TelegramMessenger;
