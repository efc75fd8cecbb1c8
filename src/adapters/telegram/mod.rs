//! Telegram Bot API adapter (teloxide): dispatcher wiring, admin guard,
//! keyboards, list presenter, and the admin notifier.

pub mod auth;
pub mod bot;
pub mod keyboards;
pub mod notifier;
pub mod presenter;

pub use auth::AdminGuard;
pub use bot::{BotContext, run_dispatcher};
pub use notifier::TelegramNotifier;
