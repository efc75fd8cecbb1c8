//! Admin authorization guard, evaluated once per inbound event at the
//! dispatcher boundary. Business logic never re-checks identity.
//!
//! Rejections are explicit per reply channel: a plain text reply for
//! messages, an alert answer for callback queries.

use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Message};

#[derive(Debug, Clone, Copy)]
pub struct AdminGuard {
    admin_id: i64,
}

impl AdminGuard {
    pub fn new(admin_id: i64) -> Self {
        Self { admin_id }
    }

    pub fn permits_user(&self, user_id: i64) -> bool {
        user_id == self.admin_id
    }

    /// Deny a message event with a plain text reply.
    pub async fn reject_message(&self, bot: &Bot, msg: &Message) -> ResponseResult<()> {
        bot.send_message(msg.chat.id, "Access denied.").await?;
        Ok(())
    }

    /// Deny a callback event with an alert answer.
    pub async fn reject_callback(&self, bot: &Bot, q: &CallbackQuery) -> ResponseResult<()> {
        bot.answer_callback_query(q.id.clone())
            .text("Access denied")
            .show_alert(true)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_configured_admin_passes() {
        let guard = AdminGuard::new(777);
        assert!(guard.permits_user(777));
        assert!(!guard.permits_user(778));
        assert!(!guard.permits_user(0));
    }
}
