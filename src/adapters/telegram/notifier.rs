//! Admin alert notifier. Sends one HTML message per new report to the
//! configured administrator.
//!
//! The port contract is best-effort: the intake caller discards the error,
//! so a blocked bot or transient network failure never loses a report.

use crate::domain::{DomainError, Report};
use crate::ports::ReportNotifier;
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode};
use teloxide::utils::html::escape;

pub struct TelegramNotifier {
    bot: Bot,
    admin: ChatId,
}

impl TelegramNotifier {
    pub fn new(bot: Bot, admin: ChatId) -> Self {
        Self { bot, admin }
    }
}

fn alert_text(report: &Report) -> String {
    format!(
        "🆕 New ATM report\nATM: <code>{}</code>\nChat: <b>{}</b>\nAuthor: {}\n⏰ {}",
        report.atm_id,
        escape(&report.chat_title),
        escape(&report.author_label()),
        report.created_at.format("%H:%M %d.%m"),
    )
}

#[async_trait::async_trait]
impl ReportNotifier for TelegramNotifier {
    async fn notify_new_report(&self, report: &Report) -> Result<(), DomainError> {
        self.bot
            .send_message(self.admin, alert_text(report))
            .parse_mode(ParseMode::Html)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::Notify(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn alert_mentions_atm_chat_author_and_time() {
        let report = Report {
            id: 1,
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap(),
            user_id: 42,
            username: None,
            chat_title: "Main Lobby".to_string(),
            chat_id: -1001,
            atm_id: "123456".to_string(),
            message_id: 7,
        };

        let text = alert_text(&report);

        assert!(text.contains("<code>123456</code>"));
        assert!(text.contains("<b>Main Lobby</b>"));
        assert!(text.contains("ID42"));
        assert!(text.contains("14:30 05.03"));
    }
}
