//! Domain entities. Pure data structures for the core business.
//!
//! No Telegram/IO types here — these are mapped from adapters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder used when the originating chat carries no title.
pub const UNTITLED_CHAT: &str = "Untitled";

/// A persisted ATM report. Immutable once created; the store assigns
/// `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub username: Option<String>,
    pub chat_title: String,
    pub chat_id: i64,
    pub atm_id: String,
    pub message_id: i32,
}

impl Report {
    /// Display label for the author: username, or `ID<user_id>` when absent.
    pub fn author_label(&self) -> String {
        self.username
            .clone()
            .unwrap_or_else(|| format!("ID{}", self.user_id))
    }
}

/// Insert payload for the report store. `created_at` is the message date
/// when known; the store fills in the insert time otherwise.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub created_at: Option<DateTime<Utc>>,
    pub user_id: i64,
    pub username: Option<String>,
    pub chat_title: String,
    pub chat_id: i64,
    pub atm_id: String,
    pub message_id: i32,
}

/// A group message as seen by the intake use case, already stripped of
/// transport types by the Telegram adapter.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub text: String,
    pub user_id: i64,
    pub username: Option<String>,
    pub chat_id: i64,
    pub chat_title: Option<String>,
    pub message_id: i32,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(username: Option<&str>) -> Report {
        Report {
            id: 1,
            created_at: Utc::now(),
            user_id: 42,
            username: username.map(str::to_string),
            chat_title: "Ops".to_string(),
            chat_id: -100,
            atm_id: "123456".to_string(),
            message_id: 7,
        }
    }

    #[test]
    fn author_label_prefers_username() {
        assert_eq!(report(Some("alice")).author_label(), "alice");
    }

    #[test]
    fn author_label_falls_back_to_user_id() {
        assert_eq!(report(None).author_label(), "ID42");
    }
}
