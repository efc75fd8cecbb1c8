//! Report list presenter. One formatter for every query path,
//! parameterized only by title and result set.

use crate::domain::Report;
use crate::usecases::ListTitle;
use std::fmt::Write;
use teloxide::utils::html::escape;

/// At most this many detail entries per reply; the rest is summarized with
/// a pointer to the CSV export.
const MAX_ENTRIES: usize = 20;

fn heading(title: &ListTitle) -> String {
    match title {
        ListTitle::Today => "📊 Reports for today".to_string(),
        ListTitle::Week => "📊 Reports for the last 7 days".to_string(),
        ListTitle::ByAtm(atm_id) => format!("📊 Reports for ATM <code>{}</code>", escape(atm_id)),
        ListTitle::ByChat(chat) => format!("📊 Reports for chat: {}", escape(chat)),
    }
}

/// Render a result set as one HTML text block under its title.
pub fn render_report_list(title: &ListTitle, reports: &[Report]) -> String {
    let heading = heading(title);
    if reports.is_empty() {
        return format!("{heading}\n\n❌ No data.");
    }

    let mut text = format!("{heading}\n\n");
    for r in reports.iter().take(MAX_ENTRIES) {
        // write! into a String cannot fail
        let _ = write!(
            text,
            "⏰ {}\n👤 {}\n💬 <b>{}</b>\n🏧 <code>{}</code>\n🆔 Msg: {}\n\n",
            r.created_at.format("%H:%M %d.%m"),
            escape(&r.author_label()),
            escape(&r.chat_title),
            r.atm_id,
            r.message_id,
        );
    }
    if reports.len() > MAX_ENTRIES {
        let _ = write!(
            text,
            "... and {} more reports. Use CSV export for the full list.",
            reports.len() - MAX_ENTRIES
        );
    }
    text
}
