//! Inline keyboard layout for the admin panel.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

pub const CB_TODAY: &str = "reports:today";
pub const CB_WEEK: &str = "reports:week";
pub const CB_BY_ATM: &str = "reports:by_atm";
pub const CB_BY_CHAT: &str = "reports:by_chat";
pub const CB_EXPORT: &str = "export:csv";

/// Main menu: 2 + 2 + 1 button rows.
pub fn main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            InlineKeyboardButton::callback("Today", CB_TODAY),
            InlineKeyboardButton::callback("Week", CB_WEEK),
        ],
        vec![
            InlineKeyboardButton::callback("By ATM number", CB_BY_ATM),
            InlineKeyboardButton::callback("By chat", CB_BY_CHAT),
        ],
        vec![InlineKeyboardButton::callback("Export CSV", CB_EXPORT)],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_carries_all_panel_actions() {
        let menu = main_menu();
        let data: Vec<_> = menu
            .inline_keyboard
            .iter()
            .flatten()
            .filter_map(|b| match &b.kind {
                teloxide::types::InlineKeyboardButtonKind::CallbackData(d) => Some(d.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(data, vec![CB_TODAY, CB_WEEK, CB_BY_ATM, CB_BY_CHAT, CB_EXPORT]);
    }
}
