//! CSV export. Uses the `csv` crate for safe serialization.
//!
//! Encodes the full report table into an in-memory byte buffer that the
//! Telegram adapter uploads as a document. Column order mirrors the admin
//! panel: id, timestamp, author, chat, ATM id, message id.

use crate::domain::{DomainError, Report};

/// File name used for the uploaded document.
pub const EXPORT_FILE_NAME: &str = "atm_reports.csv";

/// Encode reports as a semicolon-delimited CSV byte buffer with a header row.
pub fn reports_to_csv(reports: &[Report]) -> Result<Vec<u8>, DomainError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    wtr.write_record(["ID", "Date/time", "User", "Chat", "ATM ID", "Message ID"])
        .map_err(|e| DomainError::Export(e.to_string()))?;

    for r in reports {
        wtr.write_record([
            r.id.to_string(),
            r.created_at.format("%d.%m.%Y %H:%M").to_string(),
            r.author_label(),
            r.chat_title.clone(),
            r.atm_id.clone(),
            r.message_id.to_string(),
        ])
        .map_err(|e| DomainError::Export(e.to_string()))?;
    }

    wtr.flush().map_err(|e| DomainError::Export(e.to_string()))?;
    wtr.into_inner()
        .map_err(|e| DomainError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn report(id: i64, username: Option<&str>) -> Report {
        Report {
            id,
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap(),
            user_id: 42,
            username: username.map(str::to_string),
            chat_title: "Main Lobby".to_string(),
            chat_id: -1001,
            atm_id: "123456".to_string(),
            message_id: 7,
        }
    }

    #[test]
    fn encodes_header_and_rows() {
        let bytes = reports_to_csv(&[report(1, Some("alice"))]).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("ID;Date/time;User;Chat;ATM ID;Message ID"));
        assert_eq!(lines.next(), Some("1;05.03.2024 14:30;alice;Main Lobby;123456;7"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn applies_username_fallback() {
        let bytes = reports_to_csv(&[report(2, None)]).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains(";ID42;"));
    }

    #[test]
    fn empty_input_yields_header_only() {
        let bytes = reports_to_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(text.lines().count(), 1);
    }
}
