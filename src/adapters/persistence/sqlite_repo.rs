//! SQLite-backed report store via libsql.
//!
//! One append-mostly `reports` table; id assignment rides on SQLite's
//! AUTOINCREMENT, so concurrent inserts never collide without any
//! application-level counter. All queries return newest-first.

use crate::domain::{DomainError, NewReport, Report};
use crate::ports::ReportStore;
use chrono::{DateTime, Utc};
use libsql::{Database, params};
use std::path::Path;
use tracing::info;

const REPORTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS reports (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    created_at INTEGER NOT NULL,
    user_id INTEGER NOT NULL,
    username TEXT,
    chat_title TEXT NOT NULL,
    chat_id INTEGER NOT NULL,
    atm_id TEXT NOT NULL,
    message_id INTEGER NOT NULL
)"#;
const CREATED_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reports_created_at ON reports (created_at DESC)";
const ATM_ID_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_reports_atm_id ON reports (atm_id)";

const REPORT_COLUMNS: &str =
    "id, created_at, user_id, username, chat_title, chat_id, atm_id, message_id";

/// SQLite report store. One database file (reports.db) in the given base
/// directory; safe to share via Arc.
pub struct SqliteReportStore {
    db: Database,
}

impl SqliteReportStore {
    /// Connect to (or create) the database and ensure the schema exists.
    ///
    /// WAL mode allows concurrent readers with one writer; busy_timeout
    /// makes competing insert transactions queue instead of erroring.
    pub async fn connect(base_dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let base = base_dir.as_ref();
        std::fs::create_dir_all(base).map_err(|e| DomainError::Repo(e.to_string()))?;
        let db_path = base.join("reports.db");
        let path_str = db_path.to_string_lossy();
        let db = libsql::Builder::new_local(path_str.as_ref())
            .build()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let conn = db.connect().map_err(|e| DomainError::Repo(e.to_string()))?;

        // PRAGMAs return a row; use query and drain (execute fails when rows
        // are returned).
        for pragma in [
            "PRAGMA journal_mode=WAL",
            "PRAGMA synchronous=NORMAL",
            "PRAGMA busy_timeout=5000",
        ] {
            let mut rows = conn
                .query(pragma, ())
                .await
                .map_err(|e| DomainError::Repo(format!("{pragma} failed: {e}")))?;
            while rows
                .next()
                .await
                .map_err(|e| DomainError::Repo(e.to_string()))?
                .is_some()
            {}
        }

        conn.execute(REPORTS_TABLE, ())
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        conn.execute(CREATED_AT_INDEX, ())
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        conn.execute(ATM_ID_INDEX, ())
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;

        info!(path = %db_path.display(), "report store connected (WAL mode)");

        Ok(Self { db })
    }

    fn row_to_report(row: &libsql::Row) -> Result<Report, DomainError> {
        let id: i64 = row.get(0).map_err(|e| DomainError::Repo(e.to_string()))?;
        let ts: i64 = row.get(1).map_err(|e| DomainError::Repo(e.to_string()))?;
        let user_id: i64 = row.get(2).map_err(|e| DomainError::Repo(e.to_string()))?;
        let username: Option<String> = row.get(3).ok();
        let chat_title: String = row.get(4).map_err(|e| DomainError::Repo(e.to_string()))?;
        let chat_id: i64 = row.get(5).map_err(|e| DomainError::Repo(e.to_string()))?;
        let atm_id: String = row.get(6).map_err(|e| DomainError::Repo(e.to_string()))?;
        let message_id: i32 = row.get(7).map_err(|e| DomainError::Repo(e.to_string()))?;
        let created_at = DateTime::<Utc>::from_timestamp(ts, 0)
            .ok_or_else(|| DomainError::Repo(format!("invalid timestamp {ts} in row {id}")))?;
        Ok(Report {
            id,
            created_at,
            user_id,
            username,
            chat_title,
            chat_id,
            atm_id,
            message_id,
        })
    }

    async fn query_reports(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Vec<Report>, DomainError> {
        let conn = self
            .db
            .connect()
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let mut rows = conn
            .query(sql, params)
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let mut reports = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?
        {
            reports.push(Self::row_to_report(&row)?);
        }
        Ok(reports)
    }
}

#[async_trait::async_trait]
impl ReportStore for SqliteReportStore {
    async fn insert(&self, new: NewReport) -> Result<Report, DomainError> {
        let conn = self
            .db
            .connect()
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        // Second precision matches the stored column.
        let ts = new.created_at.unwrap_or_else(Utc::now).timestamp();
        let created_at = DateTime::<Utc>::from_timestamp(ts, 0)
            .ok_or_else(|| DomainError::Repo(format!("invalid timestamp {ts}")))?;
        conn.execute(
            r#"
            INSERT INTO reports (created_at, user_id, username, chat_title, chat_id, atm_id, message_id)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                ts,
                new.user_id,
                new.username.clone(),
                new.chat_title.as_str(),
                new.chat_id,
                new.atm_id.as_str(),
                new.message_id
            ],
        )
        .await
        .map_err(|e| DomainError::Repo(e.to_string()))?;
        let id = conn.last_insert_rowid();

        Ok(Report {
            id,
            created_at,
            user_id: new.user_id,
            username: new.username,
            chat_title: new.chat_title,
            chat_id: new.chat_id,
            atm_id: new.atm_id,
            message_id: new.message_id,
        })
    }

    async fn list_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<Report>, DomainError> {
        self.query_reports(
            &format!(
                "SELECT {REPORT_COLUMNS} FROM reports WHERE created_at >= ?1 \
                 ORDER BY created_at DESC, id DESC"
            ),
            params![cutoff.timestamp()],
        )
        .await
    }

    async fn list_by_atm(&self, atm_id: &str) -> Result<Vec<Report>, DomainError> {
        self.query_reports(
            &format!(
                "SELECT {REPORT_COLUMNS} FROM reports WHERE atm_id = ?1 \
                 ORDER BY created_at DESC, id DESC"
            ),
            params![atm_id],
        )
        .await
    }

    async fn list_by_chat(&self, pattern: &str) -> Result<Vec<Report>, DomainError> {
        // SQLite LIKE is case-insensitive for ASCII; the caller supplies the
        // %-wrapped pattern.
        self.query_reports(
            &format!(
                "SELECT {REPORT_COLUMNS} FROM reports WHERE chat_title LIKE ?1 \
                 ORDER BY created_at DESC, id DESC"
            ),
            params![pattern],
        )
        .await
    }

    async fn list_all(&self) -> Result<Vec<Report>, DomainError> {
        self.query_reports(
            &format!("SELECT {REPORT_COLUMNS} FROM reports ORDER BY created_at DESC, id DESC"),
            (),
        )
        .await
    }
}
