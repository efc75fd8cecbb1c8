//! In-memory port doubles for use case tests. Test-only module.

use crate::domain::{DomainError, NewReport, Report};
use crate::ports::{ReportNotifier, ReportStore};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::Mutex;

/// In-memory `ReportStore`. Mirrors the SQLite adapter's semantics:
/// monotonically increasing ids, newest-first ordering, `LIKE`-style
/// case-insensitive substring match for chat titles.
pub struct MemoryStore {
    reports: Mutex<Vec<Report>>,
    next_id: AtomicI64,
    fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            reports: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            fail: false,
        }
    }

    /// A store whose every operation fails with `DomainError::Repo`.
    pub fn failing() -> Self {
        Self {
            reports: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            fail: true,
        }
    }

    /// Seed helper for tests; panics on the failing variant.
    pub async fn push(&self, new: NewReport) -> Report {
        self.insert(new).await.expect("seed insert")
    }

    pub async fn all(&self) -> Vec<Report> {
        self.reports.lock().await.clone()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            Err(DomainError::Repo("memory store set to fail".to_string()))
        } else {
            Ok(())
        }
    }

    fn sorted_desc(mut reports: Vec<Report>) -> Vec<Report> {
        reports.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        reports
    }
}

#[async_trait::async_trait]
impl ReportStore for MemoryStore {
    async fn insert(&self, new: NewReport) -> Result<Report, DomainError> {
        self.check()?;
        let report = Report {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            created_at: new.created_at.unwrap_or_else(Utc::now),
            user_id: new.user_id,
            username: new.username,
            chat_title: new.chat_title,
            chat_id: new.chat_id,
            atm_id: new.atm_id,
            message_id: new.message_id,
        };
        self.reports.lock().await.push(report.clone());
        Ok(report)
    }

    async fn list_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<Report>, DomainError> {
        self.check()?;
        let reports = self.reports.lock().await;
        Ok(Self::sorted_desc(
            reports
                .iter()
                .filter(|r| r.created_at >= cutoff)
                .cloned()
                .collect(),
        ))
    }

    async fn list_by_atm(&self, atm_id: &str) -> Result<Vec<Report>, DomainError> {
        self.check()?;
        let reports = self.reports.lock().await;
        Ok(Self::sorted_desc(
            reports.iter().filter(|r| r.atm_id == atm_id).cloned().collect(),
        ))
    }

    async fn list_by_chat(&self, pattern: &str) -> Result<Vec<Report>, DomainError> {
        self.check()?;
        let needle = pattern.trim_matches('%').to_lowercase();
        let reports = self.reports.lock().await;
        Ok(Self::sorted_desc(
            reports
                .iter()
                .filter(|r| r.chat_title.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        ))
    }

    async fn list_all(&self) -> Result<Vec<Report>, DomainError> {
        self.check()?;
        Ok(Self::sorted_desc(self.reports.lock().await.clone()))
    }
}

/// Notifier double that records every alert, optionally failing each call.
pub struct RecordingNotifier {
    sent: Mutex<Vec<Report>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub async fn sent(&self) -> Vec<Report> {
        self.sent.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl ReportNotifier for RecordingNotifier {
    async fn notify_new_report(&self, report: &Report) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::Notify("recipient blocked the bot".to_string()));
        }
        self.sent.lock().await.push(report.clone());
        Ok(())
    }
}
