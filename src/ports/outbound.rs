//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, NewReport, Report};
use chrono::{DateTime, Utc};

/// Report persistence. Append-mostly table of ATM reports.
///
/// All list operations return newest-first (created_at descending, id as
/// tiebreak) and an empty Vec — never an error — when nothing matches.
#[async_trait::async_trait]
pub trait ReportStore: Send + Sync {
    /// Persist a report. The store assigns `id` (serialized by the
    /// persistence engine, no application-level counter) and fills
    /// `created_at` with the insert time when unset. Errors propagate:
    /// losing a report is a correctness issue.
    async fn insert(&self, new: NewReport) -> Result<Report, DomainError>;

    /// Reports with `created_at >= cutoff`. The "today" and "week" views
    /// are two parameterizations of this one query.
    async fn list_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<Report>, DomainError>;

    /// Exact match on `atm_id`.
    async fn list_by_atm(&self, atm_id: &str) -> Result<Vec<Report>, DomainError>;

    /// Case-insensitive substring match on `chat_title`. The caller supplies
    /// the wildcard-wrapped pattern (e.g. `%lobby%`).
    async fn list_by_chat(&self, pattern: &str) -> Result<Vec<Report>, DomainError>;

    /// Every stored report (export path).
    async fn list_all(&self) -> Result<Vec<Report>, DomainError>;
}

/// Admin alerting on new reports. Best-effort by contract: the caller
/// discards the returned error, so a failed delivery never fails the
/// insert path.
#[async_trait::async_trait]
pub trait ReportNotifier: Send + Sync {
    async fn notify_new_report(&self, report: &Report) -> Result<(), DomainError>;
}
