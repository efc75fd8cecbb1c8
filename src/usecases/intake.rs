//! Intake use case: group message -> extraction -> persisted report -> alert.
//!
//! Persistence errors propagate (a lost report is a correctness issue);
//! notification errors are discarded here, making the best-effort contract
//! explicit at the call site.

use crate::domain::{DomainError, InboundMessage, NewReport, Report, UNTITLED_CHAT};
use crate::domain::extractor::extract_atm_id;
use crate::ports::{ReportNotifier, ReportStore};
use std::sync::Arc;
use tracing::{info, warn};

pub struct IntakeService {
    store: Arc<dyn ReportStore>,
    notifier: Arc<dyn ReportNotifier>,
    /// Config toggle: alert the admin on each new report.
    notify_on_new_report: bool,
}

impl IntakeService {
    pub fn new(
        store: Arc<dyn ReportStore>,
        notifier: Arc<dyn ReportNotifier>,
        notify_on_new_report: bool,
    ) -> Self {
        Self {
            store,
            notifier,
            notify_on_new_report,
        }
    }

    /// Process one group message. Returns the stored report when the text
    /// contains an ATM identifier, Ok(None) otherwise (no side effects).
    pub async fn process(&self, msg: InboundMessage) -> Result<Option<Report>, DomainError> {
        let Some(atm_id) = extract_atm_id(&msg.text) else {
            return Ok(None);
        };

        let report = self
            .store
            .insert(NewReport {
                created_at: Some(msg.date),
                user_id: msg.user_id,
                username: msg.username,
                chat_title: msg.chat_title.unwrap_or_else(|| UNTITLED_CHAT.to_string()),
                chat_id: msg.chat_id,
                atm_id: atm_id.to_string(),
                message_id: msg.message_id,
            })
            .await?;

        info!(
            report_id = report.id,
            atm_id = %report.atm_id,
            chat_id = report.chat_id,
            "stored new ATM report"
        );

        if self.notify_on_new_report {
            // Fire-and-forget: a missed alert does not imply a missed report.
            if let Err(e) = self.notifier.notify_new_report(&report).await {
                warn!(report_id = report.id, error = %e, "admin alert delivery failed");
            }
        }

        Ok(Some(report))
    }
}
