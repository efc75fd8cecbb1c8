//! Admin panel use case: query selection and the two-state filter dialogue.
//!
//! Returns data plus a title marker; rendering belongs to the Telegram
//! adapter's presenter. "Today" and "week" are the same `list_since` query
//! with different cutoffs.

use crate::domain::{DomainError, Report};
use crate::domain::extractor::is_atm_id;
use crate::ports::ReportStore;
use crate::usecases::dialogue::{DialogueState, DialogueStore};
use chrono::{Duration, Utc};
use std::sync::Arc;

/// Which query produced a result set. The presenter turns this into a
/// heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListTitle {
    Today,
    Week,
    ByAtm(String),
    ByChat(String),
}

/// Outcome of feeding one admin text message into the filter dialogue.
#[derive(Debug)]
pub enum FilterOutcome {
    /// A pending filter consumed the input and ran its query.
    Results {
        title: ListTitle,
        reports: Vec<Report>,
    },
    /// ATM filter input failed the whole-string 6-digit check.
    InvalidAtm,
    /// No filter was pending; the input is not ours to handle.
    Idle,
}

pub struct AdminPanel {
    store: Arc<dyn ReportStore>,
    dialogue: DialogueStore,
}

impl AdminPanel {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self {
            store,
            dialogue: DialogueStore::new(),
        }
    }

    /// Reports from the last 24 hours.
    pub async fn select_today(&self) -> Result<(ListTitle, Vec<Report>), DomainError> {
        let reports = self.store.list_since(Utc::now() - Duration::hours(24)).await?;
        Ok((ListTitle::Today, reports))
    }

    /// Reports from the last 7 days.
    pub async fn select_week(&self) -> Result<(ListTitle, Vec<Report>), DomainError> {
        let reports = self.store.list_since(Utc::now() - Duration::days(7)).await?;
        Ok((ListTitle::Week, reports))
    }

    /// Arm the dialogue: the next text message is an ATM id filter.
    pub async fn begin_atm_filter(&self, session: i64) {
        self.dialogue.set(session, DialogueState::AwaitingAtmFilter).await;
    }

    /// Arm the dialogue: the next text message is a chat-title filter.
    pub async fn begin_chat_filter(&self, session: i64) {
        self.dialogue.set(session, DialogueState::AwaitingChatFilter).await;
    }

    /// Feed one admin text message into the dialogue. The pending state is
    /// consumed unconditionally — valid or not, the dialogue is idle
    /// afterwards.
    pub async fn submit_text(
        &self,
        session: i64,
        text: &str,
    ) -> Result<FilterOutcome, DomainError> {
        match self.dialogue.take(session).await {
            DialogueState::Idle => Ok(FilterOutcome::Idle),
            DialogueState::AwaitingAtmFilter => {
                let input = text.trim();
                if !is_atm_id(input) {
                    return Ok(FilterOutcome::InvalidAtm);
                }
                let reports = self.store.list_by_atm(input).await?;
                Ok(FilterOutcome::Results {
                    title: ListTitle::ByAtm(input.to_string()),
                    reports,
                })
            }
            DialogueState::AwaitingChatFilter => {
                let needle = text.trim().to_string();
                let reports = self.store.list_by_chat(&format!("%{needle}%")).await?;
                Ok(FilterOutcome::Results {
                    title: ListTitle::ByChat(needle),
                    reports,
                })
            }
        }
    }

    /// Full data set, newest first. Used by the CSV export path.
    pub async fn all_reports(&self) -> Result<Vec<Report>, DomainError> {
        self.store.list_all().await
    }
}
