//! Filter dialogue state. Session-keyed, in process memory only.
//!
//! Each admin conversation is either idle or waiting for exactly one
//! free-text filter input. State does not survive a restart; with a single
//! configured administrator that is acceptable.

use std::collections::HashMap;
use tokio::sync::Mutex;

/// What the panel expects from the admin's next text message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogueState {
    #[default]
    Idle,
    AwaitingAtmFilter,
    AwaitingChatFilter,
}

/// Session-keyed dialogue state store (conversation id -> state).
///
/// `take` removes the entry under the lock, so two rapid duplicate inputs
/// cannot both consume the same pending state: the second one observes Idle.
#[derive(Default)]
pub struct DialogueStore {
    states: Mutex<HashMap<i64, DialogueState>>,
}

impl DialogueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the dialogue for `session`.
    pub async fn set(&self, session: i64, state: DialogueState) {
        self.states.lock().await.insert(session, state);
    }

    /// Consume the pending state for `session`, resetting it to Idle.
    pub async fn take(&self, session: i64) -> DialogueState {
        self.states.lock().await.remove(&session).unwrap_or_default()
    }
}
