//! Application use cases. Orchestrate domain logic via ports.

pub mod admin_panel;
pub mod dialogue;
pub mod intake;

pub use admin_panel::{AdminPanel, FilterOutcome, ListTitle};
pub use dialogue::{DialogueState, DialogueStore};
pub use intake::IntakeService;

#[cfg(test)]
pub(crate) mod testing;
