//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod extractor;

pub use entities::{InboundMessage, NewReport, Report, UNTITLED_CHAT};
pub use errors::DomainError;
pub use extractor::{extract_atm_id, is_atm_id};
