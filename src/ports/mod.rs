//! Port traits. API boundaries for the hexagon.
//!
//! Outbound: called by use cases into infrastructure, implemented by adapters.

pub mod outbound;

pub use outbound::{ReportNotifier, ReportStore};
