//! Adapters: infrastructure implementations of the ports.

pub mod export;
pub mod persistence;
pub mod telegram;
