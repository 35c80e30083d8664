//! Core types and utilities

pub mod state;
pub mod units;

pub use state::AtmosphericState;
pub use units::*;
