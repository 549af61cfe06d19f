//! Domain layer for the Postsmith editing core
//!
//! Contains the edit-history state machine, the instruction catalog, and the
//! port traits the infrastructure adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{EnhanceError, HistoryError};
