//! Postsmith - Post Enhancement Core
//!
//! Postsmith is the engine of a text-editing assistant for short-form social
//! posts: an undo/redo history of draft snapshots with manual-edit coalescing,
//! plus an orchestrator that hands the draft and a selected instruction to an
//! LLM completion backend and commits the result as a new history entry.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): the history state machine, instruction
//!   catalog, and port traits
//! - **Service Layer** (`services`): the enhancement orchestrator and the
//!   language heuristic
//! - **Application Layer** (`application`): the `DraftSession` facade wiring
//!   history, enhancement, and persistence together
//! - **Infrastructure Layer** (`infrastructure`): OpenAI client, JSON draft
//!   store, configuration, logging
//!
//! # Example
//!
//! ```
//! use postsmith::{DraftSession, Enhancer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut session = DraftSession::new(Enhancer::new());
//!     session.edit("Excited to share what we shipped today").await;
//!     assert_eq!(session.current_text(), "Excited to share what we shipped today");
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::DraftSession;
pub use domain::errors::{EnhanceError, HistoryError};
pub use domain::models::{
    builtin_presets, post_types, Config, HistoryLog, Instruction, LoggingConfig, OpenAiConfig,
    Origin, Snapshot, StoreConfig,
};
pub use domain::ports::{DraftStore, EnhanceClient};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::openai::{OpenAiClient, OpenAiClientConfig};
pub use infrastructure::store::JsonDraftStore;
pub use services::Enhancer;
