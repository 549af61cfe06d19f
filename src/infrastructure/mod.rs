//! Infrastructure layer module
//!
//! Adapters and external integrations:
//! - OpenAI chat-completions client (enhancement backend)
//! - JSON file draft store (persistence)
//! - Configuration management (figment)
//! - Logging initialization (tracing)
//!
//! Infrastructure implementations satisfy the port traits defined in the
//! domain layer.

pub mod config;
pub mod logging;
pub mod openai;
pub mod store;
