//! OpenAI chat-completions adapter for the enhancement port

pub mod client;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::{OpenAiClient, OpenAiClientConfig};
pub use error::OpenAiApiError;
