pub mod catalog;
pub mod config;
pub mod history;
pub mod snapshot;

pub use catalog::{builtin_presets, post_types, Instruction};
pub use config::{Config, LoggingConfig, OpenAiConfig, StoreConfig};
pub use history::{HistoryLog, INITIAL_TEXT_LABEL, MANUAL_EDITS_LABEL};
pub use snapshot::{Origin, Snapshot};
