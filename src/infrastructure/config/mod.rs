//! Configuration loading (figment: defaults, yaml files, env vars)

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
