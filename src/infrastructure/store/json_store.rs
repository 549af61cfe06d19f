//! JSON file adapter for the draft store port.
//!
//! Plays the role the browser's local storage played in the original setting:
//! a single small blob keyed by location. Unreadable or malformed content is
//! reported as "no prior session", never as a hard failure.
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::warn;

use crate::domain::models::HistoryLog;
use crate::domain::ports::DraftStore;

/// File-backed draft store
pub struct JsonDraftStore {
    path: PathBuf,
}

impl JsonDraftStore {
    /// Creates a store reading and writing `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the persisted draft
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DraftStore for JsonDraftStore {
    async fn load(&self) -> Result<Option<HistoryLog>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "draft file unreadable, starting fresh");
                return Ok(None);
            }
        };

        let log: HistoryLog = match serde_json::from_slice(&bytes) {
            Ok(log) => log,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "draft file not valid JSON, starting fresh");
                return Ok(None);
            }
        };

        // Persisted state comes from outside the engine's control; re-prove
        // the structural invariants before handing it back.
        match log.validated() {
            Ok(log) => Ok(Some(log)),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "draft state fails invariants, starting fresh");
                Ok(None)
            }
        }
    }

    async fn save(&self, log: &HistoryLog) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let json = serde_json::to_vec_pretty(log).context("Failed to serialize draft history")?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error).with_context(|| format!("Failed to remove {}", self.path.display())),
        }
    }
}
