use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::HistoryLog;

/// Port trait for draft persistence.
///
/// The engine exposes a serializable `HistoryLog`; a store adapter is
/// responsible for durability. Implementations should treat unreadable or
/// malformed persisted state as "no prior session" (`Ok(None)` from `load`)
/// rather than an error, so a damaged file can never wedge the editor.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Loads the persisted history, if any usable state exists
    async fn load(&self) -> Result<Option<HistoryLog>>;

    /// Persists the full history state
    async fn save(&self, log: &HistoryLog) -> Result<()>;

    /// Removes any persisted state (session reset)
    async fn clear(&self) -> Result<()>;
}
