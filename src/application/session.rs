//! Editing session facade.
//!
//! `DraftSession` ties the pieces together the way a UI would: it owns the
//! history log, routes text changes and enhancement requests into it, and
//! persists the log through an optional `DraftStore` after every successful
//! mutation. Persistence failures degrade to warnings; the in-memory session
//! stays authoritative.
use std::sync::Arc;

use tracing::{instrument, warn};
use uuid::Uuid;

use crate::domain::errors::{EnhanceError, HistoryError};
use crate::domain::models::{HistoryLog, Instruction, Snapshot};
use crate::domain::ports::{DraftStore, EnhanceClient};
use crate::services::Enhancer;

/// One user-facing editing session over a single draft
pub struct DraftSession {
    /// Session identifier, for log correlation only
    id: Uuid,
    log: HistoryLog,
    enhancer: Enhancer,
    store: Option<Arc<dyn DraftStore>>,
}

impl DraftSession {
    /// Creates a fresh in-memory session with no persistence
    pub fn new(enhancer: Enhancer) -> Self {
        Self {
            id: Uuid::new_v4(),
            log: HistoryLog::new(),
            enhancer,
            store: None,
        }
    }

    /// Creates a fresh session persisting through `store`
    pub fn with_store(enhancer: Enhancer, store: Arc<dyn DraftStore>) -> Self {
        Self {
            id: Uuid::new_v4(),
            log: HistoryLog::new(),
            enhancer,
            store: Some(store),
        }
    }

    /// Restores a session from persisted state.
    ///
    /// Missing, unreadable, or malformed persisted state all start a fresh
    /// session; rehydration never fails.
    pub async fn hydrate(enhancer: Enhancer, store: Arc<dyn DraftStore>) -> Self {
        let log = match store.load().await {
            Ok(Some(log)) => log,
            Ok(None) => HistoryLog::new(),
            Err(error) => {
                warn!(%error, "failed to load persisted draft, starting fresh");
                HistoryLog::new()
            }
        };

        Self {
            id: Uuid::new_v4(),
            log,
            enhancer,
            store: Some(store),
        }
    }

    /// Session identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Read-only view of the history log
    pub fn log(&self) -> &HistoryLog {
        &self.log
    }

    /// The current draft text
    pub fn current_text(&self) -> &str {
        self.log.current_text()
    }

    /// The active history entry, if any
    pub fn current(&self) -> Option<&Snapshot> {
        self.log.current()
    }

    /// Attaches the enhancement backend (e.g. once the user supplies a key)
    pub fn set_client(&mut self, client: Arc<dyn EnhanceClient>) {
        self.enhancer.set_client(client);
    }

    /// Returns true when enhancement requests can be served
    pub fn is_enhancer_configured(&self) -> bool {
        self.enhancer.is_configured()
    }

    /// Records a direct user edit and persists the result
    #[instrument(skip(self, text), fields(session_id = %self.id))]
    pub async fn edit(&mut self, text: &str) {
        self.log.record_manual_edit(text);
        self.persist().await;
    }

    /// Runs one enhancement over the current draft and persists on success
    ///
    /// # Errors
    /// Propagates the orchestrator's error unchanged; the log and the
    /// persisted state are untouched on failure.
    #[instrument(skip(self, instruction), fields(session_id = %self.id, instruction_id = %instruction.id))]
    pub async fn enhance(&mut self, instruction: &Instruction) -> Result<(), EnhanceError> {
        self.enhancer.apply(&mut self.log, instruction).await?;
        self.persist().await;
        Ok(())
    }

    /// Steps back one entry; persists and returns true when the cursor moved
    pub async fn undo(&mut self) -> bool {
        if self.log.undo() {
            self.persist().await;
            true
        } else {
            false
        }
    }

    /// Steps forward one entry; persists and returns true when the cursor moved
    pub async fn redo(&mut self) -> bool {
        if self.log.redo() {
            self.persist().await;
            true
        } else {
            false
        }
    }

    /// Jumps to an arbitrary history entry and persists
    ///
    /// # Errors
    /// `HistoryError::InvalidIndex` when `index` is out of range.
    pub async fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        self.log.jump_to(index)?;
        self.persist().await;
        Ok(())
    }

    /// Clears the session and any persisted state
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn reset(&mut self) {
        self.log.reset();
        if let Some(store) = &self.store {
            if let Err(error) = store.clear().await {
                warn!(%error, "failed to clear persisted draft");
            }
        }
    }

    async fn persist(&self) {
        if let Some(store) = &self.store {
            if let Err(error) = store.save(&self.log).await {
                warn!(%error, "failed to persist draft history");
            }
        }
    }
}
