//! Enhancement orchestrator.
//!
//! Bridges the history engine and the external transformation capability: it
//! feeds the live draft plus a selected instruction to the backend and, on
//! success, commits the cleaned result into the history log as a generated
//! entry. Every failure path leaves the log completely untouched.
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::errors::EnhanceError;
use crate::domain::models::{HistoryLog, Instruction};
use crate::domain::ports::EnhanceClient;

/// Orchestrates one enhancement round trip per call.
///
/// The client is optional because the credential may only arrive at runtime
/// (the user pastes an API key); with no client attached every `apply` fails
/// fast with `MissingCredential`. Single-flight is caller discipline: the
/// orchestrator assumes at most one in-flight `apply` per draft and performs
/// no retries of its own.
#[derive(Default)]
pub struct Enhancer {
    client: Option<Arc<dyn EnhanceClient>>,
}

impl Enhancer {
    /// Creates an orchestrator with no backend attached
    pub fn new() -> Self {
        Self { client: None }
    }

    /// Creates an orchestrator with a ready backend client
    pub fn with_client(client: Arc<dyn EnhanceClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Attaches (or replaces) the backend client
    pub fn set_client(&mut self, client: Arc<dyn EnhanceClient>) {
        self.client = Some(client);
    }

    /// Returns true when a backend client is attached
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Applies one instruction to the current draft.
    ///
    /// Preconditions are checked before any network traffic: a client must be
    /// attached and the draft must be non-empty after trimming. The backend is
    /// invoked exactly once; on success the result is trimmed, one layer of
    /// matching wrapping quotes is stripped, and the cleaned text is recorded
    /// as a generated history entry labeled with the instruction.
    ///
    /// # Errors
    /// - `MissingCredential` / `EmptyDocument` before any call is made
    /// - `TransformationFailed` wrapping the backend cause; the log is
    ///   unchanged
    #[instrument(skip(self, log, instruction), fields(instruction_id = %instruction.id), err)]
    pub async fn apply(
        &self,
        log: &mut HistoryLog,
        instruction: &Instruction,
    ) -> Result<(), EnhanceError> {
        let client = self
            .client
            .as_ref()
            .ok_or(EnhanceError::MissingCredential)?;

        let document = log.current_text().to_string();
        if document.trim().is_empty() {
            return Err(EnhanceError::EmptyDocument);
        }

        let raw = client
            .enhance(&document, &instruction.instruction)
            .await
            .map_err(EnhanceError::TransformationFailed)?;

        let cleaned = strip_wrapping_quotes(raw.trim());
        debug!(chars = cleaned.len(), "recording generated entry");
        log.record_generated(
            cleaned,
            instruction.label.clone(),
            instruction.badge.clone(),
        );
        Ok(())
    }
}

/// Removes a single layer of wrapping quotes when the first and last
/// characters are the same quote character.
///
/// Backends like to return `"the whole post"` verbatim; one matching pair is
/// peeled off, mismatched or lone quotes are left alone.
fn strip_wrapping_quotes(text: &str) -> &str {
    if text.len() >= 2 {
        let bytes = text.as_bytes();
        let first = bytes[0];
        let last = bytes[text.len() - 1];
        if first == last && (first == b'"' || first == b'\'') {
            return &text[1..text.len() - 1];
        }
    }
    text
}
