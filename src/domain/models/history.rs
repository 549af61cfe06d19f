//! The edit-history state machine.
//!
//! `HistoryLog` owns the ordered list of draft snapshots, the cursor marking
//! the active entry, and the transition rules: consecutive manual edits
//! coalesce into a single entry, backend-generated results always append, and
//! appending from anywhere but the end of the log discards the redo-reachable
//! future before the append. Jumping to a past entry is non-destructive; only
//! the next recorded edit truncates.
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::snapshot::{Origin, Snapshot};
use crate::domain::errors::HistoryError;

/// Label given to the very first manual entry
pub const INITIAL_TEXT_LABEL: &str = "Initial text";

/// Label given to manual entries recorded after a generated entry or a jump
pub const MANUAL_EDITS_LABEL: &str = "Manual edits";

/// Undo/redo timeline of a single draft
///
/// All operations are synchronous and atomic: each either completes its full
/// mutation of `entries`/`cursor`/`last_action` or rejects before touching
/// anything. The current draft text is always the text of the entry at the
/// cursor, or the empty string for an empty log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryLog {
    /// Ordered snapshots, oldest first
    entries: Vec<Snapshot>,

    /// Index of the active entry; `None` means the log is empty
    cursor: Option<usize>,

    /// Origin of the most recent recording or navigation target.
    /// Kept as an explicit field rather than derived from the cursor entry so
    /// the coalescing rule can check both independently.
    last_action: Option<Origin>,

    /// Next snapshot id to allocate
    next_id: u64,
}

impl HistoryLog {
    /// Creates an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the active entry, or "" when the log is empty
    pub fn current_text(&self) -> &str {
        self.cursor
            .map_or("", |index| self.entries[index].text.as_str())
    }

    /// The active snapshot, if any
    pub fn current(&self) -> Option<&Snapshot> {
        self.cursor.map(|index| &self.entries[index])
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }

    /// Index of the active entry, `None` when empty
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Origin of the last recording or navigation, `None` for a fresh log
    pub fn last_action(&self) -> Option<Origin> {
        self.last_action
    }

    /// Number of entries in the log
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no entry has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `undo` would move the cursor
    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(index) if index > 0)
    }

    /// Returns true if `redo` would move the cursor
    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(index) if index + 1 < self.entries.len())
    }

    /// Records a direct user edit carrying the new full draft text.
    ///
    /// Rules, in order:
    /// - identical text is a complete no-op (not even `last_action` moves);
    /// - an empty log gets a first entry labeled "Initial text";
    /// - when the previous action was manual and the cursor sits on the most
    ///   recent entry and that entry is itself manual, the entry is updated in
    ///   place (text and timestamp change, id and label survive) so an
    ///   editing session stays one undo step;
    /// - otherwise (previous action was generated, or the cursor points at a
    ///   non-manual or earlier snapshot after an undo/jump) any redo-reachable
    ///   entries are discarded and a fresh "Manual edits" entry is appended.
    ///
    /// Only the newest entry is ever mutated in place; anything with a
    /// successor is settled history.
    pub fn record_manual_edit(&mut self, new_text: &str) {
        if new_text == self.current_text() {
            return;
        }

        match self.cursor {
            None => {
                self.append(new_text.to_string(), INITIAL_TEXT_LABEL.to_string(), Origin::Manual, None);
            }
            Some(index) => {
                if self.last_action == Some(Origin::Manual) {
                    // The transition rules keep these in sync; see `validated`.
                    debug_assert_eq!(
                        self.entries[index].origin,
                        Origin::Manual,
                        "last_action is manual but the cursor entry is not"
                    );
                }

                let coalesce = index + 1 == self.entries.len()
                    && self.last_action == Some(Origin::Manual)
                    && self.entries[index].origin == Origin::Manual;

                if coalesce {
                    let entry = &mut self.entries[index];
                    entry.text = new_text.to_string();
                    entry.created_at = Utc::now();
                } else {
                    self.append(new_text.to_string(), MANUAL_EDITS_LABEL.to_string(), Origin::Manual, None);
                }
            }
        }

        self.last_action = Some(Origin::Manual);
    }

    /// Records a successful backend transformation.
    ///
    /// Always appends exactly one entry: generated results are never coalesced
    /// with each other or with prior manual edits, so "undo the last AI
    /// change" is always a single step.
    pub fn record_generated(
        &mut self,
        text: impl Into<String>,
        label: impl Into<String>,
        badge: Option<String>,
    ) {
        self.append(text.into(), label.into(), Origin::Generated, badge);
        self.last_action = Some(Origin::Generated);
    }

    /// Steps the cursor back one entry.
    ///
    /// Returns whether the cursor moved; at the lower boundary (or on an
    /// empty log) this is a no-op, not an error.
    pub fn undo(&mut self) -> bool {
        match self.cursor {
            Some(index) if index > 0 => {
                self.cursor = Some(index - 1);
                self.last_action = Some(self.entries[index - 1].origin);
                true
            }
            _ => false,
        }
    }

    /// Steps the cursor forward one entry.
    ///
    /// Returns whether the cursor moved; a no-op at the upper boundary.
    pub fn redo(&mut self) -> bool {
        match self.cursor {
            Some(index) if index + 1 < self.entries.len() => {
                self.cursor = Some(index + 1);
                self.last_action = Some(self.entries[index + 1].origin);
                true
            }
            _ => false,
        }
    }

    /// Moves the cursor to an arbitrary entry.
    ///
    /// Non-destructive: entries past the target stay redo-reachable until the
    /// next recording truncates them. Jumping to the already-current index is
    /// legal and still refreshes `last_action`.
    ///
    /// # Errors
    /// `HistoryError::InvalidIndex` when `index` is out of range.
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.entries.len() {
            return Err(HistoryError::InvalidIndex {
                index,
                len: self.entries.len(),
            });
        }

        self.cursor = Some(index);
        self.last_action = Some(self.entries[index].origin);
        Ok(())
    }

    /// Clears the log for a fresh session
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Drops redo-reachable entries and appends a new snapshot at the end.
    ///
    /// Truncation is a physical discard, not a soft hide, so memory does not
    /// grow across long sessions with many undos.
    fn append(&mut self, text: String, label: String, origin: Origin, badge: Option<String>) {
        let keep = self.cursor.map_or(0, |index| index + 1);
        self.entries.truncate(keep);

        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Snapshot::new(id, text, label, origin, badge));
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Re-checks structural invariants after deserialization.
    ///
    /// Persisted state arrives from outside the engine's control, so a
    /// rehydrated log must prove the invariants it normally maintains by
    /// construction: cursor in range exactly when non-empty, snapshot ids
    /// strictly increasing and below `next_id`, and `last_action` agreeing
    /// with the cursor entry's origin (every reachable state has them equal).
    ///
    /// # Errors
    /// `HistoryError::MalformedPersistedState` describing the first violation
    /// found. Callers loading persisted state are expected to treat this as
    /// "no prior session" rather than propagate it to the user.
    pub fn validated(self) -> Result<Self, HistoryError> {
        let malformed =
            |message: String| Err(HistoryError::MalformedPersistedState(message));

        match (self.cursor, self.entries.is_empty()) {
            (None, true) => {
                if self.last_action.is_some() {
                    return malformed("empty log with a recorded last action".to_string());
                }
            }
            (None, false) => {
                return malformed("non-empty log without a cursor".to_string());
            }
            (Some(index), true) => {
                return malformed(format!("cursor {index} into an empty log"));
            }
            (Some(index), false) => {
                if index >= self.entries.len() {
                    return malformed(format!(
                        "cursor {index} out of range for {} entries",
                        self.entries.len()
                    ));
                }
                if self.last_action != Some(self.entries[index].origin) {
                    return malformed(format!(
                        "last action {:?} disagrees with cursor entry origin {:?}",
                        self.last_action, self.entries[index].origin
                    ));
                }
            }
        }

        for pair in self.entries.windows(2) {
            if pair[1].id <= pair[0].id {
                return malformed(format!(
                    "snapshot ids not strictly increasing ({} then {})",
                    pair[0].id, pair[1].id
                ));
            }
        }

        if let Some(last) = self.entries.last() {
            if self.next_id <= last.id {
                return malformed(format!(
                    "next id {} not above newest snapshot id {}",
                    self.next_id, last.id
                ));
            }
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_log() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert_eq!(log.cursor(), None);
        assert_eq!(log.current_text(), "");
        assert_eq!(log.last_action(), None);
        assert!(!log.can_undo());
        assert!(!log.can_redo());
    }

    #[test]
    fn test_first_manual_edit_is_initial_text() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("Hello");

        assert_eq!(log.len(), 1);
        assert_eq!(log.cursor(), Some(0));
        assert_eq!(log.current_text(), "Hello");
        assert_eq!(log.entries()[0].label, INITIAL_TEXT_LABEL);
        assert_eq!(log.entries()[0].origin, Origin::Manual);
        assert_eq!(log.last_action(), Some(Origin::Manual));
    }

    #[test]
    fn test_consecutive_manual_edits_coalesce() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("Hello");
        let first_id = log.entries()[0].id;

        log.record_manual_edit("Hello world");
        log.record_manual_edit("Hello world!");

        assert_eq!(log.len(), 1);
        assert_eq!(log.current_text(), "Hello world!");
        assert_eq!(log.entries()[0].id, first_id);
        assert_eq!(log.entries()[0].label, INITIAL_TEXT_LABEL);
    }

    #[test]
    fn test_identical_text_is_a_true_noop() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("Hello");
        log.record_generated("Hello!", "Add Emojis", None);
        let before = log.clone();

        log.record_manual_edit("Hello!");

        // Nothing changed, including last_action and timestamps.
        assert_eq!(log, before);
        assert_eq!(log.last_action(), Some(Origin::Generated));
    }

    #[test]
    fn test_generated_never_coalesces() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("draft");
        log.record_generated("draft v2", "Fix Grammar", None);
        log.record_generated("draft v3", "Fix Grammar", None);

        assert_eq!(log.len(), 3);
        assert_eq!(log.cursor(), Some(2));
        assert_eq!(log.last_action(), Some(Origin::Generated));
    }

    #[test]
    fn test_manual_after_generated_appends() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("draft");
        log.record_generated("Draft.", "Fix Grammar", None);
        log.record_manual_edit("Draft. More.");

        assert_eq!(log.len(), 3);
        assert_eq!(log.entries()[2].label, MANUAL_EDITS_LABEL);

        // And the new manual run coalesces again.
        log.record_manual_edit("Draft. More words.");
        assert_eq!(log.len(), 3);
        assert_eq!(log.current_text(), "Draft. More words.");
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("one");
        log.record_generated("two", "Boost Engagement", None);

        assert!(log.undo());
        assert_eq!(log.cursor(), Some(0));
        assert_eq!(log.current_text(), "one");
        assert_eq!(log.last_action(), Some(Origin::Manual));

        assert!(log.redo());
        assert_eq!(log.cursor(), Some(1));
        assert_eq!(log.current_text(), "two");
        assert_eq!(log.last_action(), Some(Origin::Generated));
    }

    #[test]
    fn test_undo_redo_boundaries_are_noops() {
        let mut log = HistoryLog::new();
        assert!(!log.undo());
        assert!(!log.redo());

        log.record_manual_edit("only");
        let before = log.clone();
        assert!(!log.undo());
        assert!(!log.redo());
        assert_eq!(log, before);
    }

    #[test]
    fn test_append_after_undo_truncates_future() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("Hello world");
        log.record_generated("Hello world!", "Add Emojis", None);

        log.undo();
        log.record_manual_edit("Hi there");

        assert_eq!(log.len(), 2);
        assert_eq!(log.cursor(), Some(1));
        assert_eq!(log.entries()[0].text, "Hello world");
        assert_eq!(log.entries()[1].text, "Hi there");
        assert_eq!(log.entries()[1].origin, Origin::Manual);
        assert!(!log.can_redo());
    }

    #[test]
    fn test_generated_after_undo_truncates_future() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("a");
        log.record_generated("b", "x", None);
        log.record_generated("c", "y", None);

        log.undo();
        log.undo();
        assert_eq!(log.cursor(), Some(0));

        log.record_generated("d", "z", None);
        assert_eq!(log.len(), 2);
        assert_eq!(log.current_text(), "d");
    }

    #[test]
    fn test_manual_after_undo_onto_manual_entry_branches() {
        // Undo sets last_action to the origin of the entry landed on, but a
        // mid-log entry is settled history even when it is manual: typing
        // there takes a new branch instead of rewriting the old entry.
        let mut log = HistoryLog::new();
        log.record_manual_edit("one");
        log.record_generated("two", "x", None);
        log.record_manual_edit("three");

        log.undo();
        log.undo();
        assert_eq!(log.current_text(), "one");
        assert_eq!(log.last_action(), Some(Origin::Manual));

        log.record_manual_edit("one more");

        assert_eq!(log.len(), 2);
        assert_eq!(log.cursor(), Some(1));
        assert_eq!(log.entries()[0].text, "one");
        assert_eq!(log.entries()[1].text, "one more");
        assert_eq!(log.entries()[1].label, MANUAL_EDITS_LABEL);
        assert!(!log.can_redo());
    }

    #[test]
    fn test_jump_to_is_nondestructive() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("one");
        log.record_generated("two", "x", None);
        log.record_generated("three", "y", None);

        log.jump_to(0).unwrap();
        assert_eq!(log.len(), 3);
        assert_eq!(log.cursor(), Some(0));
        assert_eq!(log.last_action(), Some(Origin::Manual));
        assert!(log.can_redo());
    }

    #[test]
    fn test_jump_to_current_index_refreshes_last_action() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("one");
        log.record_generated("two", "x", None);
        log.jump_to(0).unwrap();
        log.jump_to(1).unwrap();

        log.jump_to(1).unwrap();
        assert_eq!(log.cursor(), Some(1));
        assert_eq!(log.last_action(), Some(Origin::Generated));
    }

    #[test]
    fn test_jump_to_out_of_range() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("one");

        let err = log.jump_to(5).unwrap_err();
        assert!(matches!(
            err,
            HistoryError::InvalidIndex { index: 5, len: 1 }
        ));
        assert_eq!(log.cursor(), Some(0));
    }

    #[test]
    fn test_recording_after_jump_truncates_from_new_cursor() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("one");
        log.record_generated("two", "x", None);
        log.record_generated("three", "y", None);

        log.jump_to(1).unwrap();
        log.record_generated("four", "z", None);

        assert_eq!(log.len(), 3);
        assert_eq!(
            log.entries().iter().map(|s| s.text.as_str()).collect::<Vec<_>>(),
            vec!["one", "two", "four"]
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("one");
        log.record_generated("two", "x", None);

        log.reset();
        assert!(log.is_empty());
        assert_eq!(log.cursor(), None);
        assert_eq!(log.last_action(), None);
        assert_eq!(log.current_text(), "");
    }

    #[test]
    fn test_snapshot_ids_monotone_across_truncation() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("one");
        log.record_generated("two", "x", None);
        log.undo();
        log.record_generated("branch", "y", None);

        let ids: Vec<u64> = log.entries().iter().map(|s| s.id).collect();
        assert!(ids.windows(2).all(|pair| pair[1] > pair[0]));
    }

    #[test]
    fn test_validated_accepts_reachable_state() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("one");
        log.record_generated("two", "x", None);
        log.undo();

        let json = serde_json::to_string(&log).unwrap();
        let restored: HistoryLog = serde_json::from_str(&json).unwrap();
        let restored = restored.validated().unwrap();
        assert_eq!(restored, log);
    }

    #[test]
    fn test_validated_rejects_out_of_range_cursor() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("one");

        let mut value = serde_json::to_value(&log).unwrap();
        value["cursor"] = serde_json::json!(9);
        let tampered: HistoryLog = serde_json::from_value(value).unwrap();

        assert!(matches!(
            tampered.validated(),
            Err(HistoryError::MalformedPersistedState(_))
        ));
    }

    #[test]
    fn test_validated_rejects_missing_cursor_on_nonempty_log() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("one");

        let mut value = serde_json::to_value(&log).unwrap();
        value["cursor"] = serde_json::Value::Null;
        let tampered: HistoryLog = serde_json::from_value(value).unwrap();

        assert!(tampered.validated().is_err());
    }

    #[test]
    fn test_validated_rejects_drifted_last_action() {
        let mut log = HistoryLog::new();
        log.record_manual_edit("one");
        log.record_generated("two", "x", None);

        let mut value = serde_json::to_value(&log).unwrap();
        value["last_action"] = serde_json::json!("manual");
        let tampered: HistoryLog = serde_json::from_value(value).unwrap();

        assert!(tampered.validated().is_err());
    }
}
