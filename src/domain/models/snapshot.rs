//! Domain models for draft snapshots.
//!
//! A snapshot records one point in a draft's history: the full text plus
//! metadata about how it was produced. Snapshots are immutable once a newer
//! entry exists after them; the one exception is in-place coalescing of the
//! most recent manual entry while the user keeps typing (see `HistoryLog`).
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a snapshot was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Typed or pasted directly by the user
    Manual,
    /// Produced by an enhancement backend
    Generated,
}

/// One recorded state of the draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Unique identifier, monotonically increasing in creation order.
    /// Allocated by the owning log; ordering logic is positional, the id
    /// exists for display and persistence sanity checks.
    pub id: u64,

    /// Full draft text at this point
    pub text: String,

    /// Human-readable description of how this snapshot came to be
    /// (e.g. "Initial text", "Manual edits", or an enhancement label)
    pub label: String,

    /// Creation timestamp (display only, not used for ordering)
    pub created_at: DateTime<Utc>,

    /// Whether this entry is user-typed or backend-generated
    pub origin: Origin,

    /// Optional short display marker for the instruction that produced a
    /// generated entry (e.g. an icon)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl Snapshot {
    /// Creates a snapshot with the given identity and content
    pub fn new(
        id: u64,
        text: String,
        label: String,
        origin: Origin,
        badge: Option<String>,
    ) -> Self {
        Self {
            id,
            text,
            label,
            created_at: Utc::now(),
            origin,
            badge,
        }
    }

    /// Returns true if this entry was typed by the user
    pub fn is_manual(&self) -> bool {
        self.origin == Origin::Manual
    }
}
