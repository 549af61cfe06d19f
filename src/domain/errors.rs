use thiserror::Error;

/// Domain-level errors for history log operations
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Invalid history index: {index} (log has {len} entries)")]
    InvalidIndex { index: usize, len: usize },

    #[error("Malformed persisted history state: {0}")]
    MalformedPersistedState(String),
}

/// Errors raised by the enhancement orchestrator
///
/// `MissingCredential` and `EmptyDocument` are precondition failures: they are
/// reported before any network call and before any history mutation.
/// `TransformationFailed` wraps whatever the backend client reported; the
/// history log is untouched in every error case.
#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("No credential configured for the enhancement backend")]
    MissingCredential,

    #[error("Cannot enhance an empty draft")]
    EmptyDocument,

    #[error("Transformation failed: {0}")]
    TransformationFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}
