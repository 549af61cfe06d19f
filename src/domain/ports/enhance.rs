use async_trait::async_trait;

/// Result type for enhancement client operations
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Port trait for the external transformation capability.
///
/// The core depends on this signature only, not on the transport behind it:
/// given the full draft text and an opaque instruction, the backend returns
/// replacement text or fails. The call is asynchronous and is the single
/// suspension point in the whole core. No retry or cancellation machinery is
/// part of the contract; a caller wanting either layers it outside.
///
/// Implementations must be `Send + Sync` so they can be shared behind an
/// `Arc` across async tasks.
#[async_trait]
pub trait EnhanceClient: Send + Sync {
    /// Transforms `document` according to `instruction`, returning the new
    /// text.
    ///
    /// # Errors
    /// Network failures, non-success statuses, and malformed payloads are all
    /// surfaced as errors; the orchestrator wraps them without inspecting.
    async fn enhance(&self, document: &str, instruction: &str) -> Result<String>;
}
