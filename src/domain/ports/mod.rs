//! Port trait definitions (Hexagonal Architecture)
//!
//! Async trait interfaces that infrastructure adapters implement:
//! - `EnhanceClient`: the external transformation capability
//! - `DraftStore`: durability for the serializable history state
//!
//! These contracts keep the domain independent of transport and storage
//! choices.

pub mod draft_store;
pub mod enhance;

pub use draft_store::DraftStore;
pub use enhance::EnhanceClient;
