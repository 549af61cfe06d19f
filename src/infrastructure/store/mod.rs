//! Persistence adapters for the draft store port

pub mod json_store;

pub use json_store::JsonDraftStore;
