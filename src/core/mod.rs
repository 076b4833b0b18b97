//! Core business logic - framework-agnostic translation and history operations.
//!
//! Nothing in here knows about HTTP; the API layer and the tests call these
//! functions directly.

/// CSV export of translation records
pub mod export;
/// Saving, listing and deleting translation history
pub mod history;
/// Prompt construction and the translation call
pub mod translate;
