//! Note list state and persistence mirroring.
//!
//! # Responsibility
//! - Keep the single source of truth for the newest-first note list.
//! - Isolate blob encoding details from composer/search callers.
//!
//! # Invariants
//! - The store is the sole writer of the persisted blob.

pub mod note_store;
