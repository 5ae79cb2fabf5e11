//! Domain model for notes.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Notes are immutable after creation; removal is the only mutation.

pub mod note;
