//! Search entry points.
//!
//! # Responsibility
//! - Expose the pure filter used by the live search input.
//! - Keep result shaping inside core.

pub mod substring;
