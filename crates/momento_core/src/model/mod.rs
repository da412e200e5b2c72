//! Domain model for mood check-ins and photo journal entries.
//!
//! # Responsibility
//! - Define the canonical shapes used by the ledger, store and recap engine.
//! - Validate values at construction so downstream code can trust them.
//!
//! # Invariants
//! - A `MoodRating` always lies inside the `MoodScale` it was built against.
//! - A `JournalEntry` is immutable once created and carries a non-nil id.

pub mod entry;
pub mod mood;
