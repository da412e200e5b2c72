//! Monthly recap and archive aggregation.
//!
//! # Responsibility
//! - Filter entries into the current calendar month.
//! - Group entries into labeled month buckets sorted newest first.
//!
//! # Invariants
//! - All functions are pure over the input entries.
//! - Empty input yields empty output, never an error.

pub mod grouper;
pub mod label;
pub mod month_filter;
