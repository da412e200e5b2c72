//! Append-only journal entry store.
//!
//! # Responsibility
//! - Append new captures with fresh stable IDs.
//! - Hand out immutable snapshots for filter and recap views.
//!
//! # Invariants
//! - Entries are never mutated or removed after append.
//! - Iteration follows insertion order; display order is decided by
//!   `recap`, not by this store.
//! - A snapshot returned by `all` never observes later appends.

use crate::model::entry::{EntryId, ImageRef, JournalEntry};
use chrono::{DateTime, FixedOffset};
use log::debug;
use std::sync::Arc;

/// Immutable, cheaply cloneable view of the store at one point in time.
pub type EntrySnapshot = Arc<[JournalEntry]>;

/// In-memory append-only collection of journal entries.
#[derive(Debug, Clone, Default)]
pub struct JournalStore {
    entries: Vec<JournalEntry>,
}

impl JournalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from persisted entries in their stored order.
    pub fn from_entries(entries: impl IntoIterator<Item = JournalEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Appends a capture and returns its newly assigned ID.
    pub fn append(&mut self, timestamp: DateTime<FixedOffset>, image_ref: ImageRef) -> EntryId {
        self.push(JournalEntry::new(timestamp, image_ref))
    }

    /// Appends an already-built entry and returns its ID.
    pub fn push(&mut self, entry: JournalEntry) -> EntryId {
        let entry_id = entry.id();
        debug!(
            "event=entry_append module=store status=ok entry_id={} date={}",
            entry_id,
            entry.local_date()
        );
        self.entries.push(entry);
        entry_id
    }

    /// Returns every entry in insertion order.
    pub fn all(&self) -> EntrySnapshot {
        Arc::from(self.entries.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
