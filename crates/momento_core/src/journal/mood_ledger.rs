//! Per-day mood ledger.
//!
//! # Responsibility
//! - Hold at most one rating per calendar day with last-write-wins upserts.
//! - Answer "last N days" range queries for the mood trend chart.
//!
//! # Invariants
//! - No two records share the same `day`.
//! - Iteration order is ascending by `day`.
//! - Days are compared by (year, month, day) only.

use crate::model::mood::{MoodRating, MoodRecord};
use chrono::{DateTime, Days, FixedOffset, NaiveDate};
use log::debug;
use std::collections::BTreeMap;

/// Mood ratings keyed by calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodLedger {
    records: BTreeMap<NaiveDate, MoodRating>,
}

impl MoodLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from persisted records.
    ///
    /// Duplicate days collapse with the later record winning, matching
    /// `upsert` semantics.
    pub fn from_records(records: impl IntoIterator<Item = MoodRecord>) -> Self {
        let mut ledger = Self::new();
        for record in records {
            ledger.upsert(record.day, record.rating);
        }
        ledger
    }

    /// Inserts or replaces the rating for `day`.
    ///
    /// Returns the previous rating for that day, if any.
    pub fn upsert(&mut self, day: NaiveDate, rating: MoodRating) -> Option<MoodRating> {
        let previous = self.records.insert(day, rating);
        debug!(
            "event=mood_upsert module=ledger status=ok day={} rating={} replaced={}",
            day,
            rating,
            previous.is_some()
        );
        previous
    }

    /// Upserts using the local calendar date of `timestamp`.
    pub fn upsert_at(
        &mut self,
        timestamp: DateTime<FixedOffset>,
        rating: MoodRating,
    ) -> Option<MoodRating> {
        self.upsert(timestamp.date_naive(), rating)
    }

    /// Returns records with `day` in `[reference - window_days, reference]`.
    ///
    /// Both bounds are inclusive and results are ascending by day. A window
    /// reaching before the earliest representable date is clamped.
    pub fn recent_range(&self, reference: NaiveDate, window_days: u32) -> Vec<MoodRecord> {
        let lower = reference
            .checked_sub_days(Days::new(u64::from(window_days)))
            .unwrap_or(NaiveDate::MIN);
        self.records
            .range(lower..=reference)
            .map(|(day, rating)| MoodRecord::new(*day, *rating))
            .collect()
    }

    pub fn rating_on(&self, day: NaiveDate) -> Option<MoodRating> {
        self.records.get(&day).copied()
    }

    /// All records ascending by day.
    pub fn records(&self) -> Vec<MoodRecord> {
        self.records
            .iter()
            .map(|(day, rating)| MoodRecord::new(*day, *rating))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
