//! Archive grouping of entries into month buckets.
//!
//! # Responsibility
//! - Partition entries by calendar month in one pass.
//! - Expose labels newest first and per-label entries in input order.
//!
//! # Invariants
//! - Two entries share a label iff they share (year, month).
//! - `sorted_labels` contains each label exactly once.
//! - Unknown labels resolve to an empty slice.

use crate::model::entry::JournalEntry;
use crate::recap::label::sort_month_labels;
use std::collections::BTreeMap;

/// One labeled month of entries, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket {
    pub label: String,
    pub entries: Vec<JournalEntry>,
}

/// Entries grouped by month label.
#[derive(Debug, Clone, Default)]
pub struct RecapGrouper {
    groups: BTreeMap<String, Vec<JournalEntry>>,
    sorted_labels: Vec<String>,
}

impl RecapGrouper {
    pub fn new(entries: &[JournalEntry]) -> Self {
        let mut groups: BTreeMap<String, Vec<JournalEntry>> = BTreeMap::new();
        for entry in entries {
            groups
                .entry(entry.year_month().label())
                .or_default()
                .push(entry.clone());
        }

        let mut sorted_labels: Vec<String> = groups.keys().cloned().collect();
        sort_month_labels(&mut sorted_labels);

        Self {
            groups,
            sorted_labels,
        }
    }

    /// Labels ordered most recent month first.
    pub fn sorted_labels(&self) -> &[String] {
        &self.sorted_labels
    }

    /// Entries of one label in their original relative order.
    pub fn grouped_entries(&self, label: &str) -> &[JournalEntry] {
        self.groups.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Materializes buckets in label order.
    pub fn buckets(&self) -> Vec<MonthBucket> {
        self.sorted_labels
            .iter()
            .map(|label| MonthBucket {
                label: label.clone(),
                entries: self.grouped_entries(label).to_vec(),
            })
            .collect()
    }

    /// Number of distinct months.
    pub fn len(&self) -> usize {
        self.sorted_labels.len()
    }

    /// Empty state for callers choosing an empty-state display.
    pub fn is_empty(&self) -> bool {
        self.sorted_labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::RecapGrouper;
    use crate::model::entry::{ImageRef, JournalEntry};
    use chrono::DateTime;

    fn entry(rfc3339: &str) -> JournalEntry {
        JournalEntry::new(
            DateTime::parse_from_rfc3339(rfc3339).unwrap(),
            ImageRef::new(format!("{rfc3339}.jpg")).unwrap(),
        )
    }

    #[test]
    fn groups_by_month_and_sorts_newest_first() {
        let entries = vec![
            entry("2024-12-24T18:00:00Z"),
            entry("2025-01-02T08:00:00Z"),
            entry("2024-12-03T10:00:00Z"),
        ];
        let grouper = RecapGrouper::new(&entries);

        assert_eq!(grouper.sorted_labels(), ["January 2025", "December 2024"]);
        assert_eq!(
            grouper.grouped_entries("December 2024"),
            [entries[0].clone(), entries[2].clone()]
        );
        assert_eq!(grouper.grouped_entries("January 2025"), [entries[1].clone()]);
    }

    #[test]
    fn alphabetical_label_order_does_not_leak_into_sort() {
        // "April" sorts before "March" alphabetically.
        let entries = vec![
            entry("2025-03-01T08:00:00Z"),
            entry("2025-04-01T08:00:00Z"),
            entry("2025-02-01T08:00:00Z"),
        ];
        let grouper = RecapGrouper::new(&entries);
        assert_eq!(
            grouper.sorted_labels(),
            ["April 2025", "March 2025", "February 2025"]
        );
    }

    #[test]
    fn empty_input_has_no_labels() {
        let grouper = RecapGrouper::new(&[]);
        assert!(grouper.is_empty());
        assert!(grouper.sorted_labels().is_empty());
        assert!(grouper.buckets().is_empty());
        assert!(grouper.grouped_entries("January 2025").is_empty());
    }

    #[test]
    fn buckets_follow_sorted_labels() {
        let entries = vec![entry("2023-05-01T08:00:00Z"), entry("2023-06-01T08:00:00Z")];
        let buckets = RecapGrouper::new(&entries).buckets();
        let labels: Vec<_> = buckets.iter().map(|bucket| bucket.label.as_str()).collect();
        assert_eq!(labels, ["June 2023", "May 2023"]);
        assert_eq!(buckets[0].entries, [entries[1].clone()]);
    }
}
