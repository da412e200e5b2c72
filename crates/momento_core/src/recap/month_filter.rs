//! Current-month filter for the monthly recap view.

use crate::model::entry::JournalEntry;
use crate::recap::label::YearMonth;
use chrono::NaiveDate;

/// Entries captured in the month of one reference date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyRecap {
    /// Display label of the month, e.g. `"March 2025"`.
    pub label: String,
    /// Matching entries in input order.
    pub entries: Vec<JournalEntry>,
}

impl MonthlyRecap {
    /// Builds the recap for the month containing `reference`.
    pub fn for_month(entries: &[JournalEntry], reference: NaiveDate) -> Self {
        Self {
            label: YearMonth::from_date(reference).label(),
            entries: current_month(entries, reference),
        }
    }

    /// Empty state for callers choosing an empty-state display.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns entries whose (year, month) matches `reference`, order preserved.
pub fn current_month(entries: &[JournalEntry], reference: NaiveDate) -> Vec<JournalEntry> {
    let month = YearMonth::from_date(reference);
    entries
        .iter()
        .filter(|entry| month.contains(entry.local_date()))
        .cloned()
        .collect()
}
