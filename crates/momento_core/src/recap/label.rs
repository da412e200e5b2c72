//! Month labels used as recap bucket keys.
//!
//! # Invariants
//! - `month_label` output always parses back through `parse_month_label`.
//! - Sorting never fails on malformed labels; they sink to the end and keep
//!   their relative order.

use chrono::{Datelike, NaiveDate};
use std::cmp::Reverse;
use std::fmt::{Display, Formatter};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar (year, month) pair. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Returns `None` unless `month` is in `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Display label, e.g. `"January 2025"`.
    pub fn label(&self) -> String {
        self.to_string()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = MONTH_NAMES[(self.month - 1) as usize];
        write!(f, "{name} {}", self.year)
    }
}

/// Builds the display label for the month containing `date`.
pub fn month_label(date: NaiveDate) -> String {
    YearMonth::from_date(date).label()
}

/// Parses a `"<Month> <Year>"` label back into its `YearMonth`.
///
/// Month names match case-insensitively. Returns `None` for anything else.
pub fn parse_month_label(label: &str) -> Option<YearMonth> {
    let (name, year) = label.trim().split_once(' ')?;
    let index = MONTH_NAMES
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name.trim()))?;
    let year = year.trim().parse::<i32>().ok()?;
    YearMonth::new(year, index as u32 + 1)
}

/// Sorts labels newest month first.
///
/// Malformed labels compare equal to each other and after every valid
/// label; the sort is stable.
pub fn sort_month_labels(labels: &mut [String]) {
    labels.sort_by_key(|label| Reverse(parse_month_label(label)));
}
