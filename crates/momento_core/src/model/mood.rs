//! Mood rating model.
//!
//! # Responsibility
//! - Define the configured rating scale and validated rating values.
//! - Define the per-day `MoodRecord` shape persisted by the ledger.
//!
//! # Invariants
//! - `MoodScale::min <= MoodScale::max`.
//! - `MoodRating` can only be constructed through scale validation.
//! - `MoodRecord::day` has no time-of-day component.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest rating of the check-in slider.
pub const DEFAULT_MOOD_MIN: u8 = 0;
/// Highest rating of the check-in slider.
pub const DEFAULT_MOOD_MAX: u8 = 10;

/// Validation errors for mood scale and rating values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodValidationError {
    /// Scale bounds are reversed.
    InvalidScale { min: u8, max: u8 },
    /// Rating lies outside the configured closed range.
    OutOfRange { value: i64, min: u8, max: u8 },
}

impl Display for MoodValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidScale { min, max } => {
                write!(f, "mood scale max ({max}) must be >= min ({min})")
            }
            Self::OutOfRange { value, min, max } => {
                write!(f, "mood rating {value} is outside the range {min}..={max}")
            }
        }
    }
}

impl Error for MoodValidationError {}

/// Closed integer range accepted for mood ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodScale {
    min: u8,
    max: u8,
}

impl MoodScale {
    /// Creates a scale covering `min..=max`.
    pub fn new(min: u8, max: u8) -> Result<Self, MoodValidationError> {
        if max < min {
            return Err(MoodValidationError::InvalidScale { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// Returns whether `value` is accepted by this scale.
    pub fn contains(&self, value: i64) -> bool {
        value >= i64::from(self.min) && value <= i64::from(self.max)
    }
}

impl Default for MoodScale {
    fn default() -> Self {
        Self {
            min: DEFAULT_MOOD_MIN,
            max: DEFAULT_MOOD_MAX,
        }
    }
}

/// A mood rating already validated against a `MoodScale`.
///
/// The ledger only accepts this type, so an out-of-range value cannot reach
/// storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoodRating(u8);

impl MoodRating {
    /// Validates `value` against `scale`.
    ///
    /// # Errors
    /// - `MoodValidationError::OutOfRange` when `value` is outside the scale.
    pub fn new(value: i64, scale: MoodScale) -> Result<Self, MoodValidationError> {
        if !scale.contains(value) {
            return Err(MoodValidationError::OutOfRange {
                value,
                min: scale.min,
                max: scale.max,
            });
        }
        // Scale bounds are u8, so a contained value always fits.
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Display for MoodRating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One rating for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodRecord {
    pub day: NaiveDate,
    pub rating: MoodRating,
}

impl MoodRecord {
    pub fn new(day: NaiveDate, rating: MoodRating) -> Self {
        Self { day, rating }
    }
}
