//! Journal entry domain model.
//!
//! # Responsibility
//! - Define the photo journal entry shared by store, filter and recap views.
//! - Validate entry identity and image references at construction.
//!
//! # Invariants
//! - `id` is stable, non-nil and never reused for another entry.
//! - `image_ref` is a non-blank opaque reference to remote image data.
//! - `timestamp` keeps the device offset at capture time; calendar math uses
//!   that local date, never a UTC conversion.

use crate::recap::label::YearMonth;
use chrono::{DateTime, FixedOffset, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a journal entry.
pub type EntryId = Uuid;

/// Validation errors for journal entry fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    NilId,
    EmptyImageRef,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "entry id must not be nil"),
            Self::EmptyImageRef => write!(f, "image reference must not be empty"),
        }
    }
}

impl Error for EntryValidationError {}

/// Opaque reference to binary image data held by the upload collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Result<Self, EntryValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(EntryValidationError::EmptyImageRef);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for ImageRef {
    type Error = EntryValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        value.0
    }
}

impl Display for ImageRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One photo journal capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    id: EntryId,
    timestamp: DateTime<FixedOffset>,
    image_ref: ImageRef,
}

impl JournalEntry {
    /// Creates an entry with a generated stable ID.
    pub fn new(timestamp: DateTime<FixedOffset>, image_ref: ImageRef) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            image_ref,
        }
    }

    /// Rebuilds an entry whose identity already exists in storage.
    ///
    /// # Errors
    /// - `EntryValidationError::NilId` for the nil UUID.
    pub fn with_id(
        id: EntryId,
        timestamp: DateTime<FixedOffset>,
        image_ref: ImageRef,
    ) -> Result<Self, EntryValidationError> {
        if id.is_nil() {
            return Err(EntryValidationError::NilId);
        }
        Ok(Self {
            id,
            timestamp,
            image_ref,
        })
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn image_ref(&self) -> &ImageRef {
        &self.image_ref
    }

    /// Calendar date of the capture in the device's local offset.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Calendar month of the capture in the device's local offset.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::from_date(self.local_date())
    }
}
