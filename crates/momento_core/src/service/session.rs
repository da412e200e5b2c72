//! Journal session use-case service.
//!
//! # Responsibility
//! - Own the mood ledger and journal store for one user session.
//! - Validate boundary input, update in-memory state, then flush to storage.
//! - Hand photo bytes to the upload collaborator without awaiting it.
//!
//! # Invariants
//! - A mood check-in updates the ledger before its flush. A failed flush is
//!   returned to the caller; the in-memory rating stays for the session.
//! - A journal entry joins the store only after its row is written, so the
//!   store never holds an entry that storage rejected.
//! - A capture starts its upload only for an entry that was kept.
//! - Upload success or failure never changes session state.
//! - Mutations take `&mut self`, so `record_mood` and `capture_entry` are
//!   serialized by the owner.

use crate::journal::journal_store::{EntrySnapshot, JournalStore};
use crate::journal::mood_ledger::MoodLedger;
use crate::model::entry::{EntryId, EntryValidationError, ImageRef, JournalEntry};
use crate::model::mood::{MoodRating, MoodRecord, MoodScale, MoodValidationError};
use crate::recap::grouper::RecapGrouper;
use crate::recap::month_filter::MonthlyRecap;
use crate::repo::journal_repo::JournalRepository;
use crate::repo::kv_store::KeyValueStore;
use crate::repo::mood_repo::{load_mood_ledger, save_mood_ledger};
use crate::repo::RepoError;
use crate::upload::{journal_object_name, logged_upload, ImageUploader, PendingUpload};
use chrono::{DateTime, FixedOffset, NaiveDate};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from session use-cases.
#[derive(Debug)]
pub enum SessionError {
    InvalidMood(MoodValidationError),
    InvalidEntry(EntryValidationError),
    /// Captured photo carried no bytes.
    EmptyImage,
    Repo(RepoError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMood(err) => write!(f, "{err}"),
            Self::InvalidEntry(err) => write!(f, "{err}"),
            Self::EmptyImage => write!(f, "captured image is empty"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidMood(err) => Some(err),
            Self::InvalidEntry(err) => Some(err),
            Self::EmptyImage => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<MoodValidationError> for SessionError {
    fn from(value: MoodValidationError) -> Self {
        Self::InvalidMood(value)
    }
}

impl From<EntryValidationError> for SessionError {
    fn from(value: EntryValidationError) -> Self {
        Self::InvalidEntry(value)
    }
}

impl From<RepoError> for SessionError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Result of a camera capture.
pub struct CapturedEntry {
    pub entry_id: EntryId,
    pub image_ref: ImageRef,
    /// Upload of the photo bytes; drive it or drop it.
    pub upload: PendingUpload,
}

/// Session state owner for mood check-ins and photo entries.
pub struct JournalSession<K: KeyValueStore, J: JournalRepository> {
    kv: K,
    journal_repo: J,
    scale: MoodScale,
    ledger: MoodLedger,
    store: JournalStore,
}

impl<K: KeyValueStore, J: JournalRepository> JournalSession<K, J> {
    /// Loads session state from storage.
    ///
    /// The mood ledger falls back to empty on unreadable data; journal entries
    /// that fail to load are reported as errors.
    pub fn open(kv: K, journal_repo: J, scale: MoodScale) -> Result<Self, SessionError> {
        let ledger = load_mood_ledger(&kv, scale);
        let store = JournalStore::from_entries(journal_repo.list_entries()?);
        info!(
            "event=session_open module=service status=ok mood_records={} entries={}",
            ledger.len(),
            store.len()
        );
        Ok(Self {
            kv,
            journal_repo,
            scale,
            ledger,
            store,
        })
    }

    pub fn scale(&self) -> MoodScale {
        self.scale
    }

    pub fn ledger(&self) -> &MoodLedger {
        &self.ledger
    }

    /// Snapshot of every entry in insertion order.
    pub fn entries(&self) -> EntrySnapshot {
        self.store.all()
    }

    /// Records today's check-in from a raw slider value.
    ///
    /// # Errors
    /// - `SessionError::InvalidMood` when `raw_rating` is outside the scale;
    ///   nothing is stored in that case.
    /// - `SessionError::Repo` when the flush fails.
    pub fn record_mood(
        &mut self,
        day: NaiveDate,
        raw_rating: i64,
    ) -> Result<MoodRecord, SessionError> {
        let rating = MoodRating::new(raw_rating, self.scale)?;
        self.ledger.upsert(day, rating);

        if let Err(err) = save_mood_ledger(&mut self.kv, &self.ledger) {
            error!(
                "event=mood_flush module=service status=error day={} error={}",
                day, err
            );
            return Err(err.into());
        }

        Ok(MoodRecord::new(day, rating))
    }

    /// Appends a camera capture and prepares its upload.
    ///
    /// The entry references the generated remote object name. The returned
    /// upload future is not polled here.
    ///
    /// # Errors
    /// - `SessionError::EmptyImage` when `bytes` is empty.
    /// - `SessionError::Repo` when the entry cannot be written; the entry is
    ///   not kept and no upload is started.
    pub fn capture_entry(
        &mut self,
        timestamp: DateTime<FixedOffset>,
        bytes: Vec<u8>,
        uploader: &impl ImageUploader,
    ) -> Result<CapturedEntry, SessionError> {
        if bytes.is_empty() {
            return Err(SessionError::EmptyImage);
        }

        let object_name = journal_object_name();
        let image_ref = ImageRef::new(object_name.clone())?;
        let entry_id = self.append(JournalEntry::new(timestamp, image_ref.clone()))?;

        let upload = logged_upload(object_name.clone(), uploader.upload(object_name, bytes));
        Ok(CapturedEntry {
            entry_id,
            image_ref,
            upload,
        })
    }

    /// Appends an entry whose image already exists remotely, e.g. a photo
    /// picked from the library and uploaded by the host.
    pub fn import_entry(
        &mut self,
        timestamp: DateTime<FixedOffset>,
        image_ref: &str,
    ) -> Result<EntryId, SessionError> {
        let image_ref = ImageRef::new(image_ref)?;
        self.append(JournalEntry::new(timestamp, image_ref))
    }

    /// Entries of the month containing `reference`.
    pub fn monthly_recap(&self, reference: NaiveDate) -> MonthlyRecap {
        MonthlyRecap::for_month(&self.store.all(), reference)
    }

    /// All entries grouped by month, newest first.
    pub fn archive(&self) -> RecapGrouper {
        RecapGrouper::new(&self.store.all())
    }

    /// Mood records of the last `window_days` days up to `reference`.
    pub fn mood_trend(&self, reference: NaiveDate, window_days: u32) -> Vec<MoodRecord> {
        self.ledger.recent_range(reference, window_days)
    }

    /// Whether the check-in prompt should be shown for `today`.
    pub fn needs_check_in(&self, today: NaiveDate) -> bool {
        self.ledger.rating_on(today).is_none()
    }

    fn append(&mut self, entry: JournalEntry) -> Result<EntryId, SessionError> {
        if let Err(err) = self.journal_repo.insert_entry(&entry) {
            error!(
                "event=entry_persist module=service status=error entry_id={} error={}",
                entry.id(),
                err
            );
            return Err(err.into());
        }

        Ok(self.store.push(entry))
    }
}
