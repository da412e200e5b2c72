//! Core domain logic for Momento.
//! This crate is the single source of truth for mood and journal invariants.

pub mod config;
pub mod db;
pub mod journal;
pub mod logging;
pub mod model;
pub mod quote;
pub mod recap;
pub mod repo;
pub mod service;
pub mod upload;

pub use config::{ConfigError, CoreConfig};
pub use journal::journal_store::{EntrySnapshot, JournalStore};
pub use journal::mood_ledger::MoodLedger;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::entry::{EntryId, EntryValidationError, ImageRef, JournalEntry};
pub use model::mood::{MoodRating, MoodRecord, MoodScale, MoodValidationError};
pub use quote::{Quote, QuoteProvider, RotatingQuotes};
pub use recap::grouper::{MonthBucket, RecapGrouper};
pub use recap::label::{month_label, parse_month_label, sort_month_labels, YearMonth};
pub use recap::month_filter::{current_month, MonthlyRecap};
pub use repo::journal_repo::{JournalRepository, SqliteJournalRepository};
pub use repo::kv_store::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
pub use repo::mood_repo::{load_mood_ledger, save_mood_ledger, MOOD_DATA_KEY};
pub use repo::{RepoError, RepoResult};
pub use service::session::{CapturedEntry, JournalSession, SessionError};
pub use upload::{journal_object_name, ImageUploader, PendingUpload, UploadError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
