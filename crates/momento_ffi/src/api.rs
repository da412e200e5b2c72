//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose check-in, journal and recap use-cases to Dart via FRB.
//! - Keep error semantics simple: envelopes with `ok` + `message`.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Session-touching calls are serialized through one process-wide lock.
//! - Dates cross the boundary as `YYYY-MM-DD`, timestamps as RFC 3339.

use chrono::{DateTime, NaiveDate};
use log::warn;
use momento_core::db::open_db;
use momento_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CoreConfig, JournalEntry, JournalSession, QuoteProvider, RotatingQuotes, SessionError,
    SqliteJournalRepository, SqliteKeyValueStore,
};
use std::sync::{Mutex, OnceLock};

const DAY_FORMAT: &str = "%Y-%m-%d";
const TREND_WINDOW_MAX: u32 = 366;

static CORE_CONFIG: OnceLock<CoreConfig> = OnceLock::new();
static SESSION_LOCK: Mutex<()> = Mutex::new(());
static QUOTES: OnceLock<Mutex<RotatingQuotes>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One journal entry as shown by recap/archive lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryItem {
    /// Stable entry ID in string form.
    pub entry_id: String,
    /// Capture time in RFC 3339 with the device offset.
    pub captured_at: String,
    /// Remote image object reference.
    pub image_ref: String,
}

/// One month of the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveBucket {
    /// Display label such as `January 2025`.
    pub label: String,
    pub entries: Vec<EntryItem>,
}

/// One point of the mood trend chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodPoint {
    /// Calendar day as `YYYY-MM-DD`.
    pub day: String,
    pub rating: u8,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Created entry ID or checked-in day, when relevant.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: String) -> Self {
        Self {
            ok: true,
            id: Some(id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Mood trend response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodTrendResponse {
    pub ok: bool,
    /// Points ascending by day.
    pub points: Vec<MoodPoint>,
    /// Effective window after clamping.
    pub applied_window_days: u32,
    pub message: String,
}

/// Current-month recap response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRecapResponse {
    pub ok: bool,
    pub label: String,
    pub entries: Vec<EntryItem>,
    /// True when the month has no entries; UI shows its empty state.
    pub is_empty: bool,
    pub message: String,
}

/// Archive response envelope with buckets newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveResponse {
    pub ok: bool,
    pub buckets: Vec<ArchiveBucket>,
    pub is_empty: bool,
    pub message: String,
}

/// Quote shown on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteItem {
    pub text: String,
    pub author: String,
}

/// Records the mood check-in for `day`.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Out-of-range ratings are rejected and nothing is stored.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn mood_check_in(day: String, rating: i64) -> ActionResponse {
    let day = match parse_day(&day) {
        Ok(day) => day,
        Err(message) => {
            return ActionResponse::failure(format!("mood_check_in failed: {message}"))
        }
    };

    match with_session(|session| session.record_mood(day, rating)) {
        Ok(record) => ActionResponse::success(
            format!("Mood {} saved.", record.rating),
            record.day.format(DAY_FORMAT).to_string(),
        ),
        Err(err) => ActionResponse::failure(format!("mood_check_in failed: {err}")),
    }
}

/// Returns whether the check-in prompt should be shown for `day`.
///
/// Errors read as `true` so the prompt is never silently skipped.
#[flutter_rust_bridge::frb(sync)]
pub fn mood_needs_check_in(day: String) -> bool {
    let Ok(day) = parse_day(&day) else {
        return true;
    };
    with_session(|session| Ok(session.needs_check_in(day))).unwrap_or(true)
}

/// Returns mood points for the last `window_days` days up to `reference_day`.
///
/// `None` or `0` uses the configured default window; values above one year
/// are clamped.
#[flutter_rust_bridge::frb(sync)]
pub fn mood_trend(reference_day: String, window_days: Option<u32>) -> MoodTrendResponse {
    let applied_window_days = normalize_trend_window(window_days);
    let failure = |message: String| MoodTrendResponse {
        ok: false,
        points: Vec::new(),
        applied_window_days,
        message,
    };

    let reference = match parse_day(&reference_day) {
        Ok(day) => day,
        Err(message) => return failure(format!("mood_trend failed: {message}")),
    };

    match with_session(|session| Ok(session.mood_trend(reference, applied_window_days))) {
        Ok(records) => {
            let points: Vec<MoodPoint> = records
                .into_iter()
                .map(|record| MoodPoint {
                    day: record.day.format(DAY_FORMAT).to_string(),
                    rating: record.rating.value(),
                })
                .collect();
            let message = if points.is_empty() {
                "No mood data yet.".to_string()
            } else {
                format!("Found {} day(s).", points.len())
            };
            MoodTrendResponse {
                ok: true,
                points,
                applied_window_days,
                message,
            }
        }
        Err(err) => failure(format!("mood_trend failed: {err}")),
    }
}

/// Appends an entry whose photo was already uploaded by the host.
///
/// # FFI contract
/// - `captured_at` is RFC 3339 with the device offset.
/// - Never panics.
/// - Returns created entry ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn journal_import(captured_at: String, image_ref: String) -> ActionResponse {
    let timestamp = match DateTime::parse_from_rfc3339(captured_at.trim()) {
        Ok(timestamp) => timestamp,
        Err(err) => {
            return ActionResponse::failure(format!(
                "journal_import failed: invalid captured_at `{captured_at}`: {err}"
            ))
        }
    };

    match with_session(|session| session.import_entry(timestamp, image_ref.as_str())) {
        Ok(entry_id) => ActionResponse::success("Entry saved.", entry_id.to_string()),
        Err(err) => ActionResponse::failure(format!("journal_import failed: {err}")),
    }
}

/// Returns entries of the month containing `reference_day`.
#[flutter_rust_bridge::frb(sync)]
pub fn recap_current_month(reference_day: String) -> MonthRecapResponse {
    let failure = |message: String| MonthRecapResponse {
        ok: false,
        label: String::new(),
        entries: Vec::new(),
        is_empty: true,
        message,
    };

    let reference = match parse_day(&reference_day) {
        Ok(day) => day,
        Err(message) => return failure(format!("recap_current_month failed: {message}")),
    };

    match with_session(|session| Ok(session.monthly_recap(reference))) {
        Ok(recap) => {
            let is_empty = recap.is_empty();
            let message = if is_empty {
                "No entries this month.".to_string()
            } else {
                format!("Found {} entr(ies).", recap.entries.len())
            };
            MonthRecapResponse {
                ok: true,
                label: recap.label,
                entries: recap.entries.iter().map(to_entry_item).collect(),
                is_empty,
                message,
            }
        }
        Err(err) => failure(format!("recap_current_month failed: {err}")),
    }
}

/// Returns the full archive grouped by month, newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn recap_archive() -> ArchiveResponse {
    match with_session(|session| Ok(session.archive())) {
        Ok(archive) => {
            let buckets: Vec<ArchiveBucket> = archive
                .buckets()
                .into_iter()
                .map(|bucket| ArchiveBucket {
                    label: bucket.label,
                    entries: bucket.entries.iter().map(to_entry_item).collect(),
                })
                .collect();
            let is_empty = buckets.is_empty();
            let message = if is_empty {
                "Your archive is empty.".to_string()
            } else {
                format!("Found {} month(s).", buckets.len())
            };
            ArchiveResponse {
                ok: true,
                buckets,
                is_empty,
                message,
            }
        }
        Err(err) => ArchiveResponse {
            ok: false,
            buckets: Vec::new(),
            is_empty: true,
            message: format!("recap_archive failed: {err}"),
        },
    }
}

/// Rotates to another bundled quote.
#[flutter_rust_bridge::frb(sync)]
pub fn daily_quote() -> QuoteItem {
    let quotes = QUOTES.get_or_init(|| Mutex::new(RotatingQuotes::bundled()));
    let mut quotes = quotes
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let quote = quotes.next_quote();
    QuoteItem {
        text: quote.text.clone(),
        author: quote.author.clone(),
    }
}

fn parse_day(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), DAY_FORMAT)
        .map_err(|err| format!("invalid day `{value}`, expected YYYY-MM-DD: {err}"))
}

fn normalize_trend_window(window_days: Option<u32>) -> u32 {
    match window_days {
        Some(0) | None => core_config().trend_window_days,
        Some(value) if value > TREND_WINDOW_MAX => TREND_WINDOW_MAX,
        Some(value) => value,
    }
}

fn core_config() -> &'static CoreConfig {
    CORE_CONFIG.get_or_init(|| match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            warn!("event=config_load module=ffi status=fallback error={}", err);
            CoreConfig::default()
        }
    })
}

type FfiSession<'conn> =
    JournalSession<SqliteKeyValueStore<'conn>, SqliteJournalRepository<'conn>>;

fn with_session<T>(
    f: impl FnOnce(&mut FfiSession<'_>) -> Result<T, SessionError>,
) -> Result<T, String> {
    let _guard = SESSION_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let config = core_config();
    let conn = open_db(&config.db_path).map_err(|err| format!("journal DB open failed: {err}"))?;
    let kv = SqliteKeyValueStore::try_new(&conn)
        .map_err(|err| format!("mood store init failed: {err}"))?;
    let journal_repo = SqliteJournalRepository::try_new(&conn)
        .map_err(|err| format!("journal repo init failed: {err}"))?;
    let mut session = JournalSession::open(kv, journal_repo, config.mood_scale)
        .map_err(|err| format!("session open failed: {err}"))?;
    f(&mut session).map_err(|err| err.to_string())
}

fn to_entry_item(entry: &JournalEntry) -> EntryItem {
    EntryItem {
        entry_id: entry.id().to_string(),
        captured_at: entry.timestamp().to_rfc3339(),
        image_ref: entry.image_ref().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, daily_quote, init_logging, journal_import, mood_check_in,
        mood_needs_check_in, mood_trend, normalize_trend_window, ping, recap_archive,
        recap_current_month,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn mood_check_in_round_trips_through_trend() {
        let response = mood_check_in("2031-07-04".to_string(), 6);
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.id.as_deref(), Some("2031-07-04"));
        assert!(!mood_needs_check_in("2031-07-04".to_string()));

        let trend = mood_trend("2031-07-04".to_string(), Some(1));
        assert!(trend.ok, "{}", trend.message);
        assert_eq!(trend.applied_window_days, 1);
        assert!(trend
            .points
            .iter()
            .any(|point| point.day == "2031-07-04" && point.rating == 6));
    }

    #[test]
    fn mood_check_in_rejects_out_of_range_rating_and_bad_day() {
        let response = mood_check_in("2031-07-05".to_string(), 99);
        assert!(!response.ok);
        assert!(response.message.contains("outside the range"));

        let response = mood_check_in("July 5th".to_string(), 3);
        assert!(!response.ok);
        assert!(response.message.contains("YYYY-MM-DD"));
    }

    #[test]
    fn trend_window_is_clamped() {
        assert_eq!(normalize_trend_window(Some(10_000)), 366);
        assert_eq!(normalize_trend_window(Some(7)), 7);
    }

    #[test]
    fn imported_entry_appears_in_recap_and_archive() {
        let image_ref = format!("journalEntries/{}.jpg", unique_token("ffi-import"));
        let response = journal_import("2032-02-14T09:30:00+01:00".to_string(), image_ref.clone());
        assert!(response.ok, "{}", response.message);
        let entry_id = response.id.expect("import should return entry id");

        let recap = recap_current_month("2032-02-01".to_string());
        assert!(recap.ok, "{}", recap.message);
        assert_eq!(recap.label, "February 2032");
        assert!(!recap.is_empty);
        assert!(recap
            .entries
            .iter()
            .any(|item| item.entry_id == entry_id && item.image_ref == image_ref));

        let archive = recap_archive();
        assert!(archive.ok, "{}", archive.message);
        assert!(archive
            .buckets
            .iter()
            .any(|bucket| bucket.label == "February 2032"));
    }

    #[test]
    fn journal_import_rejects_bad_timestamp_and_blank_image() {
        let response = journal_import("yesterday".to_string(), "a.jpg".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("captured_at"));

        let response = journal_import("2032-02-14T09:30:00Z".to_string(), "  ".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("image reference"));
    }

    #[test]
    fn month_without_entries_reports_empty_state() {
        let recap = recap_current_month("1901-01-15".to_string());
        assert!(recap.ok, "{}", recap.message);
        assert!(recap.is_empty);
        assert_eq!(recap.label, "January 1901");
    }

    #[test]
    fn daily_quote_is_never_blank() {
        let quote = daily_quote();
        assert!(!quote.text.trim().is_empty());
        assert!(!quote.author.trim().is_empty());
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
