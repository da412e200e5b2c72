//! Runtime configuration for hosts embedding the core.
//!
//! # Responsibility
//! - Resolve database/log locations, log level and mood scale from the
//!   environment with build-mode defaults.
//!
//! # Invariants
//! - Blank variables fall back to defaults.
//! - Malformed numeric values are reported, never silently replaced.

use crate::logging::default_log_level;
use crate::model::mood::{MoodScale, MoodValidationError, DEFAULT_MOOD_MAX, DEFAULT_MOOD_MIN};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "MOMENTO_DB_PATH";
pub const LOG_DIR_ENV: &str = "MOMENTO_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "MOMENTO_LOG_LEVEL";
pub const MOOD_MIN_ENV: &str = "MOMENTO_MOOD_MIN";
pub const MOOD_MAX_ENV: &str = "MOMENTO_MOOD_MAX";
pub const TREND_DAYS_ENV: &str = "MOMENTO_TREND_DAYS";

/// Default database file name under the temp directory.
pub const DEFAULT_DB_FILE_NAME: &str = "momento.sqlite3";
/// Default mood trend window, in days.
pub const DEFAULT_TREND_WINDOW_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
    InvalidScale(MoodValidationError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { key, value } => {
                write!(f, "`{key}` must be a non-negative integer, got `{value}`")
            }
            Self::InvalidScale(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidScale(err) => Some(err),
            Self::InvalidNumber { .. } => None,
        }
    }
}

/// Resolved core configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    /// `None` leaves file logging to the host.
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
    pub mood_scale: MoodScale,
    pub trend_window_days: u32,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_dir: None,
            log_level: default_log_level().to_string(),
            mood_scale: MoodScale::default(),
            trend_window_days: DEFAULT_TREND_WINDOW_DAYS,
        }
    }
}

impl CoreConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, one call per variable name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let mood_min = parse_number(MOOD_MIN_ENV, read(MOOD_MIN_ENV))?.unwrap_or(DEFAULT_MOOD_MIN);
        let mood_max = parse_number(MOOD_MAX_ENV, read(MOOD_MAX_ENV))?.unwrap_or(DEFAULT_MOOD_MAX);
        let mood_scale = MoodScale::new(mood_min, mood_max).map_err(ConfigError::InvalidScale)?;

        Ok(Self {
            db_path: read(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            log_dir: read(LOG_DIR_ENV).map(PathBuf::from),
            log_level: read(LOG_LEVEL_ENV).unwrap_or(defaults.log_level),
            mood_scale,
            trend_window_days: parse_number(TREND_DAYS_ENV, read(TREND_DAYS_ENV))?
                .unwrap_or(defaults.trend_window_days),
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ConfigError> {
    match value {
        None => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
    }
}
