//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `momento_core` linkage.
//! - Print the archive of the configured database as `label=count` lines.

use momento_core::db::open_db;
use momento_core::{CoreConfig, JournalSession, SqliteJournalRepository, SqliteKeyValueStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("momento_core ping={}", momento_core::ping());
    println!("momento_core version={}", momento_core::core_version());

    match print_archive() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("momento_cli error={message}");
            ExitCode::FAILURE
        }
    }
}

fn print_archive() -> Result<(), String> {
    let config = CoreConfig::from_env().map_err(|err| err.to_string())?;
    let conn = open_db(&config.db_path).map_err(|err| err.to_string())?;
    let session = JournalSession::open(
        SqliteKeyValueStore::try_new(&conn).map_err(|err| err.to_string())?,
        SqliteJournalRepository::try_new(&conn).map_err(|err| err.to_string())?,
        config.mood_scale,
    )
    .map_err(|err| err.to_string())?;

    println!("momento_core db_path={}", config.db_path.display());
    let archive = session.archive();
    if archive.is_empty() {
        println!("archive=empty");
        return Ok(());
    }
    for label in archive.sorted_labels() {
        println!("{label}={}", archive.grouped_entries(label).len());
    }
    Ok(())
}
