//! Journal entry repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist appended entries and reload them in insertion order.
//!
//! # Invariants
//! - Entries are insert-only; there is no update or delete path.
//! - `captured_at` is stored as RFC 3339 with the original offset.
//! - `list_entries` orders by insertion sequence.

use crate::model::entry::{ImageRef, JournalEntry};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use chrono::DateTime;
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

/// Repository interface for append-only journal entries.
pub trait JournalRepository {
    fn insert_entry(&self, entry: &JournalEntry) -> RepoResult<()>;
    fn list_entries(&self) -> RepoResult<Vec<JournalEntry>>;
}

/// SQLite-backed journal entry repository.
pub struct SqliteJournalRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteJournalRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "journal_entries")?;
        Ok(Self { conn })
    }
}

impl JournalRepository for SqliteJournalRepository<'_> {
    fn insert_entry(&self, entry: &JournalEntry) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO journal_entries (uuid, captured_at, image_ref)
             VALUES (?1, ?2, ?3);",
            params![
                entry.id().to_string(),
                entry.timestamp().to_rfc3339(),
                entry.image_ref().as_str(),
            ],
        )?;
        Ok(())
    }

    fn list_entries(&self) -> RepoResult<Vec<JournalEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, captured_at, image_ref
             FROM journal_entries
             ORDER BY seq ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }

        Ok(entries)
    }
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<JournalEntry> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid uuid value `{uuid_text}` in journal_entries.uuid"
        ))
    })?;

    let captured_text: String = row.get("captured_at")?;
    let timestamp = DateTime::parse_from_rfc3339(&captured_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid timestamp `{captured_text}` in journal_entries.captured_at"
        ))
    })?;

    let image_ref = ImageRef::new(row.get::<_, String>("image_ref")?)?;
    Ok(JournalEntry::with_id(id, timestamp, image_ref)?)
}
