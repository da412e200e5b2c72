use chrono::{DateTime, NaiveDate};
use momento_core::db::{open_db, open_db_in_memory, schema_version, DbError, SCHEMA_VERSION};
use momento_core::{
    load_mood_ledger, ImageRef, JournalEntry, JournalRepository, MoodRating, MoodScale,
    SqliteJournalRepository, SqliteKeyValueStore, MOOD_DATA_KEY,
};
use rusqlite::{params, Connection};
use std::path::Path;

const KV_STORE_SQL: &str = include_str!("../src/db/migrations/0001_kv_store.sql");

#[test]
fn fresh_database_is_created_at_current_schema() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), SCHEMA_VERSION);
    assert!(SqliteKeyValueStore::try_new(&conn).is_ok());
    assert!(SqliteJournalRepository::try_new(&conn).is_ok());
}

#[test]
fn kv_only_database_upgrades_and_keeps_mood_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("momento.db");
    write_kv_only_database(&path);
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2);",
            params![
                MOOD_DATA_KEY,
                br#"[{"day":"2025-03-01","rating":7}]"#.as_slice()
            ],
        )
        .unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn).unwrap(), SCHEMA_VERSION);

    let kv = SqliteKeyValueStore::try_new(&conn).unwrap();
    let ledger = load_mood_ledger(&kv, MoodScale::default());
    let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    assert_eq!(ledger.rating_on(day).map(MoodRating::value), Some(7));

    let journal = SqliteJournalRepository::try_new(&conn).unwrap();
    assert!(journal.list_entries().unwrap().is_empty());
}

#[test]
fn failed_upgrade_rolls_back_to_previous_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clash.db");
    write_kv_only_database(&path);
    {
        // Leftover table without the columns the v2 index needs.
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("CREATE TABLE journal_entries (seq INTEGER);")
            .unwrap();
    }

    match open_db(&path).unwrap_err() {
        DbError::Migration { version, .. } => assert_eq!(version, 2),
        other => panic!("unexpected error: {other}"),
    }

    let conn = Connection::open(&path).unwrap();
    assert_eq!(schema_version(&conn).unwrap(), 1);
}

#[test]
fn blank_image_ref_is_rejected_by_schema() {
    let conn = open_db_in_memory().unwrap();
    let insert = "INSERT INTO journal_entries (uuid, captured_at, image_ref)
                  VALUES (?1, '2025-03-01T09:00:00+00:00', ?2);";

    assert!(conn.execute(insert, params!["a", "   "]).is_err());
    assert!(conn.execute(insert, params!["b", ""]).is_err());
    conn.execute(insert, params!["c", "journalEntries/c.jpg"])
        .unwrap();
}

#[test]
fn insertion_order_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("momento.db");
    // Newest capture first, so sequence order differs from time order.
    let stamps = [
        "2025-03-20T10:00:00+01:00",
        "2024-12-31T23:00:00-05:00",
        "2025-01-15T08:30:00Z",
    ];

    let inserted: Vec<_> = {
        let conn = open_db(&path).unwrap();
        let repo = SqliteJournalRepository::try_new(&conn).unwrap();
        stamps
            .iter()
            .enumerate()
            .map(|(i, stamp)| {
                let entry = JournalEntry::new(
                    DateTime::parse_from_rfc3339(stamp).unwrap(),
                    ImageRef::new(format!("journalEntries/{i}.jpg")).unwrap(),
                );
                repo.insert_entry(&entry).unwrap();
                entry
            })
            .collect()
    };

    let conn = open_db(&path).unwrap();
    let loaded = SqliteJournalRepository::try_new(&conn)
        .unwrap()
        .list_entries()
        .unwrap();
    assert_eq!(loaded, inserted);
}

#[test]
fn database_from_newer_build_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    {
        let conn = Connection::open(&path).unwrap();
        conn.pragma_update(None, "user_version", SCHEMA_VERSION + 1)
            .unwrap();
    }

    match open_db(&path).unwrap_err() {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, SCHEMA_VERSION + 1);
            assert_eq!(supported, SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn write_kv_only_database(path: &Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(KV_STORE_SQL).unwrap();
    conn.pragma_update(None, "user_version", 1u32).unwrap();
}
