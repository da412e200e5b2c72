use chrono::{DateTime, NaiveDate};
use futures::executor::block_on;
use futures::FutureExt;
use momento_core::db::open_db;
use momento_core::{
    ImageUploader, JournalSession, KeyValueStore, MoodScale, PendingUpload,
    SqliteJournalRepository, SqliteKeyValueStore, UploadError, MOOD_DATA_KEY,
};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct RecordingUploader {
    uploads: Arc<Mutex<Vec<(String, usize)>>>,
}

impl ImageUploader for RecordingUploader {
    fn upload(&self, object_name: String, bytes: Vec<u8>) -> PendingUpload {
        let uploads = Arc::clone(&self.uploads);
        async move {
            uploads.lock().unwrap().push((object_name, bytes.len()));
            Ok::<(), UploadError>(())
        }
        .boxed()
    }
}

#[test]
fn mood_and_entries_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("momento.db");
    let today = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
    let uploader = RecordingUploader::default();

    let captured_id = {
        let conn = open_db(&path).unwrap();
        let mut session = JournalSession::open(
            SqliteKeyValueStore::try_new(&conn).unwrap(),
            SqliteJournalRepository::try_new(&conn).unwrap(),
            MoodScale::default(),
        )
        .unwrap();

        assert!(session.needs_check_in(today));
        session.record_mood(today, 3).unwrap();
        session.record_mood(today, 8).unwrap();

        let captured = session
            .capture_entry(
                DateTime::parse_from_rfc3339("2025-03-20T08:30:00+01:00").unwrap(),
                vec![1, 2, 3],
                &uploader,
            )
            .unwrap();
        block_on(captured.upload).unwrap();
        session
            .import_entry(
                DateTime::parse_from_rfc3339("2025-02-11T12:00:00+01:00").unwrap(),
                "journalEntries/library.jpg",
            )
            .unwrap();
        captured.entry_id
    };

    let conn = open_db(&path).unwrap();
    let session = JournalSession::open(
        SqliteKeyValueStore::try_new(&conn).unwrap(),
        SqliteJournalRepository::try_new(&conn).unwrap(),
        MoodScale::default(),
    )
    .unwrap();

    assert!(!session.needs_check_in(today));
    let trend = session.mood_trend(today, 30);
    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0].rating.value(), 8);

    let recap = session.monthly_recap(today);
    assert_eq!(recap.label, "March 2025");
    assert_eq!(recap.entries.len(), 1);
    assert_eq!(recap.entries[0].id(), captured_id);

    let archive = session.archive();
    assert_eq!(archive.sorted_labels(), ["March 2025", "February 2025"]);

    let uploads = uploader.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].0, recap.entries[0].image_ref().as_str());
    assert_eq!(uploads[0].1, 3);
}

#[test]
fn corrupt_mood_snapshot_starts_with_empty_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("corrupt.db")).unwrap();
    SqliteKeyValueStore::try_new(&conn)
        .unwrap()
        .put(MOOD_DATA_KEY, b"\x00garbage")
        .unwrap();

    let session = JournalSession::open(
        SqliteKeyValueStore::try_new(&conn).unwrap(),
        SqliteJournalRepository::try_new(&conn).unwrap(),
        MoodScale::default(),
    )
    .unwrap();

    assert!(session.ledger().is_empty());
}

#[test]
fn narrower_scale_drops_persisted_out_of_range_ratings() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("scale.db")).unwrap();
    let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

    {
        let mut session = JournalSession::open(
            SqliteKeyValueStore::try_new(&conn).unwrap(),
            SqliteJournalRepository::try_new(&conn).unwrap(),
            MoodScale::default(),
        )
        .unwrap();
        session.record_mood(day, 9).unwrap();
    }

    let session = JournalSession::open(
        SqliteKeyValueStore::try_new(&conn).unwrap(),
        SqliteJournalRepository::try_new(&conn).unwrap(),
        MoodScale::new(1, 5).unwrap(),
    )
    .unwrap();
    assert!(session.ledger().is_empty());
}
