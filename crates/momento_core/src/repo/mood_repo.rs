//! Mood ledger persistence over the key-value contract.
//!
//! # Responsibility
//! - Encode the ledger as a JSON array of `{ day, rating }` pairs under the
//!   `mood data` key.
//! - Load it leniently at session start.
//!
//! # Invariants
//! - A missing, unreadable or corrupt snapshot loads as an empty ledger.
//! - Persisted ratings outside the active scale are dropped on load, never
//!   stored into the ledger.

use crate::journal::mood_ledger::MoodLedger;
use crate::model::mood::{MoodRating, MoodRecord, MoodScale};
use crate::repo::kv_store::KeyValueStore;
use crate::repo::RepoResult;
use chrono::NaiveDate;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Key of the mood ledger snapshot.
pub const MOOD_DATA_KEY: &str = "mood data";

#[derive(Debug, Serialize, Deserialize)]
struct StoredMoodRecord {
    day: NaiveDate,
    rating: i64,
}

/// Encodes ledger records into the persisted JSON shape.
pub fn encode_mood_records(records: &[MoodRecord]) -> RepoResult<Vec<u8>> {
    let stored: Vec<StoredMoodRecord> = records
        .iter()
        .map(|record| StoredMoodRecord {
            day: record.day,
            rating: i64::from(record.rating.value()),
        })
        .collect();
    Ok(serde_json::to_vec(&stored)?)
}

/// Decodes persisted JSON, dropping ratings that fail `scale` validation.
///
/// # Errors
/// - `RepoError::Encoding` when the payload is not the expected JSON shape.
pub fn decode_mood_records(bytes: &[u8], scale: MoodScale) -> RepoResult<Vec<MoodRecord>> {
    let stored: Vec<StoredMoodRecord> = serde_json::from_slice(bytes)?;
    let mut records = Vec::with_capacity(stored.len());
    for item in stored {
        match MoodRating::new(item.rating, scale) {
            Ok(rating) => records.push(MoodRecord::new(item.day, rating)),
            Err(err) => warn!(
                "event=mood_load module=repo status=skip day={} error={}",
                item.day, err
            ),
        }
    }
    Ok(records)
}

/// Loads the ledger snapshot, falling back to an empty ledger.
pub fn load_mood_ledger(store: &impl KeyValueStore, scale: MoodScale) -> MoodLedger {
    let bytes = match store.get(MOOD_DATA_KEY) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            info!("event=mood_load module=repo status=empty reason=absent");
            return MoodLedger::new();
        }
        Err(err) => {
            warn!(
                "event=mood_load module=repo status=fallback error_code=read_failed error={}",
                err
            );
            return MoodLedger::new();
        }
    };

    match decode_mood_records(&bytes, scale) {
        Ok(records) => {
            let ledger = MoodLedger::from_records(records);
            info!(
                "event=mood_load module=repo status=ok records={}",
                ledger.len()
            );
            ledger
        }
        Err(err) => {
            warn!(
                "event=mood_load module=repo status=fallback error_code=decode_failed error={}",
                err
            );
            MoodLedger::new()
        }
    }
}

/// Flushes the full ledger snapshot.
pub fn save_mood_ledger(store: &mut impl KeyValueStore, ledger: &MoodLedger) -> RepoResult<()> {
    let bytes = encode_mood_records(&ledger.records())?;
    store.put(MOOD_DATA_KEY, &bytes)
}
