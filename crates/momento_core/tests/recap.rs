use chrono::{DateTime, NaiveDate};
use momento_core::{
    current_month, parse_month_label, ImageRef, JournalEntry, JournalStore, MonthlyRecap,
    RecapGrouper, YearMonth,
};

fn append(store: &mut JournalStore, rfc3339: &str) {
    store.append(
        DateTime::parse_from_rfc3339(rfc3339).unwrap(),
        ImageRef::new(format!("journalEntries/{rfc3339}.jpg")).unwrap(),
    );
}

#[test]
fn current_month_keeps_matching_entries_in_original_order() {
    let mut store = JournalStore::new();
    append(&mut store, "2025-03-15T09:00:00Z");
    append(&mut store, "2025-03-31T21:00:00Z");
    append(&mut store, "2025-04-01T06:00:00Z");
    let entries = store.all();

    let reference = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
    let filtered = current_month(&entries, reference);

    assert_eq!(filtered, vec![entries[0].clone(), entries[1].clone()]);
}

#[test]
fn archive_groups_december_entries_under_one_label() {
    let mut store = JournalStore::new();
    append(&mut store, "2024-12-10T09:00:00Z");
    append(&mut store, "2025-01-05T09:00:00Z");
    append(&mut store, "2024-12-28T09:00:00Z");
    let entries = store.all();

    let grouper = RecapGrouper::new(&entries);

    assert_eq!(grouper.len(), 2);
    assert_eq!(grouper.sorted_labels(), ["January 2025", "December 2024"]);
    let december: Vec<&JournalEntry> = grouper.grouped_entries("December 2024").iter().collect();
    assert_eq!(december, vec![&entries[0], &entries[2]]);
}

#[test]
fn every_archive_label_parses_back_to_its_month() {
    let mut store = JournalStore::new();
    append(&mut store, "2023-02-01T00:00:00Z");
    append(&mut store, "2024-11-30T23:59:59Z");
    let grouper = RecapGrouper::new(&store.all());

    let months: Vec<YearMonth> = grouper
        .sorted_labels()
        .iter()
        .map(|label| parse_month_label(label).unwrap())
        .collect();
    assert_eq!(
        months,
        vec![
            YearMonth::new(2024, 11).unwrap(),
            YearMonth::new(2023, 2).unwrap()
        ]
    );
}

#[test]
fn empty_store_yields_empty_recap_and_archive() {
    let store = JournalStore::new();
    let entries = store.all();
    let reference = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();

    assert!(current_month(&entries, reference).is_empty());
    assert!(MonthlyRecap::for_month(&entries, reference).is_empty());

    let grouper = RecapGrouper::new(&entries);
    assert!(grouper.is_empty());
    assert!(grouper.sorted_labels().is_empty());
}
