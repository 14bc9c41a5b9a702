//! The birthday store - the authoritative, persisted collection of records.
//!
//! The store owns a plain `Vec<BirthdayRecord>` and synchronizes it to a
//! single keyed blob on every mutation. Each mutator ends with an explicit
//! `persist()` call so the save is visible at the mutation site rather
//! than hidden behind an observer. Persistence is best-effort from the
//! mutator's point of view: a failed write is logged and the in-memory
//! state stays authoritative for the process lifetime.

use crate::{
    core::recurrence,
    errors::{Error, Result},
    models::{BirthdayRecord, BirthdaySection},
    storage::BlobStore,
};
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Upper bound (inclusive) of the "This Week" bucket, in days.
const WEEK_CUTOFF: i64 = 7;
/// Upper bound (inclusive) of the "This Month" bucket, in days.
const MONTH_CUTOFF: i64 = 30;

/// Bucket titles, in the fixed order sections are emitted.
const SECTION_TITLES: [&str; 4] = ["Today", "This Week", "This Month", "Upcoming"];

/// Owns the collection of birthday records and its persisted encoding.
pub struct BirthdayStore {
    records: Vec<BirthdayRecord>,
    storage: Box<dyn BlobStore>,
    save_key: String,
}

impl BirthdayStore {
    /// Opens a store backed by `storage`, loading whatever is persisted
    /// under `save_key`.
    ///
    /// Missing or undecodable data is not an error: the store starts with
    /// an empty collection and logs the fallback. A fresh install and a
    /// corrupted blob both land here by design.
    pub fn open<K: Into<String>>(storage: Box<dyn BlobStore>, save_key: K) -> Self {
        let save_key = save_key.into();
        let records = match storage.read(&save_key) {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(records) => records,
                Err(e) => {
                    warn!(
                        "Stored birthday data under '{}' is undecodable, starting empty: {}",
                        save_key, e
                    );
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("No stored birthday data under '{}', starting empty", save_key);
                Vec::new()
            }
            Err(e) => {
                warn!(
                    "Failed to read stored birthday data under '{}', starting empty: {}",
                    save_key, e
                );
                Vec::new()
            }
        };

        info!("Birthday store loaded with {} records", records.len());
        Self {
            records,
            storage,
            save_key,
        }
    }

    /// All records, in insertion order. Display order is always derived
    /// via [`Self::sectioned`], never from this slice.
    #[must_use]
    pub fn records(&self) -> &[BirthdayRecord] {
        &self.records
    }

    /// Number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record and persists.
    ///
    /// No de-duplication happens here: two people may share a name and a
    /// date, so duplicates are permitted.
    pub fn add(&mut self, record: BirthdayRecord) {
        self.records.push(record);
        self.persist();
    }

    /// Removes every record whose id is in `ids`, persisting once for the
    /// whole batch. Ids that match nothing are ignored; if the batch
    /// removes nothing at all, no write happens.
    pub fn delete(&mut self, ids: &HashSet<Uuid>) {
        let before = self.records.len();
        self.records.retain(|record| !ids.contains(&record.id));
        let removed = before - self.records.len();

        if removed == 0 {
            debug!("Delete batch matched no records");
            return;
        }
        info!("Deleted {} birthday records", removed);
        self.persist();
    }

    /// Flips the close-friend flag on the record with `id` and persists.
    ///
    /// # Errors
    /// Returns [`Error::RecordNotFound`] if no record has that id; the
    /// collection is untouched in that case.
    pub fn toggle_close_friend(&mut self, id: Uuid) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(Error::RecordNotFound { id })?;

        record.is_close_friend = !record.is_close_friend;
        self.persist();
        Ok(())
    }

    /// Buckets every record by proximity of its next birthday relative to
    /// `reference`.
    ///
    /// Four sections come back in fixed order - Today (0 days), This Week
    /// (1-7), This Month (8-30), Upcoming (>30) - even when empty. Within
    /// a section, records sort ascending by days until next birthday; the
    /// sort is stable, so ties keep insertion order. The result is
    /// recomputed fresh on every call.
    #[must_use]
    pub fn sectioned(&self, reference: NaiveDate) -> Vec<BirthdaySection> {
        let mut buckets: [Vec<(i64, BirthdayRecord)>; 4] = Default::default();

        for record in &self.records {
            let days = recurrence::days_until_next_occurrence(record.date, reference);
            let bucket = match days {
                0 => &mut buckets[0],
                d if d <= WEEK_CUTOFF => &mut buckets[1],
                d if d <= MONTH_CUTOFF => &mut buckets[2],
                _ => &mut buckets[3],
            };
            bucket.push((days, record.clone()));
        }

        SECTION_TITLES
            .into_iter()
            .zip(buckets)
            .map(|(title, mut entries)| {
                entries.sort_by_key(|(days, _)| *days);
                BirthdaySection {
                    title,
                    records: entries.into_iter().map(|(_, record)| record).collect(),
                }
            })
            .collect()
    }

    /// Encodes the collection and writes it under the save key.
    ///
    /// Write failures are surfaced to the log, not to the caller: the
    /// in-memory mutation already happened and is never rolled back. The
    /// user-visible consequence is only that changes may not survive a
    /// restart.
    fn persist(&self) {
        let bytes = match serde_json::to_vec(&self.records) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to encode birthday records for persistence: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.write(&self.save_key, &bytes) {
            warn!(
                "Failed to persist birthday records, changes may not survive a restart: {}",
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        storage::MemoryStore,
        test_utils::{record_days_ahead, record_named, reference_date, setup_store},
    };
    use chrono::Days;

    #[test]
    fn test_open_with_no_stored_data_starts_empty() {
        let (_, store) = setup_store();
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_with_corrupted_blob_starts_empty() {
        let memory = MemoryStore::new();
        memory.preload("birthdays", b"not valid json {".to_vec());

        let store = BirthdayStore::open(Box::new(memory.clone()), "birthdays");
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_add_persists_and_round_trips() {
        let (memory, mut store) = setup_store();
        let record = record_named("Alice", reference_date());
        store.add(record.clone());

        // Reopen from the same backing storage
        let reopened = BirthdayStore::open(Box::new(memory), "birthdays");
        assert_eq!(reopened.records(), &[record]);
    }

    #[test]
    fn test_add_permits_duplicates_by_name_and_date() {
        let (_, mut store) = setup_store();
        store.add(record_named("Alice", reference_date()));
        store.add(record_named("Alice", reference_date()));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_removes_exactly_the_batch() {
        let (_, mut store) = setup_store();
        let a = record_named("Alice", reference_date());
        let b = record_named("Bob", reference_date());
        let c = record_named("Charlie", reference_date());
        store.add(a.clone());
        store.add(b.clone());
        store.add(c.clone());

        store.delete(&HashSet::from([a.id, c.id]));
        assert_eq!(store.records(), &[b]);
    }

    #[test]
    fn test_delete_batch_persists_once() {
        let (memory, mut store) = setup_store();
        let a = record_named("Alice", reference_date());
        let b = record_named("Bob", reference_date());
        store.add(a.clone());
        store.add(b.clone());

        let writes_before = memory.write_count();
        store.delete(&HashSet::from([a.id, b.id]));
        assert_eq!(memory.write_count(), writes_before + 1);
    }

    #[test]
    fn test_delete_unknown_id_is_a_no_op() {
        let (memory, mut store) = setup_store();
        store.add(record_named("Alice", reference_date()));

        let writes_before = memory.write_count();
        store.delete(&HashSet::from([Uuid::new_v4()]));
        assert_eq!(store.len(), 1);
        assert_eq!(memory.write_count(), writes_before);
    }

    #[test]
    fn test_toggle_close_friend_twice_restores_and_persists_each_time() {
        let (memory, mut store) = setup_store();
        let record = record_named("Alice", reference_date());
        let id = record.id;
        store.add(record);

        store.toggle_close_friend(id).unwrap();
        assert!(store.records()[0].is_close_friend);
        let persisted: Vec<BirthdayRecord> =
            serde_json::from_slice(&memory.snapshot("birthdays").unwrap()).unwrap();
        assert!(persisted[0].is_close_friend);

        store.toggle_close_friend(id).unwrap();
        assert!(!store.records()[0].is_close_friend);
        let persisted: Vec<BirthdayRecord> =
            serde_json::from_slice(&memory.snapshot("birthdays").unwrap()).unwrap();
        assert!(!persisted[0].is_close_friend);
    }

    #[test]
    fn test_toggle_close_friend_unknown_id_errors() {
        let (_, mut store) = setup_store();
        let missing = Uuid::new_v4();
        let result = store.toggle_close_friend(missing);
        assert!(matches!(
            result.unwrap_err(),
            Error::RecordNotFound { id } if id == missing
        ));
    }

    #[test]
    fn test_sectioned_emits_fixed_buckets_even_when_empty() {
        let (_, store) = setup_store();
        let sections = store.sectioned(reference_date());
        let titles: Vec<&str> = sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Today", "This Week", "This Month", "Upcoming"]);
        assert!(sections.iter().all(|s| s.records.is_empty()));
    }

    #[test]
    fn test_sectioned_buckets_by_day_windows() {
        let reference = reference_date();
        let (_, mut store) = setup_store();
        store.add(record_days_ahead("Today", 0, reference));
        store.add(record_days_ahead("Week", 7, reference));
        store.add(record_days_ahead("Month", 10, reference));
        store.add(record_days_ahead("Upcoming", 31, reference));

        let sections = store.sectioned(reference);
        assert_eq!(sections[0].records[0].name, "Today");
        assert_eq!(sections[1].records[0].name, "Week");
        assert_eq!(sections[2].records[0].name, "Month");
        assert_eq!(sections[3].records[0].name, "Upcoming");
        assert!(sections.iter().all(|s| s.records.len() == 1));
    }

    #[test]
    fn test_sectioned_is_a_partition() {
        let reference = reference_date();
        let (_, mut store) = setup_store();
        for offset in [0, 1, 5, 7, 8, 15, 30, 31, 100, 200] {
            store.add(record_days_ahead("Person", offset, reference));
        }

        let sections = store.sectioned(reference);
        let total: usize = sections.iter().map(|s| s.records.len()).sum();
        assert_eq!(total, store.len());

        let mut seen = HashSet::new();
        for section in &sections {
            for record in &section.records {
                assert!(seen.insert(record.id), "record appeared in two sections");
            }
        }
        assert_eq!(seen.len(), store.len());
    }

    #[test]
    fn test_sectioned_sorts_ascending_within_bucket() {
        let reference = reference_date();
        let (_, mut store) = setup_store();
        store.add(record_days_ahead("Later", 25, reference));
        store.add(record_days_ahead("Sooner", 9, reference));
        store.add(record_days_ahead("Middle", 14, reference));

        let month = &store.sectioned(reference)[2];
        let names: Vec<&str> = month.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Sooner", "Middle", "Later"]);
    }

    #[test]
    fn test_sectioned_ties_keep_insertion_order() {
        let reference = reference_date();
        let (_, mut store) = setup_store();
        store.add(record_days_ahead("First", 10, reference));
        store.add(record_days_ahead("Second", 10, reference));
        store.add(record_days_ahead("Third", 10, reference));

        let month = &store.sectioned(reference)[2];
        let names: Vec<&str> = month.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_far_future_stored_date_buckets_by_wrapped_day_count() {
        let reference = reference_date();
        // Stored 370 days out; the year is ignored, so the next
        // occurrence is the wrapped month/day only 5 days away.
        let far = reference.checked_add_days(Days::new(370)).unwrap();
        let (_, mut store) = setup_store();
        store.add(record_named("Wrapped", far));

        let sections = store.sectioned(reference);
        assert!(sections[0].records.is_empty());
        assert_eq!(sections[1].records.len(), 1);
        assert_eq!(sections[1].records[0].name, "Wrapped");
        assert!(sections[3].records.is_empty());
    }

    #[test]
    fn test_today_scenario() {
        let reference = reference_date();
        let (_, mut store) = setup_store();
        store.add(record_days_ahead("Birthday Person", 0, reference));

        let sections = store.sectioned(reference);
        assert_eq!(sections[0].records.len(), 1);
        assert!(sections[1..].iter().all(|s| s.records.is_empty()));
    }
}
