//! Contact import - turning entries from an external contact source into
//! candidate birthday records.
//!
//! The platform contacts API stays behind the [`ContactSource`] seam; the
//! core only ever sees name/month/day/phone tuples. The importer mirrors
//! the app's import sheet: fetch everything with a birthday, select all
//! by default, let the user deselect, then map the selection to
//! fully-formed records with fresh ids.

use crate::{
    errors::Result,
    models::BirthdayRecord,
};
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::warn;
use uuid::Uuid;

/// Records imported from contacts store this placeholder year, since only
/// the month and day carry meaning. 2000 is a leap year, so Feb 29
/// birthdays survive the mapping.
const IMPORT_YEAR: i32 = 2000;

/// A contact with a known birthday, as supplied by a [`ContactSource`].
/// Not yet a record: it has no id until the user confirms the import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCandidate {
    /// Display name from the contact card
    pub name: String,
    /// Birthday month (1-12)
    pub month: u32,
    /// Birthday day of month (1-31)
    pub day: u32,
    /// First phone number on the contact card, if any
    pub phone_number: Option<String>,
}

/// Supplies contact birthday candidates on demand. Implemented by the
/// platform contacts wrapper; tests use [`StaticContactSource`].
pub trait ContactSource {
    /// Fetches every contact that has a birthday set.
    fn fetch_birthdays(&self) -> Result<Vec<ContactCandidate>>;
}

/// A fixed, in-memory contact source for tests and sample runs.
#[derive(Debug, Default)]
pub struct StaticContactSource {
    candidates: Vec<ContactCandidate>,
}

impl StaticContactSource {
    /// Creates a source that always returns `candidates`.
    #[must_use]
    pub fn new(candidates: Vec<ContactCandidate>) -> Self {
        Self { candidates }
    }
}

impl ContactSource for StaticContactSource {
    fn fetch_birthdays(&self) -> Result<Vec<ContactCandidate>> {
        Ok(self.candidates.clone())
    }
}

/// Holds fetched candidates and the user's selection while an import is
/// in progress.
#[derive(Debug, Default)]
pub struct ContactImporter {
    candidates: Vec<(Uuid, ContactCandidate)>,
    selected: HashSet<Uuid>,
}

impl ContactImporter {
    /// Creates an importer with no candidates loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches candidates from `source`, replacing any previous batch.
    /// Every candidate starts selected, matching the import sheet's
    /// default.
    pub fn load_from<S: ContactSource>(&mut self, source: &S) -> Result<()> {
        let fetched = source.fetch_birthdays()?;
        self.candidates = fetched
            .into_iter()
            .map(|candidate| (Uuid::new_v4(), candidate))
            .collect();
        self.selected = self.candidates.iter().map(|(id, _)| *id).collect();
        Ok(())
    }

    /// The loaded candidates with their selection handles.
    #[must_use]
    pub fn candidates(&self) -> &[(Uuid, ContactCandidate)] {
        &self.candidates
    }

    /// Marks a candidate as selected for import.
    pub fn select(&mut self, id: Uuid) {
        if self.candidates.iter().any(|(cid, _)| *cid == id) {
            self.selected.insert(id);
        }
    }

    /// Removes a candidate from the import selection.
    pub fn deselect(&mut self, id: Uuid) {
        self.selected.remove(&id);
    }

    /// Maps the current selection to birthday records with fresh ids.
    ///
    /// Candidates whose month/day pair is impossible (or whose name is
    /// empty) are skipped with a warning rather than failing the whole
    /// import.
    #[must_use]
    pub fn selected_records(&self) -> Vec<BirthdayRecord> {
        self.candidates
            .iter()
            .filter(|(id, _)| self.selected.contains(id))
            .filter_map(|(_, candidate)| {
                let Some(date) = NaiveDate::from_ymd_opt(IMPORT_YEAR, candidate.month, candidate.day)
                else {
                    warn!(
                        "Skipping contact '{}' with impossible birthday {}/{}",
                        candidate.name, candidate.month, candidate.day
                    );
                    return None;
                };

                match BirthdayRecord::new(&candidate.name, date) {
                    Ok(mut record) => {
                        record.phone_number = candidate.phone_number.clone();
                        Some(record)
                    }
                    Err(e) => {
                        warn!("Skipping unimportable contact: {}", e);
                        None
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::Datelike;

    fn candidate(name: &str, month: u32, day: u32, phone: Option<&str>) -> ContactCandidate {
        ContactCandidate {
            name: name.to_string(),
            month,
            day,
            phone_number: phone.map(String::from),
        }
    }

    fn loaded_importer(candidates: Vec<ContactCandidate>) -> ContactImporter {
        let source = StaticContactSource::new(candidates);
        let mut importer = ContactImporter::new();
        importer.load_from(&source).unwrap();
        importer
    }

    #[test]
    fn test_load_selects_everything_by_default() {
        let importer = loaded_importer(vec![
            candidate("Alice", 6, 15, Some("1234567890")),
            candidate("Bob", 12, 1, None),
        ]);

        let records = importer.selected_records();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_deselected_candidates_are_excluded() {
        let mut importer = loaded_importer(vec![
            candidate("Alice", 6, 15, None),
            candidate("Bob", 12, 1, None),
        ]);

        let bob_id = importer
            .candidates()
            .iter()
            .find(|(_, c)| c.name == "Bob")
            .map(|(id, _)| *id)
            .unwrap();
        importer.deselect(bob_id);

        let records = importer.selected_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Alice");

        importer.select(bob_id);
        assert_eq!(importer.selected_records().len(), 2);
    }

    #[test]
    fn test_mapping_uses_placeholder_year_and_fresh_ids() {
        let importer = loaded_importer(vec![
            candidate("Alice", 6, 15, Some("1234567890")),
            candidate("Leap", 2, 29, None),
        ]);

        let records = importer.selected_records();
        assert_eq!(records[0].date.year(), 2000);
        assert_eq!(records[0].phone_number, Some("1234567890".to_string()));
        // Feb 29 survives because the placeholder year is a leap year
        assert_eq!(records[1].date.month(), 2);
        assert_eq!(records[1].date.day(), 29);
        assert_ne!(records[0].id, records[1].id);
    }

    #[test]
    fn test_impossible_birthdays_are_skipped() {
        let importer = loaded_importer(vec![
            candidate("Broken", 13, 40, None),
            candidate("Fine", 1, 31, None),
        ]);

        let records = importer.selected_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Fine");
    }

    #[test]
    fn test_nameless_contacts_are_skipped() {
        let importer = loaded_importer(vec![
            candidate("", 5, 5, None),
            candidate("Named", 5, 5, None),
        ]);

        let records = importer.selected_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Named");
    }
}
