//! Shared test utilities for `BirthdayBuddy`.
//!
//! This module provides common helper functions for building records
//! against a fixed reference date and for setting up stores backed by
//! inspectable in-memory storage.

#![allow(clippy::unwrap_used)]

use crate::{core::store::BirthdayStore, models::BirthdayRecord, storage::MemoryStore};
use chrono::{Datelike, Days, NaiveDate};

/// The fixed "today" used across tests: 2025-06-15.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

/// Creates a record with the given name and stored date.
pub fn record_named(name: &str, date: NaiveDate) -> BirthdayRecord {
    BirthdayRecord::new(name, date).unwrap()
}

/// Creates a record whose next birthday is exactly `days` after
/// `reference`. The stored year is pushed into the past to exercise the
/// year-is-ignored rule.
pub fn record_days_ahead(name: &str, days: u64, reference: NaiveDate) -> BirthdayRecord {
    let upcoming = reference.checked_add_days(Days::new(days)).unwrap();
    let birth_date = upcoming.with_year(1990).unwrap();
    record_named(name, birth_date)
}

/// Sets up an empty store over a fresh `MemoryStore`, returning both so
/// tests can inspect what was persisted.
pub fn setup_store() -> (MemoryStore, BirthdayStore) {
    let memory = MemoryStore::new();
    let store = BirthdayStore::open(Box::new(memory.clone()), "birthdays");
    (memory, store)
}
