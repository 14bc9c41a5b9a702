//! Birthday record and section data models.
//!
//! A [`BirthdayRecord`] is the unit of storage: an id, a display name, a
//! calendar date (only month and day matter for scheduling - the year is
//! stored but ignored), and a handful of optional presentation fields.
//! Records are encoded to JSON for persistence; optional fields carry
//! explicit serde defaults so that blobs written by older versions decode
//! cleanly instead of failing outright.

use crate::errors::{Error, Result};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single tracked birthday
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayRecord {
    /// Unique identifier, assigned at creation and never changed
    pub id: Uuid,
    /// Display name of the person (non-empty)
    pub name: String,
    /// Birthday date; scheduling only reads the month and day
    pub date: NaiveDate,
    /// Phone number, if known - gates message sending
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Close friend flag, toggled independently of other fields
    #[serde(default)]
    pub is_close_friend: bool,
    /// Preferred e-card style; a UI-entry convention for close friends
    #[serde(default)]
    pub preferred_card_style: Option<String>,
    /// Personal notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl BirthdayRecord {
    /// Creates a record with a fresh id, validating the display name.
    ///
    /// Empty (or whitespace-only) names are rejected here, at the creation
    /// boundary - the store itself accepts whatever it is handed.
    pub fn new(name: &str, date: NaiveDate) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidRecord {
                message: "name cannot be empty".to_string(),
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            date,
            phone_number: None,
            is_close_friend: false,
            preferred_card_style: None,
            notes: None,
        })
    }

    /// Sample records pinned relative to `reference`, used to seed an empty
    /// store when the configuration asks for sample data.
    #[must_use]
    pub fn sample_data(reference: NaiveDate) -> Vec<Self> {
        let offset = |days| reference.checked_add_days(Days::new(days)).unwrap_or(reference);

        vec![
            Self {
                id: Uuid::new_v4(),
                name: "Alice Johnson".to_string(),
                date: offset(0),
                phone_number: Some("1234567890".to_string()),
                is_close_friend: true,
                preferred_card_style: Some("Birthday Cake".to_string()),
                notes: Some("Loves chocolate cake and flowers".to_string()),
            },
            Self {
                id: Uuid::new_v4(),
                name: "Bob Smith".to_string(),
                date: offset(3),
                phone_number: Some("9876543210".to_string()),
                is_close_friend: false,
                preferred_card_style: Some("Balloons".to_string()),
                notes: Some("Work colleague".to_string()),
            },
            Self {
                id: Uuid::new_v4(),
                name: "Charlie Davis".to_string(),
                date: offset(15),
                phone_number: None,
                is_close_friend: true,
                preferred_card_style: Some("Gift Box".to_string()),
                notes: Some("Best friend since college".to_string()),
            },
        ]
    }
}

/// A named bucket of records grouped by proximity of their next birthday.
///
/// Sections are a derived view: recomputed fresh on every read, never
/// persisted, never mutated directly. Mutations go through the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BirthdaySection {
    /// Bucket title ("Today", "This Week", "This Month", "Upcoming")
    pub title: &'static str,
    /// Records in this bucket, sorted by days until next birthday
    pub records: Vec<BirthdayRecord>,
}
