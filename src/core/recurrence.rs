//! Pure recurrence arithmetic for annual month/day patterns.
//!
//! A birthday is a pattern defined solely by month and day, repeating
//! every year independent of the stored year value. Every function here
//! takes an explicit reference date rather than reading the system clock,
//! so callers (and tests) control what "today" means. All arithmetic is
//! whole-day: `NaiveDate` has no time component, so "start of day"
//! comparisons reduce to plain date ordering.

use chrono::{Datelike, NaiveDate};

/// Returns true iff `subject`'s month and day equal `reference`'s.
///
/// The year is ignored entirely. This match is deliberately literal:
/// a Feb 29 subject only matches a Feb 29 reference, never Feb 28 or
/// Mar 1.
#[must_use]
pub fn is_anniversary_today(subject: NaiveDate, reference: NaiveDate) -> bool {
    subject.month() == reference.month() && subject.day() == reference.day()
}

/// The next real calendar date on which `subject`'s month/day pattern
/// falls, relative to `reference`.
///
/// Constructs the pattern in `reference`'s year; if that date is strictly
/// before `reference`, advances one year. The result is always on or
/// after `reference`. Feb 29 subjects resolve to Mar 1 in non-leap
/// target years.
#[must_use]
pub fn next_occurrence(subject: NaiveDate, reference: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(subject, reference.year());
    if this_year < reference {
        occurrence_in_year(subject, reference.year() + 1)
    } else {
        this_year
    }
}

/// Whole days from `reference` until the next occurrence of `subject`'s
/// pattern. Always >= 0; 0 on the anniversary itself.
#[must_use]
pub fn days_until_next_occurrence(subject: NaiveDate, reference: NaiveDate) -> i64 {
    (next_occurrence(subject, reference) - reference).num_days()
}

/// Places `subject`'s month/day in `year`. The only (month, day) pair
/// valid in some years but not others is Feb 29, which lands on Mar 1.
fn occurrence_in_year(subject: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, subject.month(), subject.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(subject)
}
