//! Daily reminder summaries for today's birthdays.
//!
//! The scheduler is a read-only consumer of the store: it looks at the
//! current records through the recurrence engine and produces the content
//! of the day's reminder, if there is one. Actually delivering it (and
//! the fixed daily trigger) belongs to the platform notification wrapper.
//! The scheduler is constructed explicitly and passed where it is needed;
//! there is no process-wide shared instance.

use crate::{core::recurrence, models::BirthdayRecord};
use chrono::NaiveDate;

/// Content of a daily birthday reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    /// Notification title
    pub title: String,
    /// Notification body naming today's celebrants
    pub body: String,
    /// Badge count: how many birthdays fall today
    pub badge: usize,
}

/// Produces daily reminder content at a configured hour.
#[derive(Debug, Clone, Copy)]
pub struct ReminderScheduler {
    hour: u32,
}

impl ReminderScheduler {
    /// Creates a scheduler that fires at `hour` (0-23) local time. Hours
    /// past 23 are clamped.
    #[must_use]
    pub const fn new(hour: u32) -> Self {
        Self {
            hour: if hour > 23 { 23 } else { hour },
        }
    }

    /// Hour of day the daily reminder is scheduled for.
    #[must_use]
    pub const fn scheduled_hour(&self) -> u32 {
        self.hour
    }

    /// Builds the reminder for `reference`'s date, or `None` when nobody
    /// has a birthday that day.
    #[must_use]
    pub fn daily_reminder(
        &self,
        records: &[BirthdayRecord],
        reference: NaiveDate,
    ) -> Option<Reminder> {
        let celebrants: Vec<&str> = records
            .iter()
            .filter(|record| recurrence::is_anniversary_today(record.date, reference))
            .map(|record| record.name.as_str())
            .collect();

        if celebrants.is_empty() {
            return None;
        }

        Some(Reminder {
            title: "Today's Birthdays 🎉".to_string(),
            body: format!("Wish a happy birthday to: {}", celebrants.join(", ")),
            badge: celebrants.len(),
        })
    }
}
