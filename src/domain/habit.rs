//! Habit domain model
//!
//! A habit is a named recurring activity with a history of per-day counts and
//! an optional reminder schedule. Timestamps (`created_at`, entry dates) are
//! carried as verbatim date-time strings rather than parsed `DateTime` values:
//! the CSV interchange format writes fields byte-for-byte with no quoting, and
//! exports produced by other tools must survive a round trip unchanged. The
//! calendar day of an entry is always the first 10 characters (`YYYY-MM-DD`)
//! of its date string.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::id::{HabitId, ReminderId};
use super::reminder::HabitReminder;

/// One calendar day's accumulated count for a habit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitEntry {
    /// Date-time string, kept verbatim
    pub date: String,

    /// Times the habit was tracked that day
    pub count: u32,
}

impl HabitEntry {
    /// The calendar-day key: the `YYYY-MM-DD` prefix of the date string
    pub fn day(&self) -> &str {
        day_of(&self.date)
    }
}

/// Extracts the `YYYY-MM-DD` prefix from a date-time string
pub fn day_of(date: &str) -> &str {
    date.get(..10).unwrap_or(date)
}

/// Formats a timestamp the way this tool writes date-time strings
/// (RFC 3339 with a `Z` suffix, e.g. `2024-01-01T07:30:00Z`)
pub fn timestamp_string(when: DateTime<Utc>) -> String {
    when.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// A tracked recurring activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier, also the join key in the CSV format
    pub id: HabitId,

    /// Display name, unique case-insensitively within a collection
    pub name: String,

    /// Creation date-time string, kept verbatim
    pub created_at: String,

    /// Per-day count history, at most one entry per calendar day
    #[serde(default)]
    pub entries: Vec<HabitEntry>,

    /// Reminder schedules
    #[serde(default)]
    pub reminders: Vec<HabitReminder>,
}

impl Habit {
    /// Creates a new habit with no entries or reminders
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        let name = name.into();
        Self {
            id: HabitId::new(&name, now),
            name,
            created_at: timestamp_string(now),
            entries: Vec::new(),
            reminders: Vec::new(),
        }
    }

    /// Records activity for the calendar day of `when`
    ///
    /// Same-day tracking accumulates into the existing entry rather than
    /// appending a second one, preserving the one-entry-per-day invariant.
    /// Returns the day's new total.
    pub fn track(&mut self, when: DateTime<Utc>, amount: u32) -> u32 {
        let stamp = timestamp_string(when);
        let day = day_of(&stamp).to_string();

        if let Some(entry) = self.entries.iter_mut().find(|e| e.day() == day) {
            entry.count = entry.count.saturating_add(amount);
            return entry.count;
        }

        self.entries.push(HabitEntry {
            date: stamp,
            count: amount,
        });
        amount
    }

    /// The count recorded for a given calendar day (`YYYY-MM-DD`), 0 if none
    pub fn count_on(&self, day: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.day() == day)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    /// Total count across all entries
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.count)).sum()
    }

    /// Adds a reminder schedule
    pub fn add_reminder(&mut self, reminder: HabitReminder) {
        self.reminders.push(reminder);
    }

    /// Finds a reminder by id
    pub fn reminder_mut(&mut self, id: &ReminderId) -> Option<&mut HabitReminder> {
        self.reminders.iter_mut().find(|r| &r.id == id)
    }

    /// Removes a reminder by id, returning true if one was removed
    pub fn remove_reminder(&mut self, id: &ReminderId) -> bool {
        let before = self.reminders.len();
        self.reminders.retain(|r| &r.id != id);
        self.reminders.len() < before
    }
}
