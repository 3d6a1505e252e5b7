//! Reminder domain model
//!
//! A reminder is a scheduled nudge for a habit: a wall-clock time plus a
//! subset of weekdays. Delivering notifications is a platform concern and
//! lives outside this crate; the model only carries the schedule.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::id::ReminderId;

/// Day of the week a reminder fires on
///
/// Ordering follows declaration order (monday first), which gives reminder
/// day sets a stable, chronological iteration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Returns all weekdays in monday-first order
    pub fn all() -> &'static [Weekday] {
        &[
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ]
    }

    /// Lowercase token used in the CSV format (e.g. "monday")
    pub fn token(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Three-letter abbreviation for display (e.g. "Mon")
    pub fn abbrev(&self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" => Ok(Weekday::Monday),
            "tuesday" | "tue" => Ok(Weekday::Tuesday),
            "wednesday" | "wed" => Ok(Weekday::Wednesday),
            "thursday" | "thu" => Ok(Weekday::Thursday),
            "friday" | "fri" => Ok(Weekday::Friday),
            "saturday" | "sat" => Ok(Weekday::Saturday),
            "sunday" | "sun" => Ok(Weekday::Sunday),
            _ => Err(format!("Unknown weekday: {}", s)),
        }
    }
}

/// A scheduled reminder for a habit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitReminder {
    /// Unique identifier
    pub id: ReminderId,

    /// Wall-clock time in "HH:MM" form
    pub time: String,

    /// Weekdays the reminder fires on
    ///
    /// Non-empty when created through [`HabitReminder::new`]; an empty set is
    /// only reachable by decoding a malformed CSV export.
    pub days: BTreeSet<Weekday>,

    /// Whether the reminder is currently active
    pub enabled: bool,
}

impl HabitReminder {
    /// Creates an enabled reminder
    ///
    /// Returns `None` if `days` is empty: a reminder that never fires is a
    /// user error, not a valid schedule.
    pub fn new(id: ReminderId, time: impl Into<String>, days: BTreeSet<Weekday>) -> Option<Self> {
        if days.is_empty() {
            return None;
        }
        Some(Self {
            id,
            time: time.into(),
            days,
            enabled: true,
        })
    }

    /// Flips the enabled flag
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Days joined for display, e.g. "Mon, Wed, Fri"
    pub fn days_display(&self) -> String {
        self.days
            .iter()
            .map(|d| d.abbrev())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
