//! ID newtypes for habits and reminders
//!
//! ID Format (as generated by this tool):
//! - Habit IDs: `h-{7-char-hash}` (e.g., `h-7f2b4c1`)
//! - Reminder IDs: `r-{7-char-hash}` (e.g., `r-9d3e5f2`)
//!
//! Hash is derived from name + creation timestamp, ensuring uniqueness.
//!
//! Unlike the generated form, the *parsed* form is deliberately loose: the CSV
//! interchange format carries ids written by other tools (numeric timestamps,
//! UUIDs, anything), so any non-empty string is a valid id. Only emptiness is
//! rejected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("ID must not be empty")]
    Empty,
}

/// Generates a 7-character hash from a name and timestamp
fn generate_hash(name: &str, timestamp: DateTime<Utc>) -> String {
    let input = format!("{}{}", name, timestamp.timestamp_nanos_opt().unwrap_or(0));
    let hash = blake3::hash(input.as_bytes());
    let hex = hash.to_hex();
    hex[..7].to_string()
}

/// Habit ID - generated as `h-{7-char-hash}`, parsed as any non-empty string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HabitId(String);

impl HabitId {
    /// Creates a new habit ID from name and timestamp
    pub fn new(name: &str, timestamp: DateTime<Utc>) -> Self {
        Self(format!("h-{}", generate_hash(name, timestamp)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HabitId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for HabitId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HabitId> for String {
    fn from(id: HabitId) -> Self {
        id.0
    }
}

/// Reminder ID - generated as `r-{7-char-hash}`, parsed as any non-empty string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReminderId(String);

impl ReminderId {
    /// Creates a new reminder ID from the habit name and timestamp
    pub fn new(habit_name: &str, timestamp: DateTime<Utc>) -> Self {
        Self(format!("r-{}", generate_hash(habit_name, timestamp)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReminderId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for ReminderId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReminderId> for String {
    fn from(id: ReminderId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn habit_id_format_is_correct() {
        let id = HabitId::new("Run", Utc::now());
        let s = id.to_string();

        assert!(s.starts_with("h-"));
        assert_eq!(s.len(), 9); // "h-" + 7 chars
    }

    #[test]
    fn habit_id_generation_is_unique_for_different_timestamps() {
        let name = "Same Name";
        let ts1 = Utc::now();
        let ts2 = ts1 + chrono::Duration::nanoseconds(1);

        assert_ne!(HabitId::new(name, ts1), HabitId::new(name, ts2));
    }

    #[test]
    fn habit_id_accepts_foreign_ids() {
        // ids written by other exporters survive unchanged
        let id: HabitId = "1712345678901".parse().unwrap();
        assert_eq!(id.as_str(), "1712345678901");
    }

    #[test]
    fn habit_id_rejects_empty() {
        assert_eq!("".parse::<HabitId>(), Err(IdError::Empty));
        assert_eq!("   ".parse::<HabitId>(), Err(IdError::Empty));
    }

    #[test]
    fn reminder_id_format_is_correct() {
        let id = ReminderId::new("Run", Utc::now());
        let s = id.to_string();

        assert!(s.starts_with("r-"));
        assert_eq!(s.len(), 9);
    }

    #[test]
    fn serde_roundtrip_habit_id() {
        let original = HabitId::new("Test", Utc::now());
        let json = serde_json::to_string(&original).unwrap();
        let parsed: HabitId = serde_json::from_str(&json).unwrap();

        assert_eq!(original, parsed);
    }

    #[test]
    fn serde_roundtrip_reminder_id() {
        let original = ReminderId::new("Test", Utc::now());
        let json = serde_json::to_string(&original).unwrap();
        let parsed: ReminderId = serde_json::from_str(&json).unwrap();

        assert_eq!(original, parsed);
    }
}
