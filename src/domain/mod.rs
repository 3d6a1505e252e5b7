//! Domain models for habit-cli
//!
//! Contains the core business logic without any I/O concerns.

mod id;
mod habit;
mod reminder;

pub use id::{HabitId, IdError, ReminderId};
pub use habit::{day_of, timestamp_string, Habit, HabitEntry};
pub use reminder::{HabitReminder, Weekday};
