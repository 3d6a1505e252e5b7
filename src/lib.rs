//! habit-cli - A local-first habit tracker
//!
//! Habits are recurring activities with one increment-counter entry per
//! calendar day. The library core is a CSV interchange codec (encode/decode
//! the habit/entry/reminder graph as a single flat table) and an activity
//! aggregator (sparse entries into a fixed 365-day heatmap window). Storage
//! and the CLI wrap that core with file I/O.

pub mod domain;
pub mod codec;
pub mod activity;
pub mod storage;
pub mod cli;

pub use domain::{Habit, HabitEntry, HabitId, HabitReminder, ReminderId, Weekday};
