//! # Activity Aggregation
//!
//! Turns sparse per-day habit entries into the fixed-shape data behind the
//! activity heatmap: a 365-day window of [`DayBucket`]s ending at a reference
//! date, positional 7-day week rows, month-label breakpoints, and the
//! count-to-intensity step function.
//!
//! Aggregation is a pure, total transform: it never fails, never mutates its
//! input, and an empty habit list simply yields 365 zero-count days.

use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::domain::Habit;

/// Length of the rolling window in calendar days
pub const WINDOW_DAYS: usize = 365;

/// Days per week row in the grid
pub const WEEK_LEN: usize = 7;

/// Highest intensity level; counts of 9 and beyond collapse into it
pub const MAX_INTENSITY: u8 = 9;

/// Aggregated activity for one calendar day in the window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    /// The calendar day
    pub date: NaiveDate,

    /// Sum of entry counts across all habits for this day
    pub count: u64,

    /// Names of habits with activity this day; each habit at most once
    pub habit_names: BTreeSet<String>,
}

/// A month boundary marker alongside the week grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthLabel {
    /// Three-letter month abbreviation, e.g. "Jan"
    pub label: String,

    /// Position of the month's first in-window day, 0-based
    pub day_index: usize,
}

/// The full aggregation result for one reference date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityGraph {
    /// Exactly [`WINDOW_DAYS`] buckets in chronological order
    pub days: Vec<DayBucket>,

    /// Month breakpoints; the first day always carries one at index 0
    pub month_labels: Vec<MonthLabel>,
}

impl ActivityGraph {
    /// Week rows: positional 7-day chunks of the window
    ///
    /// Boundaries are purely positional, not aligned to real weekdays.
    /// 365 is not a multiple of 7, so the final row holds a single day.
    pub fn weeks(&self) -> std::slice::Chunks<'_, DayBucket> {
        self.days.chunks(WEEK_LEN)
    }

    /// Number of week rows (always 53 for a 365-day window)
    pub fn week_count(&self) -> usize {
        self.days.len().div_ceil(WEEK_LEN)
    }

    /// Total tracked count across the whole window
    pub fn total_count(&self) -> u64 {
        self.days.iter().map(|d| d.count).sum()
    }
}

/// Maps a day's count to a discrete intensity level in `0..=9`
///
/// The step function is literal and non-decreasing: counts 0 through 8 map to
/// themselves, everything from 9 up collapses into level 9. The boundaries
/// are load-bearing for display parity and pinned by tests.
pub fn intensity(count: u64) -> u8 {
    match count {
        0..=8 => count as u8,
        _ => MAX_INTENSITY,
    }
}

/// Aggregates habit entries over the 365-day window ending at `reference`
pub fn aggregate(habits: &[Habit], reference: NaiveDate) -> ActivityGraph {
    // Group every entry by its calendar-day key. Entries whose day prefix is
    // not a valid date can never land in the window; skip them here.
    let mut by_day: HashMap<NaiveDate, (u64, BTreeSet<String>)> = HashMap::new();
    for habit in habits {
        for entry in &habit.entries {
            let Ok(day) = NaiveDate::parse_from_str(entry.day(), "%Y-%m-%d") else {
                continue;
            };
            let bucket = by_day.entry(day).or_default();
            bucket.0 += u64::from(entry.count);
            bucket.1.insert(habit.name.clone());
        }
    }

    let start = reference
        .checked_sub_days(Days::new(WINDOW_DAYS as u64 - 1))
        .unwrap_or(NaiveDate::MIN);

    let mut days = Vec::with_capacity(WINDOW_DAYS);
    let mut month_labels = Vec::new();
    let mut prev_month = None;

    for (day_index, date) in start.iter_days().take(WINDOW_DAYS).enumerate() {
        if prev_month != Some(date.month()) {
            prev_month = Some(date.month());
            month_labels.push(MonthLabel {
                label: date.format("%b").to_string(),
                day_index,
            });
        }

        let (count, habit_names) = by_day.remove(&date).unwrap_or_default();
        days.push(DayBucket {
            date,
            count,
            habit_names,
        });
    }

    ActivityGraph { days, month_labels }
}
