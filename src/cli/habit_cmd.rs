//! Habit CLI commands: add, list, track, delete

use anyhow::{bail, Result};
use chrono::{NaiveDate, NaiveTime, Utc};

use super::output::Output;
use crate::codec::RESERVED_CHARS;
use crate::domain::{day_of, timestamp_string, Habit};
use crate::storage::HabitStore;

/// Finds a habit by exact id or case-insensitive name
pub(super) fn find_habit(habits: &[Habit], key: &str) -> Result<usize> {
    habits
        .iter()
        .position(|h| h.id.as_str() == key)
        .or_else(|| habits.iter().position(|h| h.name.eq_ignore_ascii_case(key)))
        .ok_or_else(|| anyhow::anyhow!("Habit not found: {}", key))
}

pub fn add(output: &Output, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Habit name cannot be empty");
    }
    if name.contains(RESERVED_CHARS) {
        // The CSV export format has no quoting; keep names exportable.
        bail!("Habit name cannot contain ',', '|', or a newline");
    }

    let store = HabitStore::open_default()?;
    let mut habits = store.load()?;

    if habits.iter().any(|h| h.name.eq_ignore_ascii_case(name)) {
        bail!("A habit with this name already exists");
    }

    let habit = Habit::new(name, Utc::now());
    let summary = serde_json::json!({
        "id": habit.id.to_string(),
        "name": habit.name,
        "created_at": habit.created_at,
    });

    habits.push(habit);
    store.save(&habits)?;

    if output.is_json() {
        output.data(&summary);
    } else {
        output.success(&format!("Added habit: {}", name));
    }

    Ok(())
}

pub fn list(output: &Output) -> Result<()> {
    let store = HabitStore::open_default()?;
    let habits = store.load()?;

    let today = timestamp_string(Utc::now());
    let today = day_of(&today).to_string();

    if output.is_json() {
        let items: Vec<_> = habits
            .iter()
            .map(|h| {
                serde_json::json!({
                    "id": h.id.to_string(),
                    "name": h.name,
                    "created_at": h.created_at,
                    "today": h.count_on(&today),
                    "total": h.total_count(),
                    "reminders": h.reminders.len(),
                })
            })
            .collect();
        output.data(&items);
    } else if habits.is_empty() {
        println!("No habits yet. Add one with 'habit add <name>'.");
    } else {
        println!("{:<24} {:>6} {:>7}  ID", "NAME", "TODAY", "TOTAL");
        println!("{}", "-".repeat(52));
        for habit in &habits {
            println!(
                "{:<24} {:>6} {:>7}  {}",
                habit.name,
                habit.count_on(&today),
                habit.total_count(),
                habit.id
            );
        }
    }

    Ok(())
}

pub fn track(output: &Output, key: &str, count: u32, date: Option<NaiveDate>) -> Result<()> {
    if count == 0 {
        bail!("Count must be at least 1");
    }

    let store = HabitStore::open_default()?;
    let mut habits = store.load()?;
    let index = find_habit(&habits, key)?;

    // Backfilled days get a midnight timestamp; "today" gets the real one.
    let when = match date {
        Some(date) => date.and_time(NaiveTime::MIN).and_utc(),
        None => Utc::now(),
    };

    let day_total = habits[index].track(when, count);
    let name = habits[index].name.clone();
    store.save(&habits)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": habits[index].id.to_string(),
            "name": name,
            "day": day_of(&timestamp_string(when)),
            "day_total": day_total,
        }));
    } else {
        output.success(&format!("Tracked {}: {} today", name, day_total));
    }

    Ok(())
}

pub fn delete(output: &Output, key: &str) -> Result<()> {
    let store = HabitStore::open_default()?;
    let mut habits = store.load()?;
    let index = find_habit(&habits, key)?;

    let removed = habits.remove(index);
    store.save(&habits)?;

    output.success(&format!("Deleted habit: {}", removed.name));
    Ok(())
}
