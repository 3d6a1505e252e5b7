//! Reminder CLI commands

use std::collections::BTreeSet;

use anyhow::{bail, Result};
use chrono::{NaiveTime, Utc};
use clap::Subcommand;

use super::habit_cmd::find_habit;
use super::output::Output;
use crate::domain::{HabitReminder, ReminderId, Weekday};
use crate::storage::{Config, HabitStore};

#[derive(Subcommand)]
pub enum ReminderCommands {
    /// Add a reminder to a habit
    Add {
        /// Habit id or name
        habit: String,

        /// Time in HH:MM (default from config, usually 08:00)
        #[arg(long)]
        time: Option<String>,

        /// Days of the week, comma-separated (e.g. mon,wed,fri)
        #[arg(long, value_delimiter = ',')]
        days: Vec<Weekday>,
    },

    /// List a habit's reminders
    List {
        /// Habit id or name
        habit: String,
    },

    /// Enable or disable a reminder
    Toggle {
        /// Habit id or name
        habit: String,

        /// Reminder id
        id: ReminderId,
    },

    /// Remove a reminder
    Remove {
        /// Habit id or name
        habit: String,

        /// Reminder id
        id: ReminderId,
    },
}

pub fn run(cmd: ReminderCommands, output: &Output) -> Result<()> {
    match cmd {
        ReminderCommands::Add { habit, time, days } => add(output, &habit, time, days),
        ReminderCommands::List { habit } => list(output, &habit),
        ReminderCommands::Toggle { habit, id } => toggle(output, &habit, &id),
        ReminderCommands::Remove { habit, id } => remove(output, &habit, &id),
    }
}

fn add(output: &Output, key: &str, time: Option<String>, days: Vec<Weekday>) -> Result<()> {
    let config = Config::load()?;
    let store = HabitStore::in_dir(&config.data_dir()?);
    let mut habits = store.load()?;
    let index = find_habit(&habits, key)?;

    let time = time.unwrap_or_else(|| config.reminder.time.clone());
    if NaiveTime::parse_from_str(&time, "%H:%M").is_err() {
        bail!("Invalid time '{}': expected HH:MM", time);
    }

    let days: BTreeSet<Weekday> = if days.is_empty() {
        config.reminder.days.iter().copied().collect()
    } else {
        days.into_iter().collect()
    };

    let id = ReminderId::new(&habits[index].name, Utc::now());
    let Some(reminder) = HabitReminder::new(id, time, days) else {
        bail!("Select at least one day of the week");
    };

    let summary = serde_json::json!({
        "id": reminder.id.to_string(),
        "time": reminder.time,
        "days": reminder.days,
        "enabled": reminder.enabled,
    });
    let name = habits[index].name.clone();
    let display = format!("{} ({})", reminder.time, reminder.days_display());

    habits[index].add_reminder(reminder);
    store.save(&habits)?;

    if output.is_json() {
        output.data(&summary);
    } else {
        output.success(&format!("Added reminder for {}: {}", name, display));
    }

    Ok(())
}

fn list(output: &Output, key: &str) -> Result<()> {
    let store = HabitStore::open_default()?;
    let habits = store.load()?;
    let index = find_habit(&habits, key)?;
    let habit = &habits[index];

    if output.is_json() {
        output.data(&habit.reminders);
    } else if habit.reminders.is_empty() {
        println!("No reminders for {}", habit.name);
    } else {
        println!("{:<12} {:<7} {:<10} DAYS", "ID", "TIME", "STATUS");
        println!("{}", "-".repeat(50));
        for reminder in &habit.reminders {
            let status = if reminder.enabled { "on" } else { "off" };
            println!(
                "{:<12} {:<7} {:<10} {}",
                reminder.id,
                reminder.time,
                status,
                reminder.days_display()
            );
        }
    }

    Ok(())
}

fn toggle(output: &Output, key: &str, id: &ReminderId) -> Result<()> {
    let store = HabitStore::open_default()?;
    let mut habits = store.load()?;
    let index = find_habit(&habits, key)?;

    let Some(reminder) = habits[index].reminder_mut(id) else {
        bail!("Reminder not found: {}", id);
    };
    reminder.toggle();
    let state = if reminder.enabled { "enabled" } else { "disabled" };

    store.save(&habits)?;
    output.success(&format!("Reminder {} {}", id, state));

    Ok(())
}

fn remove(output: &Output, key: &str, id: &ReminderId) -> Result<()> {
    let store = HabitStore::open_default()?;
    let mut habits = store.load()?;
    let index = find_habit(&habits, key)?;

    if !habits[index].remove_reminder(id) {
        bail!("Reminder not found: {}", id);
    }

    store.save(&habits)?;
    output.success(&format!("Removed reminder {}", id));

    Ok(())
}
