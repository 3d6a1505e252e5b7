//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{graph_cmd, habit_cmd, reminder_cmd, transfer};

#[derive(Parser)]
#[command(name = "habit")]
#[command(author, version, about = "Local-first habit tracking with an activity heatmap")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new habit
    Add {
        /// Habit name
        name: String,
    },

    /// List habits with today's and total counts
    List,

    /// Record activity for a habit (accumulates within a day)
    Track {
        /// Habit id or name
        habit: String,

        /// How much to add to the day's count
        #[arg(long, default_value = "1")]
        count: u32,

        /// Calendar day to record against (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete a habit and its history
    Delete {
        /// Habit id or name
        habit: String,
    },

    /// Manage reminders
    #[command(subcommand)]
    Reminder(reminder_cmd::ReminderCommands),

    /// Show the activity heatmap for the last 365 days
    Graph {
        /// Last day of the window (default: today)
        #[arg(long)]
        until: Option<NaiveDate>,
    },

    /// Export all habits to a CSV file
    Export {
        /// Output path (default: habits_export_<today>.csv)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Import habits from a CSV file, replacing the current list
    Import {
        /// CSV file to import
        path: PathBuf,

        /// Reject files with any malformed row instead of repairing them
        #[arg(long)]
        strict: bool,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    match cli.command {
        Commands::Add { name } => habit_cmd::add(&output, &name)?,
        Commands::List => habit_cmd::list(&output)?,
        Commands::Track { habit, count, date } => {
            output.verbose(&format!(
                "Tracking {:?}: count={}, date={:?}",
                habit, count, date
            ));
            habit_cmd::track(&output, &habit, count, date)?
        }
        Commands::Delete { habit } => habit_cmd::delete(&output, &habit)?,
        Commands::Reminder(cmd) => reminder_cmd::run(cmd, &output)?,
        Commands::Graph { until } => graph_cmd::run(&output, until)?,
        Commands::Export { output: path } => transfer::export(&output, path)?,
        Commands::Import { path, strict } => {
            output.verbose(&format!(
                "Importing from {} (strict={})",
                path.display(),
                strict
            ));
            transfer::import(&output, &path, strict)?
        }
    }

    Ok(())
}
