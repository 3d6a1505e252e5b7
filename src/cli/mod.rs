//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Habits | Tracking lifecycle | `add`, `list`, `track`, `delete` |
//! | Reminders | Schedules | `reminder add`, `reminder toggle` |
//! | Transfer | CSV interchange | `export`, `import --strict` |
//! | Graph | Activity heatmap | `graph`, `graph --until 2024-06-15` |
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod habit_cmd;
mod reminder_cmd;
mod transfer;
mod graph_cmd;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
