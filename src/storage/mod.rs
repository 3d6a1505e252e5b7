//! # Storage Layer
//!
//! Persistence for habit-cli. The core codec and aggregator never touch
//! storage; they operate on the in-memory list this layer loads and saves.
//!
//! ## Files
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Habits | JSON array (order-preserving) | `<data dir>/habits.json` |
//! | Config | TOML | `<config dir>/config.toml` |
//!
//! The data directory resolves from `HABIT_DATA_DIR`, then the `data_dir`
//! config key, then the platform data directory.
//!
//! ## Concurrency Safety
//!
//! - [`HabitStore`] uses file locking (`fs2`) for concurrent access
//! - All writes are atomic (temp file + rename)

mod store;
mod config;

pub use store::HabitStore;
pub use config::{Config, ConfigError, ReminderDefaults, DATA_DIR_ENV};
