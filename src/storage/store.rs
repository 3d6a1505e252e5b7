//! JSON storage for the habit list
//!
//! All habits live in a single `habits.json` file: a JSON array, preserving
//! habit order. Uses file locking for concurrent access safety and writes
//! atomically (temp file + rename).
//!
//! This is the persistence collaborator the core never touches: the codec and
//! aggregator only ever see the in-memory list loaded from here.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::Habit;

/// Store for the habit list as a JSON file
pub struct HabitStore {
    path: PathBuf,
}

impl HabitStore {
    /// Creates a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the default store inside a data directory
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("habits.json"))
    }

    /// Opens the store at the configured default location
    pub fn open_default() -> Result<Self> {
        let config = super::Config::load()?;
        Ok(Self::in_dir(&config.data_dir()?))
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all habits; a missing file is an empty list
    pub fn load(&self) -> Result<Vec<Habit>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open habit store: {}", self.path.display()))?;

        // Shared lock for reading, released on drop
        file.lock_shared()
            .context("Failed to acquire read lock on habit store")?;

        let reader = BufReader::new(&file);
        let habits: Vec<Habit> = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse habit store: {}", self.path.display()))?;

        Ok(habits)
    }

    /// Writes the full habit list (replaces the previous contents)
    pub fn save(&self, habits: &[Habit]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        // Write to temp file first
        let temp_path = self.path.with_extension("json.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on habit store")?;

            let mut writer = BufWriter::new(&file);
            serde_json::to_writer_pretty(&mut writer, habits)
                .context("Failed to serialize habits")?;
            writer.flush().context("Failed to flush habit store")?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}
