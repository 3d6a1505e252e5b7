//! CSV export and import commands
//!
//! The codec itself is pure; this module owns the file I/O around it. Import
//! is all-or-nothing: the store is only replaced after the whole file decodes.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};

use super::output::Output;
use crate::codec::{self, DecodeError};
use crate::storage::HabitStore;

/// Default export file name: `habits_export_<YYYY-MM-DD>.csv`
pub fn export_file_name(today: NaiveDate) -> String {
    format!("habits_export_{}.csv", today.format("%Y-%m-%d"))
}

pub fn export(output: &Output, path: Option<PathBuf>) -> Result<()> {
    let store = HabitStore::open_default()?;
    let habits = store.load()?;

    let path = path.unwrap_or_else(|| PathBuf::from(export_file_name(Utc::now().date_naive())));
    let text = codec::encode(&habits);

    fs::write(&path, text)
        .with_context(|| format!("Failed to write export: {}", path.display()))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "path": path.display().to_string(),
            "habits": habits.len(),
        }));
    } else {
        output.success(&format!(
            "Exported {} habits to {}",
            habits.len(),
            path.display()
        ));
    }

    Ok(())
}

pub fn import(output: &Output, path: &Path, strict: bool) -> Result<()> {
    // Read failures travel as a decode failure so every import error shares
    // one shape.
    let text = fs::read_to_string(path).map_err(DecodeError::unreadable)?;
    let decoded = codec::decode_with_diagnostics(&text)?;

    if !decoded.diagnostics.is_empty() {
        if strict {
            let mut message = format!(
                "Import rejected, {} malformed rows:",
                decoded.diagnostics.len()
            );
            for diagnostic in &decoded.diagnostics {
                message.push_str(&format!("\n  {}", diagnostic));
            }
            bail!(message);
        }
        for diagnostic in &decoded.diagnostics {
            output.warn(&diagnostic.to_string());
        }
    }

    let store = HabitStore::open_default()?;
    store.save(&decoded.habits)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "path": path.display().to_string(),
            "habits": decoded.habits.len(),
            "warnings": decoded.diagnostics.len(),
        }));
    } else {
        output.success(&format!(
            "Imported {} habits from {}",
            decoded.habits.len(),
            path.display()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(export_file_name(date), "habits_export_2024-03-05.csv");
    }
}
