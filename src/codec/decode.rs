//! CSV decoder
//!
//! Replays data rows into a habit list. Decoding is a structural fold, not a
//! semantic merge: duplicate names, duplicate same-day entries, and empty
//! reminder day sets all survive exactly as written. Cleaning imported data
//! up is the caller's concern.
//!
//! The decoder is lenient by default, matching exports already in the wild:
//! the header line is discarded without validation, unparseable counts become
//! 0, unknown weekday tokens are dropped, and rows with the wrong field count
//! are padded or truncated. Every such repair is reported as a
//! [`RowDiagnostic`] so callers can opt into strictness without losing
//! compatibility.

use std::collections::HashMap;

use crate::domain::{Habit, HabitEntry, HabitId, HabitReminder, ReminderId, Weekday};

use super::row::{DAY_SEPARATOR, FIELD_COUNT, RawRow, RowKind};
use super::{DecodeError, RowDiagnostic, RowIssue};

/// Result of a lenient decode: the habits plus everything that was repaired
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// Habits in first-seen-id order
    pub habits: Vec<Habit>,

    /// Per-line repairs made while decoding, empty for a clean input
    pub diagnostics: Vec<RowDiagnostic>,
}

/// Decodes CSV text into habits, discarding diagnostics
pub fn decode(text: &str) -> Result<Vec<Habit>, DecodeError> {
    decode_with_diagnostics(text).map(|d| d.habits)
}

/// Decodes CSV text into habits, reporting every lenient repair
///
/// Fails hard only on [`DecodeError::EmptyInput`]: anything with at least one
/// physical line after the header decodes to *some* habit list.
pub fn decode_with_diagnostics(text: &str) -> Result<Decoded, DecodeError> {
    // Split on '\n' rather than lines(): a header with a bare trailing
    // newline counts as two lines (an empty import), not as EmptyInput.
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() < 2 {
        return Err(DecodeError::EmptyInput);
    }

    let mut habits: Vec<Habit> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut diagnostics = Vec::new();

    // First line is the header, discarded unvalidated.
    for (line_no, line) in lines.iter().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let (row, found) = RawRow::split(line);
        // 1-based line numbers, counting the header
        let line_no = line_no + 1;

        if found != FIELD_COUNT {
            diagnostics.push(RowDiagnostic {
                line: line_no,
                issue: RowIssue::FieldCount(found),
            });
        }

        let id: HabitId = match row.id.parse() {
            Ok(id) => id,
            Err(_) => {
                diagnostics.push(RowDiagnostic {
                    line: line_no,
                    issue: RowIssue::MissingId,
                });
                continue;
            }
        };

        let slot = match index.get(id.as_str()) {
            Some(&i) => i,
            None => {
                // First sight of this id: the shell takes name/createdAt
                // from this row, later rows cannot change them.
                index.insert(id.as_str().to_string(), habits.len());
                habits.push(Habit {
                    id,
                    name: row.name.to_string(),
                    created_at: row.created_at.to_string(),
                    entries: Vec::new(),
                    reminders: Vec::new(),
                });
                habits.len() - 1
            }
        };

        match RowKind::from_token(row.kind) {
            Some(RowKind::Habit) => {
                // Shell only.
            }
            Some(RowKind::Entry) => {
                if !row.entry_date.is_empty() {
                    habits[slot].entries.push(HabitEntry {
                        date: row.entry_date.to_string(),
                        count: parse_count(row.count, line_no, &mut diagnostics),
                    });
                }
            }
            Some(RowKind::Reminder) => {
                // A blank reminder id means no reminder payload on this row.
                if let Ok(reminder_id) = row.reminder_id.parse::<ReminderId>() {
                    habits[slot].reminders.push(HabitReminder {
                        id: reminder_id,
                        time: row.reminder_time.to_string(),
                        days: parse_days(row.reminder_days, line_no, &mut diagnostics),
                        enabled: row.reminder_enabled == "true",
                    });
                }
            }
            None => {
                diagnostics.push(RowDiagnostic {
                    line: line_no,
                    issue: RowIssue::UnknownType(row.kind.to_string()),
                });
            }
        }
    }

    Ok(Decoded {
        habits,
        diagnostics,
    })
}

/// Parses the count column; a missing value is 0, a corrupted one is 0 plus
/// a diagnostic
fn parse_count(field: &str, line: usize, diagnostics: &mut Vec<RowDiagnostic>) -> u32 {
    if field.is_empty() {
        return 0;
    }
    match field.parse() {
        Ok(count) => count,
        Err(_) => {
            diagnostics.push(RowDiagnostic {
                line,
                issue: RowIssue::BadCount(field.to_string()),
            });
            0
        }
    }
}

/// Parses the `|`-separated day list; blank means empty, unknown tokens are
/// dropped with a diagnostic
fn parse_days(
    field: &str,
    line: usize,
    diagnostics: &mut Vec<RowDiagnostic>,
) -> std::collections::BTreeSet<Weekday> {
    let mut days = std::collections::BTreeSet::new();
    if field.is_empty() {
        return days;
    }

    for token in field.split(DAY_SEPARATOR) {
        match token.parse() {
            Ok(day) => {
                days.insert(day);
            }
            Err(_) => {
                diagnostics.push(RowDiagnostic {
                    line,
                    issue: RowIssue::UnknownDay(token.to_string()),
                });
            }
        }
    }
    days
}
