//! # CSV Interchange Codec
//!
//! Serializes the habit/entry/reminder object graph into a single flat CSV
//! table and back. The format is ASCII CSV with no quoting and a fixed
//! 10-column schema; three record kinds share the table, discriminated by the
//! `type` column.
//!
//! ## Schema
//!
//! ```text
//! type,id,name,createdAt,entryDate,count,reminderId,reminderTime,reminderDays,reminderEnabled
//! ```
//!
//! | `type` | Carries | Notes |
//! |--------|---------|-------|
//! | `habit` | id, name, createdAt | placeholder for zero-activity habits |
//! | `entry` | + entryDate, count | one row per per-day entry |
//! | `reminder` | + reminderId, reminderTime, reminderDays, reminderEnabled | days joined with `\|` |
//!
//! ## Known limitation
//!
//! There is no quoting or escaping: a `,`, `|`, or newline inside a field
//! value corrupts the table. This is preserved deliberately for compatibility
//! with existing exports; habit creation rejects such names instead.
//!
//! ## Error policy
//!
//! [`decode`] fails hard only when there is nothing to decode
//! ([`DecodeError::EmptyInput`]) or the text itself could not be obtained
//! ([`DecodeError::UnreadableSource`], raised by the reading caller and
//! carried here so all import failures share one type). Malformed rows are
//! repaired leniently; [`decode_with_diagnostics`] reports each repair as a
//! [`RowDiagnostic`] so strict callers can refuse dirty input.
//!
//! Both directions are pure functions over in-memory values; file I/O and
//! list replacement belong to the caller.

mod row;
mod encode;
mod decode;

pub use encode::{encode, RESERVED_CHARS};
pub use decode::{decode, decode_with_diagnostics, Decoded};
pub use row::{HEADER, FIELD_COUNT};

use std::fmt;
use thiserror::Error;

/// A decode failure that aborts the whole import
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Fewer than two lines: there is a header at most, no data rows
    #[error("CSV input is empty or has only a header row")]
    EmptyInput,

    /// The text source could not be read (raised by the I/O caller)
    #[error("Could not read CSV source: {0}")]
    UnreadableSource(String),
}

impl DecodeError {
    /// Wraps an I/O-layer failure so it travels through the decode result type
    pub fn unreadable(err: impl fmt::Display) -> Self {
        DecodeError::UnreadableSource(err.to_string())
    }
}

/// A lenient repair made to one data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDiagnostic {
    /// 1-based physical line number, counting the header line
    pub line: usize,

    /// What was repaired
    pub issue: RowIssue,
}

impl fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.issue)
    }
}

/// The kinds of row damage the lenient decoder repairs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowIssue {
    #[error("expected 10 fields, found {0}")]
    FieldCount(usize),

    #[error("unknown row type '{0}'")]
    UnknownType(String),

    #[error("unparseable count '{0}', defaulted to 0")]
    BadCount(String),

    #[error("unknown weekday token '{0}', dropped")]
    UnknownDay(String),

    #[error("row has no habit id, skipped")]
    MissingId,
}
