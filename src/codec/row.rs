//! Row-level pieces of the CSV interchange format
//!
//! The export is a single flat table: three record kinds share one 10-column
//! schema, discriminated by the `type` column. Splitting a physical line into
//! a [`RawRow`] and classifying its [`RowKind`] happens here; folding rows
//! into habits lives in the decoder.

/// The fixed header line, emitted verbatim on encode
pub const HEADER: &str =
    "type,id,name,createdAt,entryDate,count,reminderId,reminderTime,reminderDays,reminderEnabled";

/// Number of positional fields in every data row
pub const FIELD_COUNT: usize = 10;

/// Separator for multiple weekday tokens inside the `reminderDays` field
pub const DAY_SEPARATOR: char = '|';

/// Row discriminant from the `type` column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Placeholder row keeping a zero-activity habit alive across a round trip
    Habit,
    /// One per-day count entry
    Entry,
    /// One reminder schedule
    Reminder,
}

impl RowKind {
    /// Classifies a `type` field value; `None` for unknown discriminants
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "habit" => Some(RowKind::Habit),
            "entry" => Some(RowKind::Entry),
            "reminder" => Some(RowKind::Reminder),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            RowKind::Habit => "habit",
            RowKind::Entry => "entry",
            RowKind::Reminder => "reminder",
        }
    }
}

/// One data row split into its 10 positional fields, still untyped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawRow<'a> {
    pub kind: &'a str,
    pub id: &'a str,
    pub name: &'a str,
    pub created_at: &'a str,
    pub entry_date: &'a str,
    pub count: &'a str,
    pub reminder_id: &'a str,
    pub reminder_time: &'a str,
    pub reminder_days: &'a str,
    pub reminder_enabled: &'a str,
}

impl<'a> RawRow<'a> {
    /// Splits a line on `,` into the positional fields
    ///
    /// Lenient by construction: missing trailing fields read as empty, extra
    /// fields are ignored. The actual field count is returned alongside so
    /// the caller can report rows that deviate from the schema.
    pub fn split(line: &'a str) -> (Self, usize) {
        let mut fields = [""; FIELD_COUNT];
        let mut found = 0;

        for (i, field) in line.split(',').enumerate() {
            if i < FIELD_COUNT {
                fields[i] = field;
            }
            found = i + 1;
        }

        let row = Self {
            kind: fields[0],
            id: fields[1],
            name: fields[2],
            created_at: fields[3],
            entry_date: fields[4],
            count: fields[5],
            reminder_id: fields[6],
            reminder_time: fields[7],
            reminder_days: fields[8],
            reminder_enabled: fields[9],
        };

        (row, found)
    }
}
