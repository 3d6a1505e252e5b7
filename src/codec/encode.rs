//! CSV encoder
//!
//! Turns an ordered habit list into the flat export table. Field values are
//! written verbatim with no quoting or escaping; names containing `,`, `|`,
//! or a newline would corrupt the format, which is why habit creation rejects
//! them up front. The encoder itself never alters or validates data.

use crate::domain::Habit;

use super::row::{DAY_SEPARATOR, HEADER, RowKind};

/// Characters that cannot appear in any field value (the format has no quoting)
pub const RESERVED_CHARS: [char; 3] = [',', DAY_SEPARATOR, '\n'];

/// Encodes habits into CSV text
///
/// One `entry` row per entry and one `reminder` row per reminder, in input
/// order. A habit with neither gets a single placeholder `habit` row so it is
/// not lost on a round trip. Rows are joined with `\n`, no trailing newline.
pub fn encode(habits: &[Habit]) -> String {
    let mut out = String::from(HEADER);

    for habit in habits {
        if habit.entries.is_empty() && habit.reminders.is_empty() {
            out.push_str(&format!(
                "\n{},{},{},{},,0,,,,",
                RowKind::Habit.token(),
                habit.id,
                habit.name,
                habit.created_at
            ));
            continue;
        }

        for entry in &habit.entries {
            out.push_str(&format!(
                "\n{},{},{},{},{},{},,,,",
                RowKind::Entry.token(),
                habit.id,
                habit.name,
                habit.created_at,
                entry.date,
                entry.count
            ));
        }

        for reminder in &habit.reminders {
            let days = reminder
                .days
                .iter()
                .map(|d| d.token())
                .collect::<Vec<_>>()
                .join(&DAY_SEPARATOR.to_string());

            out.push_str(&format!(
                "\n{},{},{},{},,,{},{},{},{}",
                RowKind::Reminder.token(),
                habit.id,
                habit.name,
                habit.created_at,
                reminder.id,
                reminder.time,
                days,
                reminder.enabled
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Habit, HabitEntry, HabitReminder, ReminderId, Weekday};
    use chrono::Utc;
    use std::collections::BTreeSet;

    fn habit(id: &str, name: &str) -> Habit {
        Habit {
            id: id.parse().unwrap(),
            name: name.to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            entries: Vec::new(),
            reminders: Vec::new(),
        }
    }

    #[test]
    fn empty_list_encodes_header_only() {
        assert_eq!(encode(&[]), HEADER);
    }

    #[test]
    fn single_entry_produces_exact_row() {
        let mut h = habit("1", "Run");
        h.entries.push(HabitEntry {
            date: "2024-01-01T00:00:00Z".to_string(),
            count: 3,
        });

        let expected = format!(
            "{}\nentry,1,Run,2024-01-01T00:00:00Z,2024-01-01T00:00:00Z,3,,,,",
            HEADER
        );
        assert_eq!(encode(&[h]), expected);
    }

    #[test]
    fn zero_activity_habit_gets_placeholder_row() {
        let h = habit("1", "Read");

        let expected = format!("{}\nhabit,1,Read,2024-01-01T00:00:00Z,,0,,,,", HEADER);
        assert_eq!(encode(&[h]), expected);
    }

    #[test]
    fn reminder_row_joins_days_with_pipe() {
        let mut h = habit("1", "Run");
        let days: BTreeSet<Weekday> = [Weekday::Monday, Weekday::Friday].into_iter().collect();
        h.reminders
            .push(HabitReminder::new(ReminderId::new("Run", Utc::now()), "08:00", days).unwrap());
        let rid = h.reminders[0].id.to_string();

        let text = encode(&[h]);
        let last = text.lines().last().unwrap();
        assert_eq!(
            last,
            format!(
                "reminder,1,Run,2024-01-01T00:00:00Z,,,{},08:00,monday|friday,true",
                rid
            )
        );
    }

    #[test]
    fn habit_with_reminders_only_skips_placeholder() {
        let mut h = habit("1", "Run");
        let days: BTreeSet<Weekday> = [Weekday::Monday].into_iter().collect();
        h.reminders
            .push(HabitReminder::new(ReminderId::new("Run", Utc::now()), "08:00", days).unwrap());

        let text = encode(&[h]);
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().nth(1).unwrap().starts_with("reminder,"));
    }

    #[test]
    fn habits_keep_input_order() {
        let text = encode(&[habit("b", "Beta"), habit("a", "Alpha")]);
        let lines: Vec<_> = text.lines().collect();

        assert!(lines[1].contains("Beta"));
        assert!(lines[2].contains("Alpha"));
    }

    #[test]
    fn entries_come_before_reminders() {
        let mut h = habit("1", "Run");
        h.entries.push(HabitEntry {
            date: "2024-01-02T00:00:00Z".to_string(),
            count: 1,
        });
        let days: BTreeSet<Weekday> = [Weekday::Monday].into_iter().collect();
        h.reminders
            .push(HabitReminder::new(ReminderId::new("Run", Utc::now()), "08:00", days).unwrap());

        let lines: Vec<_> = encode(&[h]).lines().map(String::from).collect();
        assert!(lines[1].starts_with("entry,"));
        assert!(lines[2].starts_with("reminder,"));
    }

    #[test]
    fn disabled_reminder_encodes_false() {
        let mut h = habit("1", "Run");
        let days: BTreeSet<Weekday> = [Weekday::Monday].into_iter().collect();
        let mut reminder =
            HabitReminder::new(ReminderId::new("Run", Utc::now()), "08:00", days).unwrap();
        reminder.toggle();
        h.reminders.push(reminder);

        let text = encode(&[h]);
        assert!(text.ends_with(",false"));
    }
}
