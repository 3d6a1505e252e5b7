//! Property tests for the CSV codec
//!
//! The central guarantee: any habit list whose string fields avoid the
//! reserved characters (`,`, `|`, newline) survives encode→decode unchanged,
//! with habit ids unique across the collection as the data model requires.

use std::collections::BTreeSet;

use proptest::prelude::*;

use habit_cli::codec::{decode, decode_with_diagnostics, encode};
use habit_cli::{Habit, HabitEntry, HabitReminder, Weekday};

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 _-]{0,14}"
}

fn date_time_strategy() -> impl Strategy<Value = String> {
    (2020..2026i32, 1..=12u32, 1..=28u32, 0..24u32, 0..60u32)
        .prop_map(|(y, m, d, h, min)| format!("{:04}-{:02}-{:02}T{:02}:{:02}:00Z", y, m, d, h, min))
}

fn entry_strategy() -> impl Strategy<Value = HabitEntry> {
    (date_time_strategy(), any::<u32>()).prop_map(|(date, count)| HabitEntry { date, count })
}

fn weekday_strategy() -> impl Strategy<Value = Weekday> {
    prop::sample::select(Weekday::all().to_vec())
}

fn days_strategy() -> impl Strategy<Value = BTreeSet<Weekday>> {
    prop::collection::btree_set(weekday_strategy(), 1..=7)
}

type RawReminder = (String, BTreeSet<Weekday>, bool);
type RawHabit = (String, String, Vec<HabitEntry>, Vec<RawReminder>);

fn reminder_parts_strategy() -> impl Strategy<Value = RawReminder> {
    ("[0-2][0-9]:[0-5][0-9]", days_strategy(), any::<bool>())
}

fn habits_strategy() -> impl Strategy<Value = Vec<Habit>> {
    let raw_habit: BoxedStrategy<RawHabit> = (
        name_strategy(),
        date_time_strategy(),
        prop::collection::vec(entry_strategy(), 0..5),
        prop::collection::vec(reminder_parts_strategy(), 0..3),
    )
        .boxed();

    // Ids must be unique across the collection (they are the codec join key);
    // derive them from position after generation.
    prop::collection::vec(raw_habit, 0..6).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (name, created_at, entries, reminders))| Habit {
                id: format!("h-{}", i).parse().unwrap(),
                name,
                created_at,
                entries,
                reminders: reminders
                    .into_iter()
                    .enumerate()
                    .map(|(j, (time, days, enabled))| HabitReminder {
                        id: format!("r-{}-{}", i, j).parse().unwrap(),
                        time,
                        days,
                        enabled,
                    })
                    .collect(),
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn roundtrip_preserves_habits(habits in habits_strategy()) {
        let text = encode(&habits);
        let decoded = decode(&text).expect("own exports always decode");

        prop_assert_eq!(decoded, habits);
    }

    #[test]
    fn own_exports_decode_without_diagnostics(habits in habits_strategy()) {
        let text = encode(&habits);
        let decoded = decode_with_diagnostics(&text).expect("own exports always decode");

        prop_assert!(decoded.diagnostics.is_empty());
    }

    #[test]
    fn row_count_matches_object_graph(habits in habits_strategy()) {
        let text = encode(&habits);
        let rows = text.lines().count() - 1;

        let expected: usize = habits
            .iter()
            .map(|h| (h.entries.len() + h.reminders.len()).max(1))
            .sum();
        prop_assert_eq!(rows, expected);
    }
}

#[test]
fn zero_activity_habit_roundtrips_as_placeholder() {
    let habit = Habit {
        id: "h-0".parse().unwrap(),
        name: "Read".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        entries: Vec::new(),
        reminders: Vec::new(),
    };

    let text = encode(std::slice::from_ref(&habit));
    assert_eq!(text.lines().count(), 2);
    assert!(text.lines().nth(1).unwrap().starts_with("habit,"));

    let decoded = decode(&text).unwrap();
    assert_eq!(decoded, vec![habit]);
}
