//! Activity heatmap rendering
//!
//! Renders the aggregation result as a terminal grid: weeks as columns,
//! seven positional day rows, month labels along the top. Each cell shows
//! the day's intensity level as a digit (`.` for zero) so ten levels stay
//! distinguishable without color support.

use anyhow::Result;
use chrono::{NaiveDate, Utc};

use super::output::Output;
use crate::activity::{aggregate, intensity, ActivityGraph, WEEK_LEN};
use crate::storage::HabitStore;

pub fn run(output: &Output, until: Option<NaiveDate>) -> Result<()> {
    let store = HabitStore::open_default()?;
    let habits = store.load()?;

    let reference = until.unwrap_or_else(|| Utc::now().date_naive());
    let graph = aggregate(&habits, reference);

    if output.is_json() {
        output.data(&graph);
        return Ok(());
    }

    if habits.is_empty() {
        println!("Track your habits to see your activity graph!");
        return Ok(());
    }

    print!("{}", render(&graph));
    println!(
        "{} activities in the year ending {}",
        graph.total_count(),
        reference
    );

    Ok(())
}

/// Intensity level to cell glyph: `.` for zero, the level digit otherwise
fn cell(level: u8) -> char {
    match level {
        0 => '.',
        n => char::from_digit(u32::from(n), 10).unwrap_or('9'),
    }
}

/// Renders the grid as text, one trailing newline per line
fn render(graph: &ActivityGraph) -> String {
    let columns = graph.week_count();
    let mut out = String::new();

    // Month labels along the top, one grid column per week. A label lands at
    // the column of its month's first day and is skipped if it would collide
    // with the previous one.
    let mut header = vec![' '; columns];
    let mut next_free = 0;
    for label in &graph.month_labels {
        let col = label.day_index / WEEK_LEN;
        if col < next_free || col + label.label.len() > columns {
            continue;
        }
        for (i, ch) in label.label.chars().enumerate() {
            header[col + i] = ch;
        }
        next_free = col + label.label.len() + 1;
    }
    out.push_str(&header.into_iter().collect::<String>());
    out.push('\n');

    // Seven day rows; the final short week leaves blanks in rows 1..7.
    let weeks: Vec<_> = graph.weeks().collect();
    for row in 0..WEEK_LEN {
        for week in &weeks {
            match week.get(row) {
                Some(day) => out.push(cell(intensity(day.count))),
                None => out.push(' '),
            }
        }
        out.push('\n');
    }

    out.push_str("less .123456789 more\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_for(reference: &str) -> ActivityGraph {
        aggregate(&[], reference.parse().unwrap())
    }

    #[test]
    fn render_has_header_seven_rows_and_legend() {
        let text = render(&graph_for("2024-06-15"));
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert!(lines[8].contains("less"));
    }

    #[test]
    fn day_rows_are_53_columns_wide() {
        let text = render(&graph_for("2024-06-15"));
        let lines: Vec<_> = text.lines().collect();

        for row in &lines[1..8] {
            assert_eq!(row.chars().count(), 53);
        }
    }

    #[test]
    fn last_column_has_exactly_one_day() {
        let text = render(&graph_for("2024-06-15"));
        let lines: Vec<_> = text.lines().collect();

        // Row 0 ends in a cell, rows 1..7 end in the short-week blank.
        assert!(lines[1].ends_with('.'));
        for row in &lines[2..8] {
            assert!(row.ends_with(' '));
        }
    }

    #[test]
    fn header_starts_with_first_month_label() {
        let text = render(&graph_for("2024-06-15"));
        assert!(text.starts_with("Jun"));
    }

    #[test]
    fn cell_glyphs_cover_all_levels() {
        assert_eq!(cell(0), '.');
        assert_eq!(cell(1), '1');
        assert_eq!(cell(9), '9');
    }

    #[test]
    fn active_day_shows_its_intensity() {
        use crate::domain::{Habit, HabitEntry};
        use chrono::Utc;

        let mut habit = Habit::new("Run", Utc::now());
        habit.entries.push(HabitEntry {
            date: "2024-06-15T08:00:00Z".to_string(),
            count: 4,
        });
        let graph = aggregate(&[habit], "2024-06-15".parse().unwrap());

        let text = render(&graph);
        // The reference day is the single cell of the last week column.
        let row0 = text.lines().nth(1).unwrap();
        assert!(row0.ends_with('4'));
    }
}
