use serde::Serialize;
use streakwise_core::{build_stats, HabitStats};

use super::{load_snapshot, today};

#[derive(Serialize)]
struct HabitRow<'a> {
    habit: &'a str,
    #[serde(flatten)]
    stats: HabitStats,
}

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, snapshot) = load_snapshot()?;
    let today = today();

    let rows: Vec<HabitRow> = snapshot
        .habits
        .iter()
        .map(|habit| HabitRow {
            habit: &habit.name,
            stats: build_stats(habit, &snapshot.entries, today),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let width = snapshot.max_name_len.max("Habit".len());
    println!(
        "{:<width$}  {:>5}  {:>5}  {:>6}  {:>5}  {:>8}",
        "Habit", "Days", "Kept", "Broken", "Skips", "Total"
    );
    for row in &rows {
        let s = &row.stats;
        println!(
            "{:<width$}  {:>5}  {:>5}  {:>6}  {:>5}  {:>8}",
            row.habit, s.days_tracked, s.streaks, s.breaks, s.skips, s.total
        );
    }
    Ok(())
}
