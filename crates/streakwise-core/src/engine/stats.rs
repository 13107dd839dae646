//! Whole-history statistics per habit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::classify::{classify_day, DayState};
use crate::entries::Entries;
use crate::habit::Habit;

/// Aggregates over `[first_record, today]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HabitStats {
    /// Inclusive day count from first record to today
    pub days_tracked: u32,
    /// Sum of recorded amounts
    pub total: f64,
    /// Days classified success or satisfied
    pub streaks: u32,
    /// Days classified break
    pub breaks: u32,
    /// Days classified skip
    pub skips: u32,
}

/// Build statistics for `habit` up to and including `today`.
///
/// A habit without a first record, or whose first record is after `today`,
/// has empty statistics.
pub fn build_stats(habit: &Habit, entries: &Entries, today: NaiveDate) -> HabitStats {
    let mut stats = HabitStats::default();
    let Some(first) = habit.first_record else {
        return stats;
    };

    for day in first.iter_days().take_while(|d| *d <= today) {
        stats.days_tracked += 1;
        if let Some(outcome) = entries.get(day, &habit.name) {
            stats.total += outcome.amount;
        }
        match classify_day(day, habit, entries) {
            DayState::Success | DayState::Satisfied => stats.streaks += 1,
            DayState::Break => stats.breaks += 1,
            DayState::Skip => stats.skips += 1,
            DayState::Idle | DayState::NotYetTracked => {}
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::Outcome;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_entries() -> Entries {
        let mut entries = Entries::new();
        entries.insert(date(2025, 3, 10), "Test", Outcome::success().with_amount(5.0));
        entries.insert(date(2025, 3, 11), "Test", Outcome::success().with_amount(3.0));
        entries.insert(date(2025, 3, 12), "Test", Outcome::fail());
        entries.insert(date(2025, 3, 13), "Test", Outcome::skip());
        entries.insert(date(2025, 3, 14), "Test", Outcome::success().with_amount(2.0));
        entries
    }

    #[test]
    fn daily_habit_stats() {
        let habit = Habit::new("Test", 1, 1).with_first_record(date(2025, 3, 10));
        let stats = build_stats(&habit, &sample_entries(), date(2025, 3, 14));

        assert_eq!(stats.streaks, 3);
        assert_eq!(stats.breaks, 1);
        assert_eq!(stats.skips, 1);
        assert_eq!(stats.total, 10.0);
        assert_eq!(stats.days_tracked, 5);
    }

    #[test]
    fn unlogged_days_after_last_entry_are_breaks() {
        let habit = Habit::new("Test", 1, 1).with_first_record(date(2025, 3, 10));
        let stats = build_stats(&habit, &sample_entries(), date(2025, 3, 16));

        assert_eq!(stats.days_tracked, 7);
        assert_eq!(stats.breaks, 3);
        assert_eq!(stats.streaks + stats.breaks + stats.skips, stats.days_tracked);
    }

    #[test]
    fn weekly_habit_counts_satisfied_days_as_streaks() {
        let habit = Habit::new("Gym", 1, 7).with_first_record(date(2025, 3, 1));
        let mut entries = Entries::new();
        entries.insert(date(2025, 3, 1), "Gym", Outcome::success().with_amount(1.5));

        let stats = build_stats(&habit, &entries, date(2025, 3, 10));
        assert_eq!(stats.days_tracked, 10);
        assert_eq!(stats.streaks, 7);
        assert_eq!(stats.breaks, 3);
        assert_eq!(stats.total, 1.5);
    }

    #[test]
    fn entries_after_today_are_ignored() {
        let habit = Habit::new("Test", 1, 1).with_first_record(date(2025, 3, 10));
        let stats = build_stats(&habit, &sample_entries(), date(2025, 3, 11));
        assert_eq!(stats.days_tracked, 2);
        assert_eq!(stats.total, 8.0);
        assert_eq!(stats.streaks, 2);
    }

    #[test]
    fn tracking_only_sums_amounts_without_breaks() {
        let habit = Habit::new("Pages", 0, 1).with_first_record(date(2025, 3, 1));
        let mut entries = Entries::new();
        entries.insert(date(2025, 3, 1), "Pages", Outcome::success().with_amount(20.0));
        entries.insert(date(2025, 3, 3), "Pages", Outcome::success().with_amount(12.0));

        let stats = build_stats(&habit, &entries, date(2025, 3, 5));
        assert_eq!(stats.days_tracked, 5);
        assert_eq!(stats.streaks, 2);
        assert_eq!(stats.breaks, 0);
        assert_eq!(stats.total, 32.0);
    }

    #[test]
    fn no_first_record_means_no_stats() {
        let habit = Habit::new("New", 1, 1);
        assert_eq!(
            build_stats(&habit, &sample_entries(), date(2025, 3, 14)),
            HabitStats::default()
        );
    }

    #[test]
    fn stats_serialize_with_field_names() {
        let json = serde_json::to_string(&HabitStats::default()).unwrap();
        assert!(json.contains("days_tracked"));
        assert!(json.contains("streaks"));
    }
}
