//! Per-day classification used by graphs and statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::satisfaction::{satisfied, skipified};
use crate::entries::{Entries, OutcomeResult};
use crate::habit::Habit;

/// Derived state of a habit on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayState {
    /// Explicit success recorded on the day
    Success,
    /// Explicit skip on the day, or a skip elsewhere in the window
    Skip,
    /// No success on the day but the window meets the target
    Satisfied,
    /// Before the first record; rendered blank and never counted
    NotYetTracked,
    /// Tracking-only habit with no success on the day
    Idle,
    /// Target missed
    Break,
}

impl DayState {
    /// Counts towards the streak statistic.
    pub fn is_streak(self) -> bool {
        matches!(self, DayState::Success | DayState::Satisfied)
    }
}

/// Classify `habit` on `date`.
///
/// Checked in priority order: explicit success, explicit skip, skip covering
/// the window, window satisfaction, not yet tracked, break. A habit with no
/// first record has nothing tracked yet.
pub fn classify_day(date: NaiveDate, habit: &Habit, entries: &Entries) -> DayState {
    match entries.get(date, &habit.name).map(|o| o.result) {
        Some(OutcomeResult::Success) => return DayState::Success,
        Some(OutcomeResult::Skip) => return DayState::Skip,
        _ => {}
    }

    if skipified(date, habit, entries) {
        return DayState::Skip;
    }
    if satisfied(date, habit, entries) {
        return DayState::Satisfied;
    }
    match habit.first_record {
        Some(first) if date >= first => {}
        _ => return DayState::NotYetTracked,
    }
    if habit.is_tracking_only() {
        DayState::Idle
    } else {
        DayState::Break
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::Outcome;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn explicit_outcomes_win() {
        let habit = Habit::new("Gym", 1, 7).with_first_record(date(2025, 3, 1));
        let mut entries = Entries::new();
        entries.insert(date(2025, 3, 3), "Gym", Outcome::success());
        entries.insert(date(2025, 3, 4), "Gym", Outcome::skip());
        entries.insert(date(2025, 3, 5), "Gym", Outcome::fail());

        assert_eq!(classify_day(date(2025, 3, 3), &habit, &entries), DayState::Success);
        assert_eq!(classify_day(date(2025, 3, 4), &habit, &entries), DayState::Skip);
        // The skip on the 4th covers the failed 5th.
        assert_eq!(classify_day(date(2025, 3, 5), &habit, &entries), DayState::Skip);
    }

    #[test]
    fn window_fills_gap_days() {
        let habit = Habit::new("Gym", 1, 7).with_first_record(date(2025, 3, 1));
        let mut entries = Entries::new();
        entries.insert(date(2025, 3, 1), "Gym", Outcome::success());

        assert_eq!(classify_day(date(2025, 3, 4), &habit, &entries), DayState::Satisfied);
        assert_eq!(classify_day(date(2025, 3, 7), &habit, &entries), DayState::Satisfied);
        assert_eq!(classify_day(date(2025, 3, 8), &habit, &entries), DayState::Break);
    }

    #[test]
    fn before_first_record_is_not_yet_tracked() {
        let habit = Habit::new("Walk", 1, 1).with_first_record(date(2025, 3, 10));
        let entries = Entries::new();
        assert_eq!(
            classify_day(date(2025, 3, 9), &habit, &entries),
            DayState::NotYetTracked
        );
        assert_eq!(classify_day(date(2025, 3, 10), &habit, &entries), DayState::Break);
    }

    #[test]
    fn habit_without_records_is_not_yet_tracked() {
        let habit = Habit::new("New", 1, 1);
        assert_eq!(
            classify_day(date(2025, 3, 9), &habit, &Entries::new()),
            DayState::NotYetTracked
        );
    }

    #[test]
    fn tracking_only_days_are_idle_not_breaks() {
        let habit = Habit::new("Weight", 0, 1).with_first_record(date(2025, 3, 1));
        let mut entries = Entries::new();
        entries.insert(date(2025, 3, 1), "Weight", Outcome::success().with_amount(80.5));
        entries.insert(date(2025, 3, 2), "Weight", Outcome::fail());

        assert_eq!(classify_day(date(2025, 3, 1), &habit, &entries), DayState::Success);
        assert_eq!(classify_day(date(2025, 3, 2), &habit, &entries), DayState::Idle);
        assert_eq!(classify_day(date(2025, 3, 3), &habit, &entries), DayState::Idle);
    }
}
