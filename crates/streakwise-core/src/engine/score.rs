//! Daily completion score across scored habits.

use chrono::NaiveDate;

use super::satisfaction::satisfied;
use super::window::days_before;
use crate::entries::Entries;
use crate::habit::Habit;

/// Score when no habit is eligible on a date.
pub const VACUOUS_SCORE: f64 = 100.0;

/// Percentage of eligible habits satisfied on `date`.
///
/// Eligible habits have `target > 0`, are tracked by `date` and have no
/// explicit skip on `date`. With nothing eligible the day is vacuously
/// complete and scores [`VACUOUS_SCORE`].
pub fn score(date: NaiveDate, habits: &[Habit], entries: &Entries) -> f64 {
    let mut eligible = 0u32;
    let mut met = 0u32;

    for habit in habits {
        if habit.is_tracking_only() || !habit.is_tracked_on(date) {
            continue;
        }
        if entries.get(date, &habit.name).is_some_and(|o| o.is_skip()) {
            continue;
        }
        eligible += 1;
        if satisfied(date, habit, entries) {
            met += 1;
        }
    }

    if eligible == 0 {
        return VACUOUS_SCORE;
    }
    100.0 * f64::from(met) / f64::from(eligible)
}

/// Scores for each day in `[today - count_back, today]`, oldest first.
pub fn score_series(habits: &[Habit], entries: &Entries, today: NaiveDate, count_back: u32) -> Vec<f64> {
    days_before(today, count_back)
        .iter_days()
        .take_while(|d| *d <= today)
        .map(|d| score(d, habits, entries))
        .collect()
}
