//! Window-level satisfaction of a habit's frequency requirement.
//!
//! A habit is satisfied on `date` when the window ending at `date` holds at
//! least `target` successes. A day without a success of its own can still be
//! satisfied by earlier days in that window. Entries dated after `date` are
//! never consulted.

use chrono::NaiveDate;

use super::window::EvaluationWindow;
use crate::entries::{Entries, Outcome};
use crate::habit::Habit;

/// Whether `habit` meets its target in the window ending at `date`.
///
/// Tracking-only habits (`target == 0`) are never satisfied; callers that
/// score habits exclude them up front.
pub fn satisfied(date: NaiveDate, habit: &Habit, entries: &Entries) -> bool {
    !habit.is_tracking_only() && successes_in_window(date, habit, entries) >= habit.target
}

/// Number of successes in the window ending at `date`.
pub fn successes_in_window(date: NaiveDate, habit: &Habit, entries: &Entries) -> u32 {
    EvaluationWindow::for_habit(date, habit).count(&habit.name, entries, Outcome::is_success)
}

/// Whether a skip inside the window ending at `date` covers the day.
///
/// Daily habits have no grace period, so a skip only ever covers its own
/// day for them. Tracking-only habits are never skip-covered.
pub fn skipified(date: NaiveDate, habit: &Habit, entries: &Entries) -> bool {
    if habit.is_daily() || habit.is_tracking_only() {
        return false;
    }
    EvaluationWindow::for_habit(date, habit).any(&habit.name, entries, Outcome::is_skip)
}
