//! At-risk detection for habits whose window is about to lapse.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::window::EvaluationWindow;
use crate::entries::{Entries, Outcome};
use crate::habit::Habit;

/// How far ahead of a lapse to warn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningPolicy {
    /// Fixed lead time in days; `None` derives it from the interval.
    pub lead_days: Option<u32>,
}

impl WarningPolicy {
    pub fn with_lead_days(lead_days: u32) -> Self {
        Self {
            lead_days: Some(lead_days),
        }
    }

    /// Lead time for `habit`: `interval / 7 + 1` unless overridden, and never
    /// more than `interval - 1`.
    pub fn lead_for(&self, habit: &Habit) -> u32 {
        let lead = self.lead_days.unwrap_or(habit.interval / 7 + 1);
        lead.min(habit.interval.saturating_sub(1))
    }
}

/// The part of the current window that is still inside the window `lead`
/// days from now.
pub fn horizon(date: NaiveDate, habit: &Habit, policy: &WarningPolicy) -> EvaluationWindow {
    let span = habit.interval - policy.lead_for(habit);
    EvaluationWindow::trailing(date, span, habit.first_record)
}

/// Whether `habit` is about to break as of `date`.
///
/// True when the habit is scored and tracked, and the horizon holds fewer
/// than `target` successes and, for non-daily habits, no skip. A skip
/// recorded on `date` itself suppresses the warning for any habit.
pub fn warning(date: NaiveDate, habit: &Habit, entries: &Entries, policy: &WarningPolicy) -> bool {
    if habit.is_tracking_only() || !habit.is_tracked_on(date) {
        return false;
    }
    if entries.get(date, &habit.name).is_some_and(Outcome::is_skip) {
        return false;
    }
    let window = horizon(date, habit, policy);
    if !habit.is_daily() && window.any(&habit.name, entries, Outcome::is_skip) {
        return false;
    }
    window.count(&habit.name, entries, Outcome::is_success) < habit.target
}
