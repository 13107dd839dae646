//! Backward-looking evaluation windows.

use chrono::{Days, NaiveDate};

use crate::entries::{Entries, Outcome};
use crate::habit::Habit;

/// `n` days before `date`, saturating at the earliest representable date.
pub(crate) fn days_before(date: NaiveDate, n: u32) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(n)))
        .unwrap_or(NaiveDate::MIN)
}

/// Inclusive date range `[start, end]`; empty when `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl EvaluationWindow {
    /// The window used to evaluate `habit` as of `date`:
    /// `[max(date - interval + 1, first_record), date]`.
    pub fn for_habit(date: NaiveDate, habit: &Habit) -> Self {
        Self::trailing(date, habit.interval, habit.first_record)
    }

    /// The trailing `span` days ending at `date`, clipped to `floor`.
    pub fn trailing(date: NaiveDate, span: u32, floor: Option<NaiveDate>) -> Self {
        let mut start = days_before(date, span.saturating_sub(1));
        if let Some(floor) = floor {
            if floor > start {
                start = floor;
            }
        }
        Self { start, end: date }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Days of the window in chronological order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        let first = (!self.is_empty()).then_some(self.start);
        first
            .into_iter()
            .flat_map(|start| start.iter_days())
            .take_while(move |d| *d <= end)
    }

    /// Number of days in the window whose outcome for `habit` matches `pred`.
    ///
    /// Only days inside the window are looked up, so entries dated after
    /// `end` can never contribute.
    pub fn count<F>(&self, habit: &str, entries: &Entries, pred: F) -> u32
    where
        F: Fn(&Outcome) -> bool,
    {
        let mut count = 0;
        for day in self.days() {
            if entries.get(day, habit).is_some_and(&pred) {
                count += 1;
            }
        }
        count
    }

    pub fn any<F>(&self, habit: &str, entries: &Entries, pred: F) -> bool
    where
        F: Fn(&Outcome) -> bool,
    {
        self.days()
            .any(|day| entries.get(day, habit).is_some_and(&pred))
    }
}
