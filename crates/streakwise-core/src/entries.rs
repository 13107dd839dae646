//! Recorded outcomes keyed by (date, habit).

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::habit::Habit;

/// Result of a habit on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeResult {
    Success,
    Fail,
    Skip,
}

impl OutcomeResult {
    /// Single-character code used in the log file.
    pub fn code(self) -> &'static str {
        match self {
            OutcomeResult::Success => "y",
            OutcomeResult::Fail => "n",
            OutcomeResult::Skip => "s",
        }
    }

    /// Parse a log status code.
    ///
    /// # Errors
    ///
    /// Anything other than `y`, `n` or `s` is [`ValidationError::InvalidResult`].
    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        match code.trim() {
            "y" => Ok(OutcomeResult::Success),
            "n" => Ok(OutcomeResult::Fail),
            "s" => Ok(OutcomeResult::Skip),
            other => Err(ValidationError::InvalidResult(other.to_string())),
        }
    }
}

/// Explicit recorded result of a habit on a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub result: OutcomeResult,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub comment: String,
}

impl Outcome {
    pub fn new(result: OutcomeResult) -> Self {
        Self {
            result,
            amount: 0.0,
            comment: String::new(),
        }
    }

    pub fn success() -> Self {
        Self::new(OutcomeResult::Success)
    }

    pub fn fail() -> Self {
        Self::new(OutcomeResult::Fail)
    }

    pub fn skip() -> Self {
        Self::new(OutcomeResult::Skip)
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn is_success(&self) -> bool {
        self.result == OutcomeResult::Success
    }

    pub fn is_skip(&self) -> bool {
        self.result == OutcomeResult::Skip
    }
}

/// Composite key into the entry store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitKey {
    pub date: NaiveDate,
    pub habit: String,
}

impl HabitKey {
    pub fn new(date: NaiveDate, habit: impl Into<String>) -> Self {
        Self {
            date,
            habit: habit.into(),
        }
    }
}

/// Snapshot of every recorded outcome.
///
/// Outcomes are grouped per habit so a lookup borrows the name instead of
/// building a [`HabitKey`]. Iteration order is unspecified; window scans walk
/// explicit date ranges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entries {
    map: HashMap<String, HashMap<NaiveDate, Outcome>>,
}

impl Entries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the outcome for (date, habit).
    pub fn insert(&mut self, date: NaiveDate, habit: impl Into<String>, outcome: Outcome) {
        self.map
            .entry(habit.into())
            .or_default()
            .insert(date, outcome);
    }

    pub fn get(&self, date: NaiveDate, habit: &str) -> Option<&Outcome> {
        self.map.get(habit)?.get(&date)
    }

    pub fn contains(&self, date: NaiveDate, habit: &str) -> bool {
        self.get(date, habit).is_some()
    }

    pub fn len(&self) -> usize {
        self.map.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.map.values().all(HashMap::is_empty)
    }

    /// Earliest date with an entry for `habit`.
    pub fn first_record(&self, habit: &str) -> Option<NaiveDate> {
        self.map.get(habit)?.keys().min().copied()
    }

    /// Set `first_record` on every habit.
    ///
    /// Habits without entries are reset to `None`.
    pub fn first_records(&self, habits: &mut [Habit]) {
        for habit in habits.iter_mut() {
            habit.first_record = self.first_record(&habit.name);
        }
    }
}

impl FromIterator<(HabitKey, Outcome)> for Entries {
    fn from_iter<I: IntoIterator<Item = (HabitKey, Outcome)>>(iter: I) -> Self {
        let mut entries = Self::new();
        entries.extend(iter);
        entries
    }
}

impl Extend<(HabitKey, Outcome)> for Entries {
    fn extend<I: IntoIterator<Item = (HabitKey, Outcome)>>(&mut self, iter: I) {
        for (key, outcome) in iter {
            self.insert(key.date, key.habit, outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn result_codes() {
        assert_eq!(OutcomeResult::from_code("y"), Ok(OutcomeResult::Success));
        assert_eq!(OutcomeResult::from_code(" n "), Ok(OutcomeResult::Fail));
        assert_eq!(OutcomeResult::from_code("s"), Ok(OutcomeResult::Skip));
        assert!(OutcomeResult::from_code("l").is_err());
        assert!(OutcomeResult::from_code("").is_err());
        assert_eq!(OutcomeResult::Skip.code(), "s");
    }

    #[test]
    fn insert_replaces_same_key() {
        let mut entries = Entries::new();
        entries.insert(date(2025, 3, 1), "Walk", Outcome::fail());
        entries.insert(date(2025, 3, 1), "Walk", Outcome::success().with_amount(2.0));
        assert_eq!(entries.len(), 1);
        let outcome = entries.get(date(2025, 3, 1), "Walk").unwrap();
        assert!(outcome.is_success());
        assert_eq!(outcome.amount, 2.0);
    }

    #[test]
    fn first_records_only_uses_present_entries() {
        let mut entries = Entries::new();
        entries.insert(date(2025, 3, 5), "Walk", Outcome::success());
        entries.insert(date(2025, 2, 27), "Walk", Outcome::fail());
        entries.insert(date(2025, 3, 9), "Read", Outcome::skip());

        let mut habits = vec![
            Habit::new("Walk", 1, 1),
            Habit::new("Read", 1, 7),
            Habit::new("Swim", 1, 7).with_first_record(date(2020, 1, 1)),
        ];
        entries.first_records(&mut habits);

        assert_eq!(habits[0].first_record, Some(date(2025, 2, 27)));
        assert_eq!(habits[1].first_record, Some(date(2025, 3, 9)));
        assert_eq!(habits[2].first_record, None);
        assert_eq!(entries.first_record("Walk"), Some(date(2025, 2, 27)));
    }

    #[test]
    fn collect_groups_outcomes_per_habit() {
        let entries: Entries = [
            (HabitKey::new(date(2025, 3, 1), "Walk"), Outcome::success()),
            (HabitKey::new(date(2025, 3, 2), "Walk"), Outcome::fail()),
            (HabitKey::new(date(2025, 3, 1), "Read"), Outcome::skip()),
            (HabitKey::new(date(2025, 3, 2), "Walk"), Outcome::success()),
        ]
        .into_iter()
        .collect();

        assert_eq!(entries.len(), 3);
        assert!(!entries.is_empty());
        let name = String::from("Walk");
        assert!(entries.get(date(2025, 3, 2), &name).unwrap().is_success());
        assert!(entries.get(date(2025, 3, 1), "Read").unwrap().is_skip());
        assert!(entries.get(date(2025, 3, 2), "Read").is_none());
        assert!(!entries.contains(date(2025, 3, 1), "Swim"));
        assert!(Entries::new().is_empty());
    }
}
