//! Outstanding habits that still need an entry.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::window::days_before;
use crate::entries::Entries;
use crate::habit::Habit;

/// Habits without an entry, per date in `[today - days_back, today]`.
///
/// Dates before a habit's first record are not asked about; dates with
/// nothing outstanding are omitted. Habit order follows `habits`.
pub fn todos(
    habits: &[Habit],
    entries: &Entries,
    today: NaiveDate,
    days_back: u32,
) -> BTreeMap<NaiveDate, Vec<String>> {
    let mut out = BTreeMap::new();
    for day in days_before(today, days_back).iter_days().take_while(|d| *d <= today) {
        let missing: Vec<String> = habits
            .iter()
            .filter(|h| h.is_tracked_on(day) && !entries.contains(day, &h.name))
            .map(|h| h.name.clone())
            .collect();
        if !missing.is_empty() {
            out.insert(day, missing);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::Outcome;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn lists_unlogged_habits_per_day() {
        let today = date(2025, 4, 2);
        let habits = vec![
            Habit::new("Walk", 1, 1).with_first_record(date(2025, 3, 1)),
            Habit::new("Read", 1, 7).with_first_record(date(2025, 4, 2)),
            Habit::new("New habit", 1, 1),
        ];
        let mut entries = Entries::new();
        entries.insert(today, "Walk", Outcome::success());
        entries.insert(date(2025, 4, 1), "Walk", Outcome::fail());
        entries.insert(today, "Read", Outcome::skip());

        let todo = todos(&habits, &entries, today, 1);
        assert_eq!(todo[&today], vec!["New habit".to_string()]);
        // Read had not started on the 1st.
        assert_eq!(todo[&date(2025, 4, 1)], vec!["New habit".to_string()]);
    }

    #[test]
    fn fully_logged_days_are_omitted() {
        let today = date(2025, 4, 2);
        let habits = vec![Habit::new("Walk", 1, 1).with_first_record(today)];
        let mut entries = Entries::new();
        entries.insert(today, "Walk", Outcome::success());
        assert!(todos(&habits, &entries, today, 0).is_empty());
    }
}
