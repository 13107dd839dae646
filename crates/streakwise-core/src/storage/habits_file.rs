//! The habits file: what to track and how often.
//!
//! ```text
//! ! Health
//! Gym: 3/7
//! Walk: 1
//! ```
//!
//! `! Heading` lines group the habits that follow, `#` lines are comments.

use super::{LoadIssue, LoadWarning};
use crate::habit::Habit;

/// Starter file written by `initialize`.
pub const EXAMPLE_HABITS: &str = indoc::indoc! {"
    # Habits to track, one per line as `Name: frequency`.
    #
    # Frequency is how often a habit has to succeed:
    #   1     every day
    #   7     once in any 7 days
    #   3/7   three times in any 7 days
    #   0     tracking only, never scored or warned about
    #
    # `! Heading` lines group the habits below them.

    ! Body
    Gym: 3/7
    Walk: 1
    Bed before midnight: 1

    ! Mind
    Read: 1
    Call a friend: 7
    Pages read: 0
"};

/// Parsed habits file.
#[derive(Debug, Clone, Default)]
pub struct HabitSet {
    /// Habits in file order
    pub habits: Vec<Habit>,
    /// Longest habit name, in characters
    pub max_name_len: usize,
    pub warnings: Vec<LoadWarning>,
}

impl HabitSet {
    pub fn get(&self, name: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.name == name)
    }
}

/// Parse the contents of a habits file.
pub fn parse_habits(contents: &str) -> HabitSet {
    let mut set = HabitSet::default();
    let mut heading = String::new();

    for (idx, raw) in contents.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(rest) = line.strip_prefix('!') {
            heading = rest.trim().to_string();
            continue;
        }

        let issue = match line.rsplit_once(':') {
            None => LoadIssue::MissingFrequency(line.to_string()),
            Some((name, frequency)) => match Habit::from_frequency(name, frequency) {
                Ok(habit) if set.get(&habit.name).is_some() => {
                    LoadIssue::DuplicateHabit(habit.name)
                }
                Ok(habit) => {
                    set.max_name_len = set.max_name_len.max(habit.name.chars().count());
                    set.habits.push(habit.with_heading(heading.clone()));
                    continue;
                }
                Err(err) => LoadIssue::InvalidHabit(err),
            },
        };
        tracing::warn!(line = line_no, "skipping habit: {issue}");
        set.warnings.push(LoadWarning { line: line_no, issue });
    }

    set
}
