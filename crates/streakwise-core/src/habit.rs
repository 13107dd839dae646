//! Habit definitions.
//!
//! A habit is declared in the habits file as `Name: frequency`. The frequency
//! text is parsed once into a target/interval pair:
//! - `"1"` succeed every day
//! - `"7"` succeed once in any trailing 7-day window
//! - `"3/7"` succeed three times in any trailing 7-day window
//! - `"0"` tracking only, never scored

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Parsed `target`/`interval` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequency {
    /// Successes required inside the window (0 = tracking only)
    pub target: u32,
    /// Window length in days, always >= 1
    pub interval: u32,
}

impl Frequency {
    pub const DAILY: Frequency = Frequency { target: 1, interval: 1 };

    /// Parse frequency text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidFrequency`] for non-numeric text or a
    /// zero interval.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        let invalid = || ValidationError::InvalidFrequency(text.to_string());

        match text.split_once('/') {
            Some((target, interval)) => {
                let target: u32 = target.trim().parse().map_err(|_| invalid())?;
                let interval: u32 = interval.trim().parse().map_err(|_| invalid())?;
                if interval == 0 {
                    return Err(invalid());
                }
                Ok(Frequency { target, interval })
            }
            None => {
                let interval: u32 = text.parse().map_err(|_| invalid())?;
                if interval == 0 {
                    Ok(Frequency { target: 0, interval: 1 })
                } else {
                    Ok(Frequency { target: 1, interval })
                }
            }
        }
    }
}

/// Static per-habit configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub name: String,
    /// Heading group from the habits file, empty when none was declared
    #[serde(default)]
    pub heading: String,
    pub target: u32,
    pub interval: u32,
    /// Earliest date with any entry for this habit. `None` until
    /// [`crate::entries::Entries::first_records`] has seen an entry.
    #[serde(default)]
    pub first_record: Option<NaiveDate>,
}

impl Habit {
    pub fn new(name: impl Into<String>, target: u32, interval: u32) -> Self {
        Self {
            name: name.into(),
            heading: String::new(),
            target,
            interval: interval.max(1),
            first_record: None,
        }
    }

    /// Build a habit from its declared frequency text.
    pub fn from_frequency(name: impl Into<String>, frequency: &str) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyHabitName);
        }
        let freq = Frequency::parse(frequency)?;
        Ok(Self::new(name.trim(), freq.target, freq.interval))
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    pub fn with_first_record(mut self, date: NaiveDate) -> Self {
        self.first_record = Some(date);
        self
    }

    pub fn frequency(&self) -> Frequency {
        Frequency {
            target: self.target,
            interval: self.interval,
        }
    }

    /// Target 0: recorded for the numbers, never scored or warned about.
    pub fn is_tracking_only(&self) -> bool {
        self.target == 0
    }

    pub fn is_daily(&self) -> bool {
        self.interval <= 1
    }

    /// Whether `date` falls on or after the first record.
    ///
    /// A habit without any record yet counts as tracked so brand new habits
    /// still show up in scores and todos.
    pub fn is_tracked_on(&self, date: NaiveDate) -> bool {
        self.first_record.map_or(true, |first| date >= first)
    }
}
