//! # Streakwise Core Library
//!
//! This library provides the core logic for the Streakwise habit tracker.
//! Habits declare how often they have to succeed ("3 times in any 7 days"),
//! and every past day is classified against that rolling requirement.
//!
//! ## Architecture
//!
//! - **Engine**: Pure functions deciding whether a day is satisfied, excused
//!   or a break, plus the scores, graphs, statistics and warnings built on them
//! - **Storage**: Plain-text habits file and append-only log behind the
//!   [`Repository`] trait, and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Habit`]: Habit definition with its target and interval
//! - [`Entries`]: Snapshot of recorded outcomes
//! - [`Snapshot`]: Habits and entries loaded together for one evaluation
//! - [`Config`]: Application configuration management

pub mod engine;
pub mod entries;
pub mod error;
pub mod habit;
pub mod storage;

pub use engine::{
    build_graph, build_graphs_parallel, build_stats, classify_day, satisfied, score, skipified,
    todos, warning, DayState, GlyphSet, HabitStats, WarningPolicy,
};
pub use entries::{Entries, HabitKey, Outcome, OutcomeResult};
pub use error::{ConfigError, CoreError, Result, StorageError, ValidationError};
pub use habit::{Frequency, Habit};
pub use storage::{Config, FileRepository, LogRecord, Repository, Snapshot};
