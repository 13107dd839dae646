//! Temporal satisfaction engine.
//!
//! Everything here is a pure function of a habit, an [`Entries`] snapshot and
//! a date. Nothing looks at entries dated after the date being evaluated, and
//! nothing reads the clock: callers pass `today` explicitly.
//!
//! [`Entries`]: crate::entries::Entries

mod classify;
mod graph;
mod satisfaction;
mod score;
mod stats;
mod todos;
mod warning;
mod window;

pub use classify::{classify_day, DayState};
pub use graph::{
    build_graph, build_graphs_parallel, day_states, render, score_sparkline, GlyphSet,
};
pub use satisfaction::{satisfied, skipified, successes_in_window};
pub use score::{score, score_series, VACUOUS_SCORE};
pub use stats::{build_stats, HabitStats};
pub use todos::todos;
pub use warning::{horizon, warning, WarningPolicy};
pub use window::EvaluationWindow;
