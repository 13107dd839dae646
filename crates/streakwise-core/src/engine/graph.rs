//! History graphs: one symbol per day over a lookback range.
//!
//! Graphs for different habits share nothing but the read-only entry
//! snapshot, so [`build_graphs_parallel`] computes them on the blocking pool
//! and merges the results by habit name.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use tokio::task::JoinSet;

use super::classify::{classify_day, DayState};
use super::window::days_before;
use crate::entries::Entries;
use crate::habit::Habit;

/// Symbols used to draw each [`DayState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    pub success: String,
    pub satisfied: String,
    pub skip: String,
    pub brk: String,
    pub idle: String,
    pub not_yet_tracked: String,
}

impl GlyphSet {
    /// Plain glyphs for terminals without color.
    pub fn plain() -> Self {
        Self {
            success: "━".into(),
            satisfied: "─".into(),
            skip: "•".into(),
            brk: "·".into(),
            idle: " ".into(),
            not_yet_tracked: " ".into(),
        }
    }

    /// Same glyphs wrapped in ANSI colors.
    pub fn colored() -> Self {
        let plain = Self::plain();
        Self {
            success: plain.success.green().bold().to_string(),
            satisfied: plain.satisfied.green().to_string(),
            skip: plain.skip.yellow().to_string(),
            brk: plain.brk.red().to_string(),
            idle: plain.idle,
            not_yet_tracked: plain.not_yet_tracked,
        }
    }

    pub fn for_mode(colorless: bool) -> Self {
        if colorless {
            Self::plain()
        } else {
            Self::colored()
        }
    }

    pub fn symbol(&self, state: DayState) -> &str {
        match state {
            DayState::Success => &self.success,
            DayState::Satisfied => &self.satisfied,
            DayState::Skip => &self.skip,
            DayState::Break => &self.brk,
            DayState::Idle => &self.idle,
            DayState::NotYetTracked => &self.not_yet_tracked,
        }
    }
}

/// Day states for `[today - count_back, today]`, oldest first.
///
/// Always `count_back + 1` long.
pub fn day_states(habit: &Habit, entries: &Entries, today: NaiveDate, count_back: u32) -> Vec<DayState> {
    days_before(today, count_back)
        .iter_days()
        .take_while(|d| *d <= today)
        .map(|d| classify_day(d, habit, entries))
        .collect()
}

/// One symbol per day for `[today - count_back, today]`.
///
/// `colorless` only switches the glyph set; the states are identical.
pub fn build_graph(
    habit: &Habit,
    entries: &Entries,
    today: NaiveDate,
    count_back: u32,
    colorless: bool,
) -> Vec<String> {
    let glyphs = GlyphSet::for_mode(colorless);
    day_states(habit, entries, today, count_back)
        .into_iter()
        .map(|state| glyphs.symbol(state).to_string())
        .collect()
}

/// Build every habit's graph concurrently and merge them by name.
///
/// A panic inside a worker is resumed on the caller.
pub async fn build_graphs_parallel(
    habits: &[Habit],
    entries: Arc<Entries>,
    today: NaiveDate,
    count_back: u32,
    colorless: bool,
) -> HashMap<String, Vec<String>> {
    let mut set = JoinSet::new();
    for habit in habits {
        let habit = habit.clone();
        let entries = Arc::clone(&entries);
        set.spawn_blocking(move || {
            let graph = build_graph(&habit, &entries, today, count_back, colorless);
            (habit.name, graph)
        });
    }

    let mut graphs = HashMap::with_capacity(habits.len());
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((name, graph)) => {
                graphs.insert(name, graph);
            }
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(err) => tracing::error!("graph worker cancelled: {err}"),
        }
    }
    tracing::debug!(habits = graphs.len(), count_back, "built habit graphs");
    graphs
}

/// Join a graph into a single line.
pub fn render(graph: &[String]) -> String {
    graph.concat()
}

const SPARKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Sparkline of daily scores (0-100), one character per day.
pub fn score_sparkline(scores: &[f64]) -> String {
    scores
        .iter()
        .map(|s| {
            let clamped = s.clamp(0.0, 100.0);
            let idx = ((clamped / 100.0) * (SPARKS.len() - 1) as f64).round() as usize;
            SPARKS[idx.min(SPARKS.len() - 1)]
        })
        .collect()
}
