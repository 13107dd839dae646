use std::sync::Arc;

use clap::Args;
use streakwise_core::engine::{
    build_graphs_parallel, build_stats, render, score_series, score_sparkline, warning,
    VACUOUS_SCORE,
};
use streakwise_core::Config;

use super::{load_snapshot, today};

#[derive(Args)]
pub struct LogArgs {
    /// Days of history to draw [default: display.count_back]
    #[arg(long)]
    count_back: Option<u32>,
    /// Draw without ANSI colors
    #[arg(long)]
    colorless: bool,
    /// Print statistics under each graph
    #[arg(long)]
    stats: bool,
}

pub async fn run(args: LogArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let (_, snapshot) = load_snapshot()?;
    let today = today();

    let count_back = args.count_back.unwrap_or(config.display.count_back);
    let colorless = args.colorless || config.display.colorless;
    let show_stats = args.stats || config.display.show_stats;
    let policy = config.warning_policy();

    let graphs = build_graphs_parallel(
        &snapshot.habits,
        Arc::clone(&snapshot.entries),
        today,
        count_back,
        colorless,
    )
    .await;

    let width = snapshot.max_name_len.max("Score".len());
    let mut heading: Option<&str> = None;
    for habit in &snapshot.habits {
        if heading != Some(habit.heading.as_str()) {
            if heading.is_some() {
                println!();
            }
            if !habit.heading.is_empty() {
                println!("{}", habit.heading);
            }
            heading = Some(habit.heading.as_str());
        }

        let at_risk = policy
            .as_ref()
            .is_some_and(|p| warning(today, habit, &snapshot.entries, p));
        let marker = if at_risk { "!" } else { " " };
        let graph = graphs.get(&habit.name).map(|g| render(g)).unwrap_or_default();
        println!("{:>width$} {marker}{graph}", habit.name);

        if show_stats {
            let stats = build_stats(habit, &snapshot.entries, today);
            println!(
                "{:>width$}  tracked {} days, {} kept, {} broken, {} skipped, total {}",
                "",
                stats.days_tracked,
                stats.streaks,
                stats.breaks,
                stats.skips,
                stats.total
            );
        }
    }

    let scores = score_series(&snapshot.habits, &snapshot.entries, today, count_back);
    let today_score = scores.last().copied().unwrap_or(VACUOUS_SCORE);
    println!();
    println!("{:>width$}  {}", "Score", score_sparkline(&scores));
    println!("Score: {today_score:.1}%");
    Ok(())
}
