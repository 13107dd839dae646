use chrono::NaiveDate;
use clap::Args;
use streakwise_core::storage::LogRecord;

use super::{load_snapshot, today};

#[derive(Args)]
pub struct RecordArgs {
    /// Habit name as declared in the habits file
    habit: String,
    /// Result code: y (success), n (fail) or s (skip)
    result: String,
    /// Date to record [default: today]
    #[arg(long)]
    date: Option<NaiveDate>,
    #[arg(long, default_value = "")]
    comment: String,
    #[arg(long)]
    amount: Option<f64>,
}

pub fn run(args: RecordArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (repo, snapshot) = load_snapshot()?;
    let result = repo.format().parse_result(&args.result)?;
    let date = args.date.unwrap_or_else(today);

    let record = LogRecord {
        date,
        habit: args.habit,
        result,
        comment: args.comment,
        amount: args.amount,
    };
    snapshot.record(&repo, &record)?;

    tracing::debug!(habit = %record.habit, %date, "recorded");
    println!(
        "{date} {} {}",
        record.habit,
        repo.format().code(record.result)
    );
    Ok(())
}
