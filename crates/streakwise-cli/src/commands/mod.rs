pub mod config;
pub mod init;
pub mod log;
pub mod record;
pub mod stats;
pub mod todo;

use chrono::NaiveDate;
use streakwise_core::{FileRepository, Snapshot};

/// Local calendar date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Load the default repository, reporting skipped lines on stderr.
pub fn load_snapshot() -> Result<(FileRepository, Snapshot), Box<dyn std::error::Error>> {
    let repo = FileRepository::open_default();
    let snapshot = Snapshot::load(&repo)?;
    if !snapshot.warnings.is_empty() {
        eprintln!(
            "warning: {} line(s) in {} skipped or repaired",
            snapshot.warnings.len(),
            repo.dir().display()
        );
    }
    Ok((repo, snapshot))
}
