mod config;
pub mod habits_file;
pub mod log_file;

pub use config::{Config, DisplayConfig, WarningsConfig};
pub use habits_file::{parse_habits, HabitSet, EXAMPLE_HABITS};
pub use log_file::{append_record, parse_log, Field, Header, LoadedLog, LogFormat, LogRecord};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::entries::Entries;
use crate::error::{Result, StorageError, ValidationError};
use crate::habit::Habit;

/// Environment variable pointing at an explicit data directory.
pub const DIR_ENV: &str = "STREAKWISE_DIR";

/// Returns `$STREAKWISE_DIR`, or `~/.config/streakwise[-dev]/` based on
/// STREAKWISE_ENV.
///
/// Set STREAKWISE_ENV=dev to use development data directory. The directory
/// is not created here; see [`FileRepository::initialize`].
pub fn data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STREAKWISE_ENV").unwrap_or_else(|_| "production".to_string());

    if env == "dev" {
        base_dir.join("streakwise-dev")
    } else {
        base_dir.join("streakwise")
    }
}

/// Problem found in one line of the habits file or the log.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadIssue {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("missing date")]
    MissingDate,

    #[error("invalid date '{0}'")]
    InvalidDate(String),

    #[error("empty habit name")]
    EmptyHabit,

    #[error("missing result")]
    MissingStatus,

    #[error("invalid result '{0}' (expected y/n/s)")]
    InvalidStatus(String),

    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("no frequency in '{0}' (expected `Name: frequency`)")]
    MissingFrequency(String),

    #[error("{0}")]
    InvalidHabit(ValidationError),

    #[error("habit '{0}' is declared more than once")]
    DuplicateHabit(String),
}

/// A skipped or repaired record, with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadWarning {
    pub line: usize,
    pub issue: LoadIssue,
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.issue)
    }
}

/// Storage boundary of the engine.
///
/// Implementations validate everything they return; the engine only ever
/// sees well-formed outcomes.
pub trait Repository {
    /// Habit definitions in declaration order.
    fn load_habits(&self) -> Result<HabitSet>;

    /// Every recorded outcome plus the header describing the column order.
    fn load_entries(&self) -> Result<LoadedLog>;

    /// Append one outcome. Prior records are never rewritten.
    fn write_entry(&self, record: &LogRecord, header: &Header) -> Result<()>;
}

/// Habits file and log stored side by side in one directory.
#[derive(Debug, Clone)]
pub struct FileRepository {
    dir: PathBuf,
    format: LogFormat,
}

impl FileRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            format: LogFormat::default(),
        }
    }

    /// Repository in [`data_dir`].
    pub fn open_default() -> Self {
        Self::new(data_dir())
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn format(&self) -> &LogFormat {
        &self.format
    }

    pub fn habits_path(&self) -> PathBuf {
        self.dir.join("habits")
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.join("log")
    }

    /// Create the directory, an example habits file and an empty log.
    ///
    /// Existing files are left alone. Returns whether anything was created.
    pub fn initialize(&self) -> Result<bool> {
        std::fs::create_dir_all(&self.dir).map_err(|e| StorageError::from_io(&self.dir, e))?;

        let mut created = false;
        for (path, contents) in [
            (self.habits_path(), EXAMPLE_HABITS),
            (self.log_path(), ""),
        ] {
            if path.exists() {
                continue;
            }
            std::fs::write(&path, contents).map_err(|e| StorageError::from_io(&path, e))?;
            tracing::info!(path = %path.display(), "created");
            created = true;
        }
        Ok(created)
    }

    fn read(&self, path: &Path) -> Result<String> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                if !self.dir.exists() {
                    return Err(StorageError::NotInitialized {
                        path: self.dir.clone(),
                    }
                    .into());
                }
                if icloud_placeholder(path).exists() {
                    return Err(StorageError::SyncPending {
                        path: path.to_path_buf(),
                    }
                    .into());
                }
                Err(StorageError::Missing {
                    path: path.to_path_buf(),
                }
                .into())
            }
            Err(err) => Err(StorageError::from_io(path, err).into()),
        }
    }
}

/// `dir/.name.icloud`, the placeholder iCloud leaves while a file syncs.
fn icloud_placeholder(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.icloud"))
}

impl Repository for FileRepository {
    fn load_habits(&self) -> Result<HabitSet> {
        let contents = self.read(&self.habits_path())?;
        Ok(parse_habits(&contents))
    }

    fn load_entries(&self) -> Result<LoadedLog> {
        let contents = self.read(&self.log_path())?;
        Ok(parse_log(&contents, &self.format))
    }

    fn write_entry(&self, record: &LogRecord, header: &Header) -> Result<()> {
        if !self.dir.exists() {
            return Err(StorageError::NotInitialized {
                path: self.dir.clone(),
            }
            .into());
        }
        append_record(&self.log_path(), record, header, &self.format)
    }
}

/// Frozen view of habits and entries for one evaluation.
///
/// Habits carry their first record; entries are shared read-only so graph
/// workers can hold them without copying.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub habits: Vec<Habit>,
    pub entries: Arc<Entries>,
    pub header: Header,
    pub max_name_len: usize,
    pub warnings: Vec<LoadWarning>,
}

impl Snapshot {
    /// Load habits and entries and compute first records.
    pub fn load(repo: &impl Repository) -> Result<Self> {
        let HabitSet {
            mut habits,
            max_name_len,
            warnings: habit_warnings,
        } = repo.load_habits()?;
        let LoadedLog {
            entries,
            header,
            warnings: log_warnings,
        } = repo.load_entries()?;

        entries.first_records(&mut habits);
        tracing::debug!(
            habits = habits.len(),
            entries = entries.len(),
            "loaded snapshot"
        );

        Ok(Self {
            habits,
            entries: Arc::new(entries),
            header,
            max_name_len,
            warnings: habit_warnings.into_iter().chain(log_warnings).collect(),
        })
    }

    pub fn habit(&self, name: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.name == name)
    }

    /// Validate and append `record` through `repo`.
    ///
    /// # Errors
    ///
    /// The habit is not declared, or the repository write fails.
    pub fn record(&self, repo: &impl Repository, record: &LogRecord) -> Result<()> {
        if self.habit(&record.habit).is_none() {
            return Err(ValidationError::UnknownHabit(record.habit.clone()).into());
        }
        repo.write_entry(record, &self.header)
    }
}
