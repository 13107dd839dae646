//! Core error types for streakwise-core.
//!
//! The satisfaction engine itself never fails; everything here belongs to
//! the edges of the library: the file-backed repository, configuration and
//! validation of user supplied values.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for streakwise-core.
///
/// `Config` returns [`ConfigError`] directly since it never touches the
/// habit data.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised while reading or appending the habits file and the log.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The data directory has never been initialized
    #[error("Data directory not found at {path}; run `streakwise init` to create it")]
    NotInitialized { path: PathBuf },

    /// Directory exists but a required file is missing
    #[error("File not found at {path}; run `streakwise init` to create it")]
    Missing { path: PathBuf },

    /// Cloud storage has replaced the file with a placeholder
    #[error("{path} is still syncing (found a .icloud placeholder); wait for sync to finish")]
    SyncPending { path: PathBuf },

    /// Permission denied on a file we need
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Any other IO failure, with the file it happened on
    #[error("IO failure on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Classify an IO error raised on `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => StorageError::Missing { path },
            std::io::ErrorKind::PermissionDenied => StorageError::PermissionDenied { path },
            _ => StorageError::Io { path, source },
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Frequency text is not `N`, `0` or `T/N`
    #[error("Invalid frequency '{0}' (expected N or T/N with N >= 1)")]
    InvalidFrequency(String),

    /// Status code outside of the configured success/fail/skip codes
    #[error("Invalid result '{0}' (expected y/n/s)")]
    InvalidResult(String),

    /// Habit name is empty after trimming
    #[error("Habit name is empty")]
    EmptyHabitName,

    /// Habit is not declared in the habits file
    #[error("Unknown habit '{0}'")]
    UnknownHabit(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
