//! Append-only log of daily outcomes.
//!
//! One record per line, fields joined by `" : "`:
//!
//! ```text
//! Date : Habit : Status : Comment : Amount
//! 2025-03-01 : Walk : y : around the lake : 5.2
//! ```
//!
//! The header line is optional; without it the default field order applies
//! and the first line is read as data. Bad records are skipped with a
//! [`LoadWarning`] instead of failing the load.

use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{LoadIssue, LoadWarning};
use crate::entries::{Entries, Outcome, OutcomeResult};
use crate::error::{StorageError, ValidationError};

/// Column of the log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Date,
    Habit,
    Status,
    Comment,
    Amount,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::Habit => "Habit",
            Field::Status => "Status",
            Field::Comment => "Comment",
            Field::Amount => "Amount",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "Date" => Some(Field::Date),
            "Habit" => Some(Field::Habit),
            "Status" => Some(Field::Status),
            "Comment" => Some(Field::Comment),
            "Amount" => Some(Field::Amount),
            _ => None,
        }
    }
}

/// Field order of a log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    fields: Vec<Field>,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            fields: vec![
                Field::Date,
                Field::Habit,
                Field::Status,
                Field::Comment,
                Field::Amount,
            ],
        }
    }
}

impl Header {
    /// Header from an explicit field order; duplicates are rejected.
    pub fn new(fields: Vec<Field>) -> Option<Self> {
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].contains(field) {
                return None;
            }
        }
        (!fields.is_empty()).then_some(Self { fields })
    }

    /// Parse a header line. Returns `None` unless every column is a known
    /// field name.
    pub fn parse(line: &str, separator: &str) -> Option<Self> {
        let fields = line
            .split(separator)
            .map(Field::from_name)
            .collect::<Option<Vec<_>>>()?;
        Self::new(fields)
    }

    pub fn index(&self, field: Field) -> Option<usize> {
        self.fields.iter().position(|f| *f == field)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_line(&self, separator: &str) -> String {
        self.fields
            .iter()
            .map(|f| f.name())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Fixed conventions of the log format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFormat {
    pub separator: String,
    pub comment_prefix: char,
    pub success_code: String,
    pub fail_code: String,
    pub skip_code: String,
    pub default_header: Header,
}

impl Default for LogFormat {
    fn default() -> Self {
        Self {
            separator: " : ".into(),
            comment_prefix: '#',
            success_code: OutcomeResult::Success.code().into(),
            fail_code: OutcomeResult::Fail.code().into(),
            skip_code: OutcomeResult::Skip.code().into(),
            default_header: Header::default(),
        }
    }
}

impl LogFormat {
    /// Map a status code to a result.
    ///
    /// # Errors
    ///
    /// Any code other than the three configured ones.
    pub fn parse_result(&self, code: &str) -> Result<OutcomeResult, ValidationError> {
        let code = code.trim();
        if code == self.success_code {
            Ok(OutcomeResult::Success)
        } else if code == self.fail_code {
            Ok(OutcomeResult::Fail)
        } else if code == self.skip_code {
            Ok(OutcomeResult::Skip)
        } else {
            Err(ValidationError::InvalidResult(code.to_string()))
        }
    }

    pub fn code(&self, result: OutcomeResult) -> &str {
        match result {
            OutcomeResult::Success => &self.success_code,
            OutcomeResult::Fail => &self.fail_code,
            OutcomeResult::Skip => &self.skip_code,
        }
    }
}

/// Result of reading a log file.
#[derive(Debug, Clone, Default)]
pub struct LoadedLog {
    pub entries: Entries,
    pub header: Header,
    pub warnings: Vec<LoadWarning>,
}

/// Parse the full contents of a log file.
pub fn parse_log(contents: &str, format: &LogFormat) -> LoadedLog {
    let mut lines = contents.lines().enumerate().peekable();
    let mut loaded = LoadedLog {
        header: format.default_header.clone(),
        ..LoadedLog::default()
    };

    if let Some((_, first)) = lines.peek() {
        if let Some(header) = Header::parse(first.trim_end_matches('\r'), &format.separator) {
            loaded.header = header;
            lines.next();
        }
    }

    for (idx, raw) in lines {
        let line_no = idx + 1;
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with(format.comment_prefix) {
            continue;
        }
        match parse_record(line, &loaded.header, format, line_no, &mut loaded.warnings) {
            Ok((date, habit, outcome)) => loaded.entries.insert(date, habit, outcome),
            Err(issue) => {
                tracing::warn!(line = line_no, "skipping log record: {issue}");
                loaded.warnings.push(LoadWarning { line: line_no, issue });
            }
        }
    }

    loaded
}

fn parse_record(
    line: &str,
    header: &Header,
    format: &LogFormat,
    line_no: usize,
    warnings: &mut Vec<LoadWarning>,
) -> Result<(NaiveDate, String, Outcome), LoadIssue> {
    let fields: Vec<&str> = line.split(format.separator.as_str()).collect();
    if fields.len() > header.len() {
        let issue = LoadIssue::FieldCount {
            expected: header.len(),
            found: fields.len(),
        };
        tracing::warn!(line = line_no, "{issue}");
        warnings.push(LoadWarning { line: line_no, issue });
    }
    let field = |f: Field| header.index(f).and_then(|i| fields.get(i)).map(|s| s.trim());

    let date_text = field(Field::Date).ok_or(LoadIssue::MissingDate)?;
    let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
        .map_err(|_| LoadIssue::InvalidDate(date_text.to_string()))?;

    let habit = field(Field::Habit).unwrap_or_default();
    if habit.is_empty() {
        return Err(LoadIssue::EmptyHabit);
    }

    let status = field(Field::Status).ok_or(LoadIssue::MissingStatus)?;
    let result = format
        .parse_result(status)
        .map_err(|_| LoadIssue::InvalidStatus(status.to_string()))?;

    let mut outcome = Outcome::new(result);
    if let Some(amount) = field(Field::Amount).filter(|a| !a.is_empty()) {
        match amount.parse::<f64>() {
            Ok(value) => outcome.amount = value,
            Err(_) => {
                let issue = LoadIssue::InvalidAmount(amount.to_string());
                tracing::warn!(line = line_no, "{issue}, using 0");
                warnings.push(LoadWarning { line: line_no, issue });
            }
        }
    }
    if let Some(comment) = field(Field::Comment) {
        outcome.comment = comment.to_string();
    }

    Ok((date, habit.to_string(), outcome))
}

/// One record to append to the log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub date: NaiveDate,
    pub habit: String,
    pub result: OutcomeResult,
    pub comment: String,
    pub amount: Option<f64>,
}

impl LogRecord {
    pub fn new(date: NaiveDate, habit: impl Into<String>, result: OutcomeResult) -> Self {
        Self {
            date,
            habit: habit.into(),
            result,
            comment: String::new(),
            amount: None,
        }
    }

    /// Render the record in `header` order.
    ///
    /// # Errors
    ///
    /// The habit name or comment contains the field separator or a newline.
    pub fn to_line(&self, header: &Header, format: &LogFormat) -> Result<String, ValidationError> {
        for (field, text) in [("habit", &self.habit), ("comment", &self.comment)] {
            if text.contains(format.separator.as_str()) || text.contains('\n') {
                return Err(ValidationError::InvalidValue {
                    field: field.to_string(),
                    message: format!("must not contain '{}' or a newline", format.separator),
                });
            }
        }
        if self.habit.trim().is_empty() {
            return Err(ValidationError::EmptyHabitName);
        }

        let columns: Vec<String> = header
            .fields()
            .iter()
            .map(|field| match field {
                Field::Date => self.date.format("%Y-%m-%d").to_string(),
                Field::Habit => self.habit.clone(),
                Field::Status => format.code(self.result).to_string(),
                Field::Comment => self.comment.clone(),
                Field::Amount => self.amount.map(|a| a.to_string()).unwrap_or_default(),
            })
            .collect();
        Ok(columns.join(&format.separator))
    }
}

/// Append `record` to the log at `path`, creating the file if needed.
///
/// Existing lines are never touched.
pub fn append_record(
    path: &Path,
    record: &LogRecord,
    header: &Header,
    format: &LogFormat,
) -> crate::Result<()> {
    let line = record.to_line(header, format)?;
    let io_err = |e| StorageError::from_io(path, e);
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;

    // A hand-edited log may lack its final newline.
    let mut prefix = "";
    if file.metadata().map_err(io_err)?.len() > 0 {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1)).map_err(io_err)?;
        file.read_exact(&mut last).map_err(io_err)?;
        if last[0] != b'\n' {
            prefix = "\n";
        }
    }
    file.write_all(format!("{prefix}{line}\n").as_bytes())
        .map_err(io_err)?;
    tracing::debug!(habit = %record.habit, date = %record.date, "appended log record");
    Ok(())
}
