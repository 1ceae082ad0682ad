//! Task batch loader.
//!
//! Reads the comma-separated batch format:
//!
//! ```text
//! task,arrival,service
//! A,0,4
//! B,1,2
//! ```
//!
//! The first line is a header and is always skipped. Fields are trimmed,
//! blank lines are ignored and numbers must be integers. Parsed batches
//! are validated before being returned.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::models::{Task, Time};
use crate::validation::{validate_tasks, ValidationError};

/// Errors loading a task batch.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read task batch: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: missing {field} field")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: invalid {field} '{value}', expected an integer")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("invalid task batch: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Loads and validates a batch file.
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<Task>, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading task batch");
    parse_reader(File::open(path)?)
}

/// Parses and validates a batch from any reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Vec<Task>, LoadError> {
    let mut tasks = Vec::new();
    for (idx, line) in BufReader::new(reader).lines().enumerate().skip(1) {
        if let Some(task) = parse_line(&line?, idx + 1)? {
            tasks.push(task);
        }
    }
    finish(tasks)
}

/// Parses and validates a batch held in memory.
pub fn parse_str(text: &str) -> Result<Vec<Task>, LoadError> {
    parse_reader(text.as_bytes())
}

fn finish(tasks: Vec<Task>) -> Result<Vec<Task>, LoadError> {
    validate_tasks(&tasks).map_err(|errors| {
        warn!(count = errors.len(), "task batch rejected");
        LoadError::Invalid(errors)
    })?;
    debug!(tasks = tasks.len(), "task batch loaded");
    Ok(tasks)
}

/// Parses one data row. Blank rows yield `None`.
fn parse_line(line: &str, line_no: usize) -> Result<Option<Task>, LoadError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut fields = line.split(',').map(str::trim);
    let name = fields.next().unwrap_or_default();
    let arrival = parse_time(fields.next(), line_no, "arrival")?;
    let service = parse_time(fields.next(), line_no, "service")?;

    Ok(Some(Task::new(name, arrival, service)))
}

fn parse_time(field: Option<&str>, line: usize, name: &'static str) -> Result<Time, LoadError> {
    let value = match field {
        Some(v) if !v.is_empty() => v,
        _ => return Err(LoadError::MissingField { line, field: name }),
    };
    value.parse().map_err(|_| LoadError::InvalidNumber {
        line,
        field: name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_parse_basic() {
        let tasks = parse_str("task,enter_time,time_needed\nA,0,4\nB, 1 , 2\n").unwrap();
        assert_eq!(tasks, vec![Task::new("A", 0, 4), Task::new("B", 1, 2)]);
    }

    #[test]
    fn test_header_always_skipped() {
        // A numeric first line is still treated as the header.
        let tasks = parse_str("X,0,1\nA,0,4").unwrap();
        assert_eq!(tasks, vec![Task::new("A", 0, 4)]);
    }

    #[test]
    fn test_blank_and_crlf_lines() {
        let tasks = parse_str("name,arrival,service\r\nA,0,4\r\n\r\n  \nB,2,1\r\n").unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1], Task::new("B", 2, 1));
    }

    #[test]
    fn test_missing_field() {
        let err = parse_str("h\nA,0\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingField {
                line: 2,
                field: "service"
            }
        ));
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_str("h\nA,0,2\nB,x,1\n").unwrap_err();
        match err {
            LoadError::InvalidNumber { line, field, value } => {
                assert_eq!(line, 3);
                assert_eq!(field, "arrival");
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_fractional_rejected() {
        assert!(matches!(
            parse_str("h\nA,0,1.5\n"),
            Err(LoadError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_validation_applied() {
        let err = parse_str("h\nA,0,0\n").unwrap_err();
        match err {
            LoadError::Invalid(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveServiceTime);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_overflowing_batch_rejected() {
        let text = format!("h\nA,{},5\n", Time::MAX - 1);
        match parse_str(&text).unwrap_err() {
            LoadError::Invalid(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_only_is_empty_batch() {
        let err = parse_str("task,arrival,service\n").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_parse_reader_matches_parse_str() {
        let text = "t,a,s\nA,0,3\nB,1,1\n";
        let from_reader = parse_reader(text.as_bytes()).unwrap();
        assert_eq!(from_reader, parse_str(text).unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_path("/nonexistent/batch.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
