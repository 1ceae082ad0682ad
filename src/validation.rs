//! Input validation for task batches.
//!
//! The schedulers assume well-formed input and do not check it: a
//! non-positive service time can make the preemptive loops run forever.
//! Loaders call [`validate_tasks`] before handing a batch to the engine.
//! Detects:
//! - Empty batches
//! - Non-positive service times
//! - Negative arrival times
//! - Blank task names
//! - Batches whose simulated clock could exceed the `Time` range
//!
//! Duplicate names are allowed; names are display labels only.

use crate::models::{Task, Time};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The batch contains no tasks.
    EmptyBatch,
    /// A task needs zero or negative CPU time.
    NonPositiveServiceTime,
    /// A task arrives before t=0.
    NegativeArrivalTime,
    /// A task has a blank name.
    EmptyName,
    /// Latest arrival plus total service time overflows `Time`.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a task batch.
///
/// Checks:
/// 1. The batch has at least one task
/// 2. Every service time is positive
/// 3. Every arrival time is non-negative
/// 4. Every name is non-blank
/// 5. `max(arrival) + sum(service)` fits in `Time`, which bounds every
///    clock value a scheduler can reach
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();

    if tasks.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyBatch,
            "Task batch is empty",
        ));
    }

    for (idx, task) in tasks.iter().enumerate() {
        let label = if task.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Task #{} has an empty name", idx + 1),
            ));
            format!("#{}", idx + 1)
        } else {
            format!("'{}'", task.name)
        };

        if task.service_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveServiceTime,
                format!(
                    "Task {label} has non-positive service time {}",
                    task.service_time
                ),
            ));
        }

        if task.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrivalTime,
                format!(
                    "Task {label} has negative arrival time {}",
                    task.arrival_time
                ),
            ));
        }
    }

    let latest_arrival = tasks.iter().map(|t| t.arrival_time).max().unwrap_or(0).max(0);
    let horizon = tasks
        .iter()
        .map(|t| t.service_time.max(0))
        .try_fold(latest_arrival, Time::checked_add);
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total service time overflows the time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
