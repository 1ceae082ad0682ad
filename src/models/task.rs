//! Task (process) model.
//!
//! A task is a unit of CPU work described by when it becomes eligible to
//! run and how much CPU time it needs. Schedulers never mutate the input
//! tasks; each run works on its own [`SimTask`] copies.
//!
//! # Time Representation
//! All times are integer units of a simulated clock starting at t=0.
//! The consumer defines what a unit means (ms, ticks, seconds).

use serde::{Deserialize, Serialize};

use super::TaskOutcome;

/// Simulated time, in abstract integer units.
pub type Time = i64;

/// A task to be scheduled on the simulated CPU.
///
/// Names are opaque and not required to be unique.
///
/// # Preconditions
/// `arrival_time >= 0` and `service_time > 0`. The schedulers do not check
/// these; see [`crate::validation::validate_tasks`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier (display name).
    pub name: String,
    /// Instant the task becomes eligible to run.
    pub arrival_time: Time,
    /// Total CPU time required.
    pub service_time: Time,
}

impl Task {
    /// Creates a new task.
    pub fn new(name: impl Into<String>, arrival_time: Time, service_time: Time) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            service_time,
        }
    }
}

/// Per-run mutable view of a [`Task`].
///
/// Owned by exactly one scheduler run and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimTask {
    pub name: String,
    pub arrival_time: Time,
    /// Service time of the source task. Never changes during a run.
    pub original_service_time: Time,
    /// CPU time still needed.
    pub remaining_time: Time,
    /// Instant the task last entered the ready state.
    pub ready_since: Time,
    /// Waiting time accumulated so far.
    pub wait_time: Time,
}

impl SimTask {
    /// Returns true once no CPU time is left.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time <= 0
    }

    /// CPU time consumed so far.
    #[inline]
    pub fn executed_time(&self) -> Time {
        self.original_service_time - self.remaining_time
    }

    /// Response ratio at `clock`: `(wait + service) / service`.
    pub fn response_ratio(&self, clock: Time) -> f64 {
        let wait = (clock - self.arrival_time) as f64;
        let service = self.original_service_time as f64;
        (wait + service) / service
    }

    /// Completion record for this task, finishing at `completion_time`.
    pub fn outcome(&self, completion_time: Time) -> TaskOutcome {
        TaskOutcome {
            name: self.name.clone(),
            arrival_time: self.arrival_time,
            service_time: self.original_service_time,
            completion_time,
            wait_time: self.wait_time,
        }
    }
}

impl From<&Task> for SimTask {
    fn from(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            arrival_time: task.arrival_time,
            original_service_time: task.service_time,
            remaining_time: task.service_time,
            ready_since: task.arrival_time,
            wait_time: 0,
        }
    }
}

/// Clones a batch into fresh simulation copies, preserving order.
pub fn sim_tasks(tasks: &[Task]) -> Vec<SimTask> {
    tasks.iter().map(SimTask::from).collect()
}
