//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest segment end |
//! | Busy Time | Sum of segment durations |
//! | CPU Utilization | busy / makespan |
//! | Avg Turnaround | Mean of completion - arrival |
//! | Max Wait | Largest single waiting time |
//! | Throughput | Completed tasks per time unit |
//! | Context Switches | Changes of running task on the timeline |
//!
//! The average waiting time is copied from the result unchanged, since
//! each discipline defines its own divisor.

use serde::{Deserialize, Serialize};

use crate::models::{average, ScheduleResult, Time};

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: Time,
    /// Total CPU time spent running tasks.
    pub busy_time: Time,
    /// Fraction of `[0, makespan)` the CPU was busy. `None` for an empty run.
    pub cpu_utilization: Option<f64>,
    /// Mean turnaround time over completed tasks.
    pub avg_turnaround: Option<f64>,
    /// Largest waiting time of any completed task.
    pub max_wait: Time,
    /// Completed tasks per time unit. `None` for an empty run.
    pub throughput: Option<f64>,
    /// Number of transitions between different tasks.
    pub context_switches: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// The discipline's own average waiting time.
    pub avg_wait: Option<f64>,
}

impl ScheduleKpi {
    /// Computes KPIs from a scheduler result.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let makespan = result.makespan();
        let busy_time = result.total_busy_time();
        let completed = result.completed_count();

        let total_turnaround: Time = result.outcomes.iter().map(|o| o.turnaround_time()).sum();
        let max_wait = result
            .outcomes
            .iter()
            .map(|o| o.wait_time)
            .max()
            .unwrap_or(0);

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (None, None)
        } else {
            (
                Some(busy_time as f64 / makespan as f64),
                Some(completed as f64 / makespan as f64),
            )
        };

        let context_switches = result
            .merged_segments()
            .windows(2)
            .filter(|pair| pair[0].task_name != pair[1].task_name)
            .count();

        Self {
            makespan,
            busy_time,
            cpu_utilization,
            avg_turnaround: average(total_turnaround, completed),
            max_wait,
            throughput,
            context_switches,
            completed,
            avg_wait: result.average_wait,
        }
    }
}
