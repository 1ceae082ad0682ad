//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Stable sort by arrival time (ties keep input order).
//! 2. Run each task to completion at `max(clock, arrival)`.
//!
//! Idle gaps between a finished task and a later arrival are not
//! rendered; the next segment simply starts at the arrival.

use tracing::debug;

use super::{ordered_sim_tasks, CpuScheduler};
use crate::dispatching::rules;
use crate::models::{Algorithm, ScheduleResult, Task, Time};

/// Non-preemptive scheduler in arrival order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl CpuScheduler for FcfsScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn schedule(&self, tasks: &[Task]) -> ScheduleResult {
        let mut result = ScheduleResult::new(Algorithm::Fcfs);
        let mut clock: Time = 0;
        let mut total_wait: Time = 0;

        for mut task in ordered_sim_tasks(tasks, &[&rules::Fifo]) {
            task.wait_time = (clock - task.arrival_time).max(0);
            total_wait += task.wait_time;

            let start = clock.max(task.arrival_time);
            let end = start + task.original_service_time;
            debug!(task = %task.name, start, end, wait = task.wait_time, "FCFS dispatch");

            result.push_segment(task.name.clone(), start, end);
            task.remaining_time = 0;
            result.push_outcome(task.outcome(end));
            clock = end;
        }

        result.with_average(total_wait, tasks.len())
    }
}
