//! Round-Robin scheduler with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. When the ready queue is empty, jump to the next arrival and admit
//!    every arrived task to the back of the queue in arrival order.
//! 2. Run the front task for `min(remaining, quantum)`.
//! 3. Tasks that arrived by the end of that slice are pushed to the
//!    *front* of the queue, one at a time, so same-instant arrivals end up
//!    in reverse arrival order ahead of everyone already waiting.
//! 4. A finished task records `completion - service - arrival` as its
//!    wait; an unfinished one is requeued at the back.
//!
//! Step 3 changes observable wait times compared with plain FIFO
//! requeueing.
//!
//! The average waiting time divides by the total number of tasks.

use std::collections::VecDeque;
use std::num::NonZeroU32;

use tracing::debug;

use super::{ordered_sim_tasks, CpuScheduler};
use crate::dispatching::rules;
use crate::models::{Algorithm, ScheduleResult, SimTask, Task, Time};

/// Preemptive cyclic scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Task;
/// use u_cpusched::scheduler::{CpuScheduler, RoundRobinScheduler};
///
/// let tasks = vec![Task::new("A", 0, 2), Task::new("B", 0, 2)];
/// let result = RoundRobinScheduler::new().schedule(&tasks);
///
/// let order: Vec<&str> = result.segments.iter().map(|s| s.task_name.as_str()).collect();
/// assert_eq!(order, ["A", "B", "A", "B"]);
/// assert_eq!(result.average_wait, Some(2.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: NonZeroU32,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with a quantum of 1.
    pub fn new() -> Self {
        Self {
            quantum: NonZeroU32::MIN,
        }
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: NonZeroU32) -> Self {
        self.quantum = quantum;
        self
    }

    /// Current time quantum.
    pub fn quantum(&self) -> NonZeroU32 {
        self.quantum
    }
}

impl Default for RoundRobinScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for RoundRobinScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn schedule(&self, tasks: &[Task]) -> ScheduleResult {
        let quantum = Time::from(self.quantum.get());
        let mut result = ScheduleResult::new(Algorithm::RoundRobin);
        let mut pending: VecDeque<SimTask> = ordered_sim_tasks(tasks, &[&rules::Fifo]).into();
        let mut queue: VecDeque<SimTask> = VecDeque::new();
        let mut clock: Time = 0;
        let mut total_wait: Time = 0;

        loop {
            if queue.is_empty() {
                let Some(next) = pending.front() else {
                    break;
                };
                clock = clock.max(next.arrival_time);
                while let Some(task) = pop_arrived(&mut pending, clock) {
                    queue.push_back(task);
                }
            }

            let Some(mut task) = queue.pop_front() else {
                break;
            };

            let slice = task.remaining_time.min(quantum);
            let start = clock;
            clock += slice;
            debug!(task = %task.name, start, end = clock, "RR slice");
            result.push_segment(task.name.clone(), start, clock);

            while let Some(arrived) = pop_arrived(&mut pending, clock) {
                queue.push_front(arrived);
            }

            task.remaining_time -= slice;
            if task.is_finished() {
                task.wait_time = clock - task.original_service_time - task.arrival_time;
                total_wait += task.wait_time;
                result.push_outcome(task.outcome(clock));
            } else {
                queue.push_back(task);
            }
        }

        result.with_average(total_wait, tasks.len())
    }
}

/// Pops the earliest pending task if it has arrived by `clock`.
fn pop_arrived(pending: &mut VecDeque<SimTask>, clock: Time) -> Option<SimTask> {
    if pending.front()?.arrival_time <= clock {
        pending.pop_front()
    } else {
        None
    }
}
