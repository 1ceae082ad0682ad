//! Shortest-Remaining-Time-First scheduler (preemptive).
//!
//! # Algorithm
//!
//! Discrete simulation in unit ticks. At every tick:
//!
//! 1. Admit all tasks that have arrived into the ready queue.
//! 2. If a ready task has *strictly* less remaining time than the running
//!    one, preempt: the incumbent goes to the back of the ready queue.
//! 3. If the CPU is idle, promote the ready task with least remaining time
//!    (ties: earliest enqueued).
//! 4. Run one tick, emitting a one-unit segment.
//!
//! Waiting time is accounted once per promotion as the time elapsed since
//! the task last became ready, so each task's total equals
//! `completion - arrival - service`.
//!
//! Segments are per tick. Use
//! [`ScheduleResult::merged_segments`](crate::models::ScheduleResult::merged_segments)
//! for display.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::{ordered_sim_tasks, CpuScheduler};
use crate::dispatching::{rules, select_best, DispatchContext};
use crate::models::{Algorithm, ScheduleResult, SimTask, Task, Time};

/// Preemptive shortest-remaining-time scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SrtfScheduler;

impl SrtfScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl CpuScheduler for SrtfScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Srtf
    }

    fn schedule(&self, tasks: &[Task]) -> ScheduleResult {
        let mut result = ScheduleResult::new(Algorithm::Srtf);
        let mut pending: VecDeque<SimTask> = ordered_sim_tasks(tasks, &[&rules::Fifo]).into();
        let mut ready: Vec<SimTask> = Vec::new();
        let mut running: Option<SimTask> = None;
        let mut ctx = DispatchContext::at_time(0);
        let mut total_wait: Time = 0;

        loop {
            let clock = ctx.clock;

            while let Some(next) = pending.front() {
                if next.arrival_time > clock {
                    break;
                }
                ready.extend(pending.pop_front());
            }

            let challenger = select_best(&rules::Srt, &ready, &ctx).filter(|&idx| {
                running
                    .as_ref()
                    .is_some_and(|current| ready[idx].remaining_time < current.remaining_time)
            });
            if let Some(idx) = challenger {
                if let Some(mut preempted) = running.take() {
                    debug!(
                        task = %preempted.name,
                        by = %ready[idx].name,
                        at = clock,
                        remaining = preempted.remaining_time,
                        "SRTF preempt"
                    );
                    preempted.ready_since = clock;
                    ready.push(preempted);
                }
                running = Some(promote(ready.remove(idx), clock));
            }

            if running.is_none() {
                if let Some(idx) = select_best(&rules::Srt, &ready, &ctx) {
                    running = Some(promote(ready.remove(idx), clock));
                }
            }

            let Some(current) = running.as_mut() else {
                // CPU idle with nothing ready: skip to the next arrival.
                match pending.front() {
                    Some(next) => {
                        ctx.advance_to(next.arrival_time);
                        continue;
                    }
                    None => break,
                }
            };

            trace!(task = %current.name, tick = clock, remaining = current.remaining_time, "SRTF tick");
            result.push_segment(current.name.clone(), clock, clock + 1);
            current.remaining_time -= 1;

            if current.is_finished() {
                if let Some(done) = running.take() {
                    total_wait += done.wait_time;
                    result.push_outcome(done.outcome(clock + 1));
                }
            }
            ctx.advance_to(clock + 1);
        }

        let completed = result.completed_count();
        result.with_average(total_wait, completed)
    }
}

/// Moves a ready task onto the CPU, charging the time it sat ready.
fn promote(mut task: SimTask, clock: Time) -> SimTask {
    task.wait_time += clock - task.ready_since;
    debug!(task = %task.name, at = clock, wait = task.wait_time, "SRTF dispatch");
    task
}
