//! Non-preemptive rule-driven schedulers (SPN, HRRN).
//!
//! # Algorithm
//!
//! Both disciplines share one driving loop:
//!
//! 1. `available` = pending tasks with `arrival <= clock`.
//! 2. If none are available, jump the clock to the earliest pending
//!    arrival (the idle gap is not rendered) and retry.
//! 3. Otherwise pick the best task by the discipline's dispatching rule
//!    (ties: earliest in pending order) and run it to completion.
//!
//! The average waiting time divides by the number of completed tasks.
//!
//! # Complexity
//! O(n²) rule evaluations for n tasks.

use tracing::debug;

use super::{ordered_sim_tasks, CpuScheduler};
use crate::dispatching::{rules, select_best_where, DispatchContext, DispatchingRule};
use crate::models::{sim_tasks, Algorithm, ScheduleResult, SimTask, Task, Time};

/// Shortest Process Next (non-preemptive SJF).
///
/// Pending tasks are pre-sorted by arrival time, then service time, so
/// equal service times go to the earlier arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpnScheduler;

/// Highest Response Ratio Next.
///
/// Pending tasks keep input order; ratio ties go to the earlier entry in
/// the batch, not the earlier arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct HrrnScheduler;

impl SpnScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl HrrnScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl CpuScheduler for SpnScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Spn
    }

    fn schedule(&self, tasks: &[Task]) -> ScheduleResult {
        let pending = ordered_sim_tasks(tasks, &[&rules::Fifo, &rules::Spn]);
        run_to_completion(Algorithm::Spn, &rules::Spn, pending)
    }
}

impl CpuScheduler for HrrnScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Hrrn
    }

    fn schedule(&self, tasks: &[Task]) -> ScheduleResult {
        run_to_completion(Algorithm::Hrrn, &rules::Hrrn, sim_tasks(tasks))
    }
}

/// Dispatches `pending` one task at a time using `rule`.
fn run_to_completion<R: DispatchingRule>(
    algorithm: Algorithm,
    rule: &R,
    mut pending: Vec<SimTask>,
) -> ScheduleResult {
    let mut result = ScheduleResult::new(algorithm);
    let mut ctx = DispatchContext::at_time(0);
    let mut total_wait: Time = 0;

    while !pending.is_empty() {
        let clock = ctx.clock;
        let Some(idx) = select_best_where(rule, &pending, &ctx, |t| t.arrival_time <= clock) else {
            if let Some(next_arrival) = pending.iter().map(|t| t.arrival_time).min() {
                ctx.advance_to(next_arrival);
            }
            continue;
        };

        let mut task = pending.remove(idx);
        task.wait_time = clock - task.arrival_time;
        total_wait += task.wait_time;

        let end = clock + task.original_service_time;
        debug!(
            %algorithm,
            rule = rule.name(),
            task = %task.name,
            start = clock,
            end,
            wait = task.wait_time,
            "dispatch"
        );

        result.push_segment(task.name.clone(), clock, end);
        task.remaining_time = 0;
        result.push_outcome(task.outcome(end));
        ctx.advance_to(end);
    }

    let completed = result.completed_count();
    result.with_average(total_wait, completed)
}
