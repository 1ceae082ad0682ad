//! CPU schedulers and KPI evaluation.
//!
//! Five classical disciplines, each a pure function from a task batch to
//! a [`ScheduleResult`]. Every run clones the batch into its own
//! [`SimTask`](crate::models::SimTask) copies, so runs never observe each
//! other and may execute in parallel.
//!
//! | Scheduler | Preemptive | Average wait divisor |
//! |-----------|-----------|----------------------|
//! | FCFS | no | task count |
//! | SPN | no | completed count |
//! | HRRN | no | completed count |
//! | SRTF | yes, per tick | completed count |
//! | RR | yes, per quantum | task count |
//!
//! # Example
//!
//! ```
//! use u_cpusched::config::SimulationConfig;
//! use u_cpusched::models::{Algorithm, Task};
//! use u_cpusched::scheduler;
//!
//! let tasks = vec![Task::new("A", 0, 4), Task::new("B", 1, 2), Task::new("C", 2, 1)];
//! let result = scheduler::run(Algorithm::Spn, &tasks, &SimulationConfig::default());
//!
//! let order: Vec<&str> = result.segments.iter().map(|s| s.task_name.as_str()).collect();
//! assert_eq!(order, ["A", "C", "B"]);
//! ```
//!
//! # References
//!
//! - Stallings, "Operating Systems: Internals and Design Principles", Ch. 9
//! - Silberschatz et al., "Operating System Concepts", Ch. 5

mod fcfs;
mod kpi;
mod non_preemptive;
mod round_robin;
mod srtf;

pub use fcfs::FcfsScheduler;
pub use kpi::ScheduleKpi;
pub use non_preemptive::{HrrnScheduler, SpnScheduler};
pub use round_robin::RoundRobinScheduler;
pub use srtf::SrtfScheduler;

use std::fmt::Debug;

use crate::config::SimulationConfig;
use crate::dispatching::{sort_indices, DispatchContext, DispatchingRule};
use crate::models::{sim_tasks, Algorithm, ScheduleResult, SimTask, Task};

/// A CPU scheduling discipline.
///
/// Implementations must be deterministic: the same batch always yields
/// the same result.
pub trait CpuScheduler: Send + Sync + Debug {
    /// Discipline implemented by this scheduler.
    fn algorithm(&self) -> Algorithm;

    /// Simulates the batch and returns its timeline and average wait.
    fn schedule(&self, tasks: &[Task]) -> ScheduleResult;
}

/// Builds the scheduler for `algorithm` with settings from `config`.
pub fn scheduler_for(algorithm: Algorithm, config: &SimulationConfig) -> Box<dyn CpuScheduler> {
    match algorithm {
        Algorithm::Fcfs => Box::new(FcfsScheduler::new()),
        Algorithm::Spn => Box::new(SpnScheduler::new()),
        Algorithm::Hrrn => Box::new(HrrnScheduler::new()),
        Algorithm::Srtf => Box::new(SrtfScheduler::new()),
        Algorithm::RoundRobin => Box::new(RoundRobinScheduler::new().with_quantum(config.quantum)),
    }
}

/// Runs a single discipline over `tasks`.
pub fn run(algorithm: Algorithm, tasks: &[Task], config: &SimulationConfig) -> ScheduleResult {
    scheduler_for(algorithm, config).schedule(tasks)
}

/// Runs every configured discipline, in configuration order.
pub fn run_all(tasks: &[Task], config: &SimulationConfig) -> Vec<ScheduleResult> {
    config
        .algorithms
        .iter()
        .map(|&algorithm| run(algorithm, tasks, config))
        .collect()
}

/// Simulation copies of `tasks`, ordered by the given rule chain.
pub(crate) fn ordered_sim_tasks(tasks: &[Task], rules: &[&dyn DispatchingRule]) -> Vec<SimTask> {
    let sims = sim_tasks(tasks);
    sort_indices(rules, &sims, &DispatchContext::default())
        .into_iter()
        .map(|idx| sims[idx].clone())
        .collect()
}
