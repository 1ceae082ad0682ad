//! CPU scheduling domain models.
//!
//! Provides the data types shared by every scheduler: input tasks,
//! their per-run simulation copies, and the schedule output.
//!
//! # Lifecycle
//!
//! | Type | Created | Mutated | Owner |
//! |------|---------|---------|-------|
//! | Task | before any run | never | caller |
//! | SimTask | at run start | during the run | one scheduler run |
//! | ScheduleResult | at run end | never | caller |

mod algorithm;
mod schedule;
mod task;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub(crate) use schedule::average;
pub use schedule::{ExecutionSegment, ScheduleResult, TaskOutcome};
pub use task::{sim_tasks, SimTask, Task, Time};
