//! CPU scheduling simulator.
//!
//! Runs a batch of tasks through classic single-CPU scheduling disciplines
//! and reports the execution timeline and average waiting time of each.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `SimTask`, `ExecutionSegment`,
//!   `ScheduleResult`, `Algorithm`
//! - **`dispatching`**: Priority rules (FIFO, SPN, HRRN, SRT) and selection
//! - **`scheduler`**: FCFS, SPN, HRRN, SRTF and Round-Robin engines plus KPIs
//! - **`validation`**: Batch integrity checks
//! - **`loader`**: Comma-separated batch reader
//! - **`config`**: Simulation settings
//! - **`gantt`**: Text Gantt charts and display colors
//! - **`report`**: Serializable per-discipline reports
//!
//! # Example
//!
//! ```
//! use u_cpusched::config::SimulationConfig;
//! use u_cpusched::loader;
//! use u_cpusched::models::Algorithm;
//! use u_cpusched::scheduler::run;
//!
//! let tasks = loader::parse_str("task,arrival,service\nA,0,2\nB,1,1\n").unwrap();
//! let result = run(Algorithm::Fcfs, &tasks, &SimulationConfig::new());
//! assert_eq!(result.average_wait, Some(0.5));
//! ```
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", ch. 9
//! - Silberschatz et al. (2018), "Operating System Concepts", ch. 5

pub mod config;
pub mod dispatching;
pub mod gantt;
pub mod loader;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
