//! Property tests shared by every discipline.

use std::num::NonZeroU32;

use proptest::prelude::*;
use u_cpusched::config::SimulationConfig;
use u_cpusched::models::{Algorithm, Task, Time};
use u_cpusched::scheduler::{run, run_all};

fn batch() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec((0..20i64, 1..6i64), 0..8).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (arrival, service))| Task::new(format!("T{i}"), arrival, service))
            .collect()
    })
}

fn config(quantum: u32) -> SimulationConfig {
    SimulationConfig::new().with_quantum(NonZeroU32::new(quantum).unwrap_or(NonZeroU32::MIN))
}

proptest! {
    #[test]
    fn every_task_runs_for_its_service_time(tasks in batch(), quantum in 1u32..4) {
        for result in run_all(&tasks, &config(quantum)) {
            prop_assert_eq!(result.outcomes.len(), tasks.len());
            for (idx, task) in tasks.iter().enumerate() {
                let name = format!("T{idx}");
                let executed: Time = result.segments_for(&name).iter().map(|s| s.duration()).sum();
                prop_assert_eq!(executed, task.service_time, "{} in {}", name, result.algorithm);
            }
        }
    }

    #[test]
    fn segments_are_positive_and_never_overlap(tasks in batch(), quantum in 1u32..4) {
        for result in run_all(&tasks, &config(quantum)) {
            for seg in &result.segments {
                prop_assert!(seg.end > seg.start);
            }
            for pair in result.segments.windows(2) {
                prop_assert!(pair[1].start >= pair[0].end);
            }
        }
    }

    #[test]
    fn no_task_runs_before_arrival(tasks in batch()) {
        for result in run_all(&tasks, &SimulationConfig::new()) {
            for (idx, task) in tasks.iter().enumerate() {
                for seg in result.segments_for(&format!("T{idx}")) {
                    prop_assert!(seg.start >= task.arrival_time);
                }
            }
        }
    }

    #[test]
    fn wait_is_turnaround_minus_service(tasks in batch(), quantum in 1u32..4) {
        for result in run_all(&tasks, &config(quantum)) {
            for outcome in &result.outcomes {
                prop_assert!(outcome.wait_time >= 0);
                prop_assert_eq!(
                    outcome.wait_time,
                    outcome.turnaround_time() - outcome.service_time
                );
            }
        }
    }

    #[test]
    fn average_defined_iff_batch_non_empty(tasks in batch()) {
        for result in run_all(&tasks, &SimulationConfig::new()) {
            prop_assert_eq!(result.average_wait.is_some(), !tasks.is_empty());
        }
    }

    #[test]
    fn runs_are_deterministic(tasks in batch()) {
        let config = SimulationConfig::new();
        for algorithm in Algorithm::ALL {
            prop_assert_eq!(
                run(algorithm, &tasks, &config),
                run(algorithm, &tasks, &config)
            );
        }
    }

    #[test]
    fn srtf_never_waits_longer_on_average_than_fcfs_for_simultaneous_arrivals(
        services in prop::collection::vec(1..8i64, 1..6)
    ) {
        let tasks: Vec<Task> = services
            .iter()
            .enumerate()
            .map(|(i, &s)| Task::new(format!("T{i}"), 0, s))
            .collect();
        let config = SimulationConfig::new();
        let srtf = run(Algorithm::Srtf, &tasks, &config).average_wait.unwrap_or(0.0);
        let fcfs = run(Algorithm::Fcfs, &tasks, &config).average_wait.unwrap_or(0.0);
        prop_assert!(srtf <= fcfs + 1e-9);
    }
}
