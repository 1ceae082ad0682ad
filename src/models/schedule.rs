//! Schedule (simulation output) model.
//!
//! A schedule result is the Gantt timeline produced by one scheduler run,
//! plus per-task outcomes and the discipline's average waiting time.

use serde::{Deserialize, Serialize};

use super::{Algorithm, Time};

/// One contiguous interval during which a task occupies the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSegment {
    /// Name of the running task.
    pub task_name: String,
    /// Start time (inclusive).
    pub start: Time,
    /// End time (exclusive). Always greater than `start`.
    pub end: Time,
}

/// Completion record for one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskOutcome {
    pub name: String,
    pub arrival_time: Time,
    pub service_time: Time,
    /// Instant the task's last unit of work finished.
    pub completion_time: Time,
    /// Waiting time as accounted by the discipline.
    pub wait_time: Time,
}

/// Output of one scheduler run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Discipline that produced this result.
    pub algorithm: Algorithm,
    /// Gantt timeline, in execution order.
    pub segments: Vec<ExecutionSegment>,
    /// Completed tasks, in completion order.
    pub outcomes: Vec<TaskOutcome>,
    /// Average waiting time. `None` when undefined (nothing to average).
    pub average_wait: Option<f64>,
}

impl ExecutionSegment {
    /// Creates a new segment.
    pub fn new(task_name: impl Into<String>, start: Time, end: Time) -> Self {
        Self {
            task_name: task_name.into(),
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

impl TaskOutcome {
    /// Completion minus arrival.
    #[inline]
    pub fn turnaround_time(&self) -> Time {
        self.completion_time - self.arrival_time
    }
}

impl ScheduleResult {
    /// Creates an empty result for `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            segments: Vec::new(),
            outcomes: Vec::new(),
            average_wait: None,
        }
    }

    /// Appends a segment.
    pub fn push_segment(&mut self, task_name: impl Into<String>, start: Time, end: Time) {
        self.segments.push(ExecutionSegment::new(task_name, start, end));
    }

    /// Records a task completion.
    pub fn push_outcome(&mut self, outcome: TaskOutcome) {
        self.outcomes.push(outcome);
    }

    /// Sets `average_wait` to `total / divisor`, or `None` when `divisor` is zero.
    pub fn with_average(mut self, total_wait: Time, divisor: usize) -> Self {
        self.average_wait = average(total_wait, divisor);
        self
    }

    /// Whether the run produced no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of completed tasks.
    pub fn completed_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Sum of segment durations.
    pub fn total_busy_time(&self) -> Time {
        self.segments.iter().map(|s| s.duration()).sum()
    }

    /// Latest segment end (0 when empty).
    pub fn makespan(&self) -> Time {
        self.segments.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// All segments belonging to tasks named `name`.
    pub fn segments_for(&self, name: &str) -> Vec<&ExecutionSegment> {
        self.segments
            .iter()
            .filter(|s| s.task_name == name)
            .collect()
    }

    /// Timeline with back-to-back segments of the same task joined.
    ///
    /// SRTF emits one segment per tick; this is the display form.
    pub fn merged_segments(&self) -> Vec<ExecutionSegment> {
        let mut merged: Vec<ExecutionSegment> = Vec::with_capacity(self.segments.len());
        for seg in &self.segments {
            match merged.last_mut() {
                Some(last) if last.task_name == seg.task_name && last.end == seg.start => {
                    last.end = seg.end;
                }
                _ => merged.push(seg.clone()),
            }
        }
        merged
    }
}

/// `total / divisor` as f64, undefined for an empty divisor.
pub(crate) fn average(total: Time, divisor: usize) -> Option<f64> {
    if divisor == 0 {
        None
    } else {
        Some(total as f64 / divisor as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ScheduleResult {
        let mut r = ScheduleResult::new(Algorithm::Srtf);
        r.push_segment("A", 0, 1);
        r.push_segment("B", 1, 2);
        r.push_segment("A", 2, 3);
        r.push_segment("A", 3, 4);
        r
    }

    #[test]
    fn test_busy_time_and_makespan() {
        let r = sample_result();
        assert_eq!(r.total_busy_time(), 4);
        assert_eq!(r.makespan(), 4);
    }

    #[test]
    fn test_merged_segments() {
        let merged = sample_result().merged_segments();
        assert_eq!(
            merged,
            vec![
                ExecutionSegment::new("A", 0, 1),
                ExecutionSegment::new("B", 1, 2),
                ExecutionSegment::new("A", 2, 4),
            ]
        );
    }

    #[test]
    fn test_merge_keeps_gaps() {
        let mut r = ScheduleResult::new(Algorithm::Fcfs);
        r.push_segment("A", 0, 2);
        r.push_segment("A", 5, 6);
        assert_eq!(r.merged_segments().len(), 2);
    }

    #[test]
    fn test_segments_for() {
        let r = sample_result();
        assert_eq!(r.segments_for("A").len(), 3);
        assert_eq!(r.segments_for("B").len(), 1);
        assert!(r.segments_for("Z").is_empty());
    }

    #[test]
    fn test_average_undefined_for_zero_divisor() {
        let r = ScheduleResult::new(Algorithm::Spn).with_average(0, 0);
        assert_eq!(r.average_wait, None);

        let r = ScheduleResult::new(Algorithm::Spn).with_average(5, 2);
        assert_eq!(r.average_wait, Some(2.5));
    }

    #[test]
    fn test_empty_result() {
        let r = ScheduleResult::new(Algorithm::RoundRobin);
        assert!(r.is_empty());
        assert_eq!(r.makespan(), 0);
        assert_eq!(r.completed_count(), 0);
        assert!(r.merged_segments().is_empty());
    }

    #[test]
    fn test_turnaround() {
        let o = TaskOutcome {
            name: "A".into(),
            arrival_time: 2,
            service_time: 3,
            completion_time: 9,
            wait_time: 4,
        };
        assert_eq!(o.turnaround_time(), 7);
    }
}
