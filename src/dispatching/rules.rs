//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for tasks that should run first.

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::SimTask;

/// First In, First Out.
///
/// Earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, task: &SimTask, _context: &DispatchContext) -> RuleScore {
        task.arrival_time as f64
    }

    fn description(&self) -> &'static str {
        "First In, First Out"
    }
}

/// Shortest Process Next.
///
/// Shortest total service time first. Minimizes mean waiting time
/// among non-preemptive policies when all tasks are available.
#[derive(Debug, Clone, Copy)]
pub struct Spn;

impl DispatchingRule for Spn {
    fn name(&self) -> &'static str {
        "SPN"
    }

    fn evaluate(&self, task: &SimTask, _context: &DispatchContext) -> RuleScore {
        task.original_service_time as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Process Next"
    }
}

/// Highest Response Ratio Next.
///
/// Ratio = (wait + service) / service, where wait = clock - arrival.
/// Favors short tasks while aging long ones, so nothing starves.
#[derive(Debug, Clone, Copy)]
pub struct Hrrn;

impl DispatchingRule for Hrrn {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn evaluate(&self, task: &SimTask, context: &DispatchContext) -> RuleScore {
        -task.response_ratio(context.clock)
    }

    fn description(&self) -> &'static str {
        "Highest Response Ratio Next"
    }
}

/// Shortest Remaining Time.
///
/// Least remaining CPU time first.
#[derive(Debug, Clone, Copy)]
pub struct Srt;

impl DispatchingRule for Srt {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, task: &SimTask, _context: &DispatchContext) -> RuleScore {
        task.remaining_time as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SimTask, Task};

    fn sim(name: &str, arrival: i64, service: i64) -> SimTask {
        SimTask::from(&Task::new(name, arrival, service))
    }

    #[test]
    fn test_fifo() {
        let ctx = DispatchContext::at_time(10);
        assert!(Fifo.evaluate(&sim("a", 1, 9), &ctx) < Fifo.evaluate(&sim("b", 2, 1), &ctx));
    }

    #[test]
    fn test_spn() {
        let ctx = DispatchContext::at_time(0);
        assert!((Spn.evaluate(&sim("a", 0, 4), &ctx) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_hrrn_prefers_aged_task() {
        let ctx = DispatchContext::at_time(20);
        let old_long = sim("old", 0, 10); // (20 + 10) / 10 = 3.0
        let new_short = sim("new", 18, 2); // (2 + 2) / 2 = 2.0
        assert!(Hrrn.evaluate(&old_long, &ctx) < Hrrn.evaluate(&new_short, &ctx));
    }

    #[test]
    fn test_srt_uses_remaining() {
        let ctx = DispatchContext::at_time(0);
        let mut t = sim("a", 0, 5);
        t.remaining_time = 2;
        assert!((Srt.evaluate(&t, &ctx) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_names() {
        assert_eq!(Fifo.name(), "FIFO");
        assert_eq!(Spn.description(), "Shortest Process Next");
        assert_eq!(Hrrn.name(), "HRRN");
        assert_eq!(Srt.description(), "Shortest Remaining Time");
    }
}
