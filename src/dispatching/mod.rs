//! Dispatching rules for ready-task selection.
//!
//! A dispatching rule scores each ready task; the dispatcher picks the
//! lowest score. The non-preemptive schedulers (SPN, HRRN) share one
//! driving loop and differ only in the rule they plug in.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, select_best, DispatchContext};
//! use u_cpusched::models::{sim_tasks, Task};
//!
//! let ready = sim_tasks(&[Task::new("A", 0, 5), Task::new("B", 0, 2)]);
//! let ctx = DispatchContext::at_time(0);
//! assert_eq!(select_best(&rules::Spn, &ready, &ctx), Some(1));
//! ```
//!
//! # References
//!
//! - Stallings, "Operating Systems: Internals and Design Principles", Ch. 9
//! - Silberschatz et al., "Operating System Concepts", Ch. 5

mod context;
pub mod rules;

pub use context::DispatchContext;

use crate::models::SimTask;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = f64;

/// Scores closer than this are treated as ties.
const TIE_EPSILON: f64 = 1e-9;

/// A rule that evaluates how urgently a ready task should get the CPU.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules that maximize a quantity
/// (e.g., response ratio) return its negation.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPN", "HRRN").
    fn name(&self) -> &'static str;

    /// Evaluates a ready task at the current simulation time.
    fn evaluate(&self, task: &SimTask, context: &DispatchContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Returns the index of the best-scoring candidate.
///
/// Ties keep the earliest candidate: a later task must score strictly
/// lower to displace it.
pub fn select_best<R: DispatchingRule + ?Sized>(
    rule: &R,
    candidates: &[SimTask],
    context: &DispatchContext,
) -> Option<usize> {
    let mut best: Option<(usize, RuleScore)> = None;
    for (idx, task) in candidates.iter().enumerate() {
        let score = rule.evaluate(task, context);
        match best {
            Some((_, best_score)) if score >= best_score - TIE_EPSILON => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Like [`select_best`], restricted to candidates accepted by `filter`.
pub fn select_best_where<R, F>(
    rule: &R,
    candidates: &[SimTask],
    context: &DispatchContext,
    filter: F,
) -> Option<usize>
where
    R: DispatchingRule + ?Sized,
    F: Fn(&SimTask) -> bool,
{
    let mut best: Option<(usize, RuleScore)> = None;
    for (idx, task) in candidates.iter().enumerate().filter(|(_, t)| filter(t)) {
        let score = rule.evaluate(task, context);
        match best {
            Some((_, best_score)) if score >= best_score - TIE_EPSILON => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Sorts task indices by a chain of rules (highest priority first).
///
/// Rules are applied in sequence: the next rule is consulted only when
/// the previous ones tie. Tasks tied on every rule keep their input order.
pub fn sort_indices(
    rules: &[&dyn DispatchingRule],
    tasks: &[SimTask],
    context: &DispatchContext,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..tasks.len()).collect();
    indices.sort_by(|&a, &b| compare_sequential(rules, &tasks[a], &tasks[b], context));
    indices
}

fn compare_sequential(
    rules: &[&dyn DispatchingRule],
    a: &SimTask,
    b: &SimTask,
    context: &DispatchContext,
) -> std::cmp::Ordering {
    for rule in rules {
        let score_a = rule.evaluate(a, context);
        let score_b = rule.evaluate(b, context);

        if (score_a - score_b).abs() > TIE_EPSILON {
            return score_a
                .partial_cmp(&score_b)
                .unwrap_or(std::cmp::Ordering::Equal);
        }
    }
    std::cmp::Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sim_tasks, Task};

    #[test]
    fn test_sort_indices_sequential() {
        let tasks = sim_tasks(&[
            Task::new("late", 4, 1),
            Task::new("long", 0, 5),
            Task::new("short", 0, 2),
        ]);
        let ctx = DispatchContext::at_time(0);
        let order = sort_indices(&[&rules::Fifo, &rules::Spn], &tasks, &ctx);
        // arrival ties at 0 broken by service time
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_sort_indices_stable_on_full_tie() {
        let tasks = sim_tasks(&[
            Task::new("first", 1, 3),
            Task::new("second", 1, 3),
            Task::new("third", 0, 9),
        ]);
        let ctx = DispatchContext::at_time(0);
        let order = sort_indices(&[&rules::Fifo], &tasks, &ctx);
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn test_select_best_first_minimum_wins() {
        let ready = sim_tasks(&[
            Task::new("A", 0, 3),
            Task::new("B", 0, 1),
            Task::new("C", 0, 1),
        ]);
        let ctx = DispatchContext::at_time(0);
        assert_eq!(select_best(&rules::Spn, &ready, &ctx), Some(1));
    }

    #[test]
    fn test_select_best_empty() {
        let ctx = DispatchContext::at_time(0);
        assert_eq!(select_best(&rules::Spn, &[], &ctx), None);
    }

    #[test]
    fn test_select_best_where_skips_filtered() {
        let ready = sim_tasks(&[Task::new("A", 5, 1), Task::new("B", 0, 4)]);
        let ctx = DispatchContext::at_time(2);
        let idx = select_best_where(&rules::Spn, &ready, &ctx, |t| t.arrival_time <= ctx.clock);
        assert_eq!(idx, Some(1));
    }

    #[test]
    fn test_select_best_where_none_eligible() {
        let ready = sim_tasks(&[Task::new("A", 5, 1)]);
        let ctx = DispatchContext::at_time(0);
        assert_eq!(
            select_best_where(&rules::Fifo, &ready, &ctx, |t| t.arrival_time <= ctx.clock),
            None
        );
    }

    #[test]
    fn test_dyn_rule() {
        let rule: Box<dyn DispatchingRule> = Box::new(rules::Hrrn);
        let ready = sim_tasks(&[Task::new("A", 0, 8), Task::new("B", 4, 2)]);
        let ctx = DispatchContext::at_time(6);
        // A: (6 + 8) / 8 = 1.75, B: (2 + 2) / 2 = 2.0
        assert_eq!(select_best(rule.as_ref(), &ready, &ctx), Some(1));
    }
}
