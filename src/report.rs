//! Serializable simulation reports.
//!
//! A report bundles everything the presentation layer needs for one
//! discipline: the timeline, per-task outcomes, the average wait, KPIs and
//! the display colors of the batch.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::SimulationConfig;
use crate::gantt::ColorPalette;
use crate::models::{Algorithm, ExecutionSegment, ScheduleResult, TaskOutcome};
use crate::scheduler::ScheduleKpi;

/// Report for one scheduler run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub algorithm: Algorithm,
    pub description: &'static str,
    /// Timeline, merged when the configuration asks for it.
    pub segments: Vec<ExecutionSegment>,
    pub outcomes: Vec<TaskOutcome>,
    /// `null` when undefined.
    pub average_wait: Option<f64>,
    pub kpi: ScheduleKpi,
    pub colors: BTreeMap<String, String>,
}

impl SimulationReport {
    /// Builds a report, assigning colors from `palette`.
    ///
    /// Sharing one palette across reports keeps a task's color the same
    /// in every chart.
    pub fn new(result: &ScheduleResult, config: &SimulationConfig, palette: &mut ColorPalette) -> Self {
        let segments = if config.merge_segments {
            result.merged_segments()
        } else {
            result.segments.clone()
        };

        let mut colors = BTreeMap::new();
        for seg in &segments {
            if !colors.contains_key(&seg.task_name) {
                let color = palette.color_for(&seg.task_name).to_string();
                colors.insert(seg.task_name.clone(), color);
            }
        }

        Self {
            algorithm: result.algorithm,
            description: result.algorithm.description(),
            segments,
            outcomes: result.outcomes.clone(),
            average_wait: result.average_wait,
            kpi: ScheduleKpi::calculate(result),
            colors,
        }
    }
}

/// Builds reports for several results with a shared palette.
pub fn build_reports(
    results: &[ScheduleResult],
    config: &SimulationConfig,
) -> Vec<SimulationReport> {
    let mut palette = ColorPalette::from_seed(config.color_seed);
    results
        .iter()
        .map(|result| SimulationReport::new(result, config, &mut palette))
        .collect()
}

/// Serializes reports as pretty-printed JSON.
pub fn to_json(reports: &[SimulationReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use crate::scheduler::run_all;

    fn tasks() -> Vec<Task> {
        vec![Task::new("A", 0, 3), Task::new("B", 1, 1)]
    }

    #[test]
    fn test_colors_shared_across_reports() {
        let config = SimulationConfig::new().with_color_seed(11);
        let reports = build_reports(&run_all(&tasks(), &config), &config);

        assert_eq!(reports.len(), 5);
        for report in &reports[1..] {
            assert_eq!(report.colors, reports[0].colors);
        }
    }

    #[test]
    fn test_merge_setting_applies() {
        let config = SimulationConfig::new()
            .with_algorithms([Algorithm::Srtf])
            .with_merge_segments(true)
            .with_color_seed(1);
        let reports = build_reports(&run_all(&tasks(), &config), &config);
        assert_eq!(reports[0].segments.len(), 3);

        let config = config.with_merge_segments(false);
        let reports = build_reports(&run_all(&tasks(), &config), &config);
        assert_eq!(reports[0].segments.len(), 4);
    }

    #[test]
    fn test_json_shape() {
        let config = SimulationConfig::new()
            .with_algorithms([Algorithm::RoundRobin])
            .with_color_seed(5);
        let reports = build_reports(&run_all(&tasks(), &config), &config);
        let json = to_json(&reports).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["algorithm"], "rr");
        assert_eq!(value[0]["segments"][0]["task_name"], "A");
        assert!(value[0]["average_wait"].is_number());
        assert!(value[0]["colors"]["B"].is_string());
    }

    #[test]
    fn test_json_undefined_average_is_null() {
        let config = SimulationConfig::new()
            .with_algorithms([Algorithm::Spn])
            .with_color_seed(5);
        let reports = build_reports(&run_all(&[], &config), &config);
        let value: serde_json::Value = serde_json::from_str(&to_json(&reports).unwrap()).unwrap();
        assert!(value[0]["average_wait"].is_null());
    }
}
