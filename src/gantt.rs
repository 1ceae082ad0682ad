//! Gantt chart presentation.
//!
//! Colors and bar widths are decorative: nothing here feeds back into
//! scheduling decisions.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::models::{ExecutionSegment, ScheduleResult, Time};

/// Largest 24-bit RGB value.
const MAX_RGB: u32 = 0xFF_FFFF;

/// Display color assignment, one `#rrggbb` color per distinct task name.
///
/// # Example
///
/// ```
/// use u_cpusched::gantt::ColorPalette;
///
/// let mut a = ColorPalette::seeded(42);
/// let mut b = ColorPalette::seeded(42);
/// assert_eq!(a.color_for("P1"), b.color_for("P1"));
/// assert_eq!(a.color_for("P1").len(), 7);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ColorPalette {
    #[serde(skip)]
    rng: StdRng,
    colors: BTreeMap<String, String>,
}

impl ColorPalette {
    /// Creates a palette with a fixed seed (reproducible colors).
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            colors: BTreeMap::new(),
        }
    }

    /// Creates a palette seeded from the operating system.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            colors: BTreeMap::new(),
        }
    }

    /// Creates a palette from an optional seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::random, Self::seeded)
    }

    /// Returns the color for `name`, assigning a new one on first use.
    pub fn color_for(&mut self, name: &str) -> &str {
        if !self.colors.contains_key(name) {
            let color = format!("#{:06x}", self.rng.random_range(0..=MAX_RGB));
            self.colors.insert(name.to_string(), color);
        }
        self.colors.get(name).map(String::as_str).unwrap_or("#000000")
    }

    /// Assigns colors to every task in `result`, in timeline order.
    pub fn assign(&mut self, result: &ScheduleResult) {
        for seg in &result.segments {
            self.color_for(&seg.task_name);
        }
    }

    /// Assigned colors by task name.
    pub fn colors(&self) -> &BTreeMap<String, String> {
        &self.colors
    }
}

/// Renders a text Gantt chart for one result.
///
/// Each segment is a bar `scale` columns wide per time unit, labelled with
/// the task name; boundary times are printed underneath. Segments are
/// merged first when `merge` is set. With `scale = 4`:
///
/// ```text
/// SPN (Shortest Process Next)
/// |A               |C   |B       |
/// 0                4    5        7
/// Average wait: 2.00 time units
/// ```
pub fn render(result: &ScheduleResult, scale: usize, merge: bool) -> String {
    let segments = if merge {
        result.merged_segments()
    } else {
        result.segments.clone()
    };
    let scale = scale.max(1);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({})",
        result.algorithm.name(),
        result.algorithm.description()
    );

    if segments.is_empty() {
        out.push_str("(no segments)\n");
    } else {
        let (bars, axis) = draw_rows(&segments, scale);
        let _ = writeln!(out, "{bars}");
        let _ = writeln!(out, "{axis}");
    }

    let _ = writeln!(out, "Average wait: {}", format_average(result.average_wait));
    out
}

/// Formats an average wait, "undefined" when absent.
pub fn format_average(average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("{avg:.2} time units"),
        None => "undefined".to_string(),
    }
}

fn draw_rows(segments: &[ExecutionSegment], scale: usize) -> (String, String) {
    let mut bars = String::new();
    let mut axis = String::new();
    let mut cursor: Option<Time> = None;

    for seg in segments {
        // Idle gaps show as a break marker between two boundaries.
        if let Some(end) = cursor.filter(|&end| end != seg.start) {
            mark(&mut bars, &mut axis, end);
            bars.push_str(" ~ ");
        }
        mark(&mut bars, &mut axis, seg.start);

        let width = usize::try_from(seg.duration()).unwrap_or(0) * scale;
        let label: String = seg.task_name.chars().take(width.max(1)).collect();
        let width = width.max(label.chars().count());
        let _ = write!(bars, "{label:<width$}");
        cursor = Some(seg.end);
    }

    if let Some(end) = cursor {
        mark(&mut bars, &mut axis, end);
    }
    (bars, axis)
}

/// Writes a `|` boundary on the bar row and its time label beneath it.
fn mark(bars: &mut String, axis: &mut String, time: Time) {
    let column = bars.chars().count();
    let axis_len = axis.chars().count();
    if axis_len < column {
        axis.extend(std::iter::repeat(' ').take(column - axis_len));
    } else if axis_len > 0 {
        axis.push(' ');
    }
    let _ = write!(axis, "{time}");
    bars.push('|');
}
