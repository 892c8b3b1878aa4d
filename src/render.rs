//! Console rendering of simulation results.
//!
//! Builds the fixed-width ASCII Gantt chart, the per-process table, and
//! the summary block as plain strings. No I/O happens here; the binary
//! decides where the strings go.
//!
//! # Gantt Layout
//!
//! Each trace segment becomes a cell whose width is its duration times a
//! scale factor, with the label centered inside and a ruler of
//! cumulative end times under the cell boundaries:
//!
//! ```text
//! +------+--------+
//! | IDLE |   P1   |
//! +------+--------+
//! 0      3        7
//! ```

use crate::models::{ExecutionTrace, Process};
use crate::scheduler::SimulationMetrics;

/// Default horizontal scale: columns per time unit.
pub const DEFAULT_SCALE: usize = 3;

/// One renderable Gantt cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GanttCell {
    /// Display label (`IDLE` or `P<id>`).
    pub label: String,
    /// Cell width in columns (duration × scale).
    pub width: usize,
    /// Clock value at the cell's right boundary.
    pub end: u32,
}

/// Renderable form of an execution trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GanttChart {
    /// Clock value at the chart's left edge.
    pub origin: u32,
    /// Cells in trace order.
    pub cells: Vec<GanttCell>,
}

impl GanttChart {
    /// Builds the renderable structure from a trace.
    pub fn from_trace(trace: &ExecutionTrace, scale: usize) -> Self {
        let origin = trace.segments.first().map(|s| s.start).unwrap_or(0);
        let cells = trace
            .segments
            .iter()
            .map(|s| GanttCell {
                label: s.label.to_string(),
                width: s.duration() as usize * scale,
                end: s.end,
            })
            .collect();
        Self { origin, cells }
    }

    /// Renders the chart: borders, centered labels, and the time ruler.
    ///
    /// Returns an empty string for an empty chart.
    pub fn render(&self) -> String {
        if self.cells.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        self.push_border(&mut out);

        for cell in &self.cells {
            out.push('|');
            out.push_str(&format!("{:^width$}", cell.label, width = cell.width));
        }
        out.push_str("|\n");

        self.push_border(&mut out);

        // Ruler: origin at the left edge, each end time right-aligned
        // under its cell boundary.
        out.push_str(&self.origin.to_string());
        for cell in &self.cells {
            let end = cell.end.to_string();
            let pad = (cell.width + 1).saturating_sub(end.len());
            out.push_str(&" ".repeat(pad));
            out.push_str(&end);
        }
        out.push('\n');

        out
    }

    fn push_border(&self, out: &mut String) {
        for cell in &self.cells {
            out.push('+');
            out.push_str(&"-".repeat(cell.width));
        }
        out.push_str("+\n");
    }
}

/// Renders the per-process result table.
///
/// One row per process: arrival, burst, waiting, turnaround, and
/// response time, in the order the batch was dispatched.
pub fn render_process_table(processes: &[Process]) -> String {
    let mut out = String::from("PID | AT | BT | WT | TAT | RT\n");
    for p in processes {
        out.push_str(&format!(
            "P{:<2} | {:<2} | {:<2} | {:<2} | {:<3} | {:<2}\n",
            p.id, p.arrival_time, p.burst_time, p.waiting_time, p.turnaround_time, p.response_time,
        ));
    }
    out
}

/// Renders the averages and context-switch summary.
pub fn render_summary(metrics: &SimulationMetrics) -> String {
    format!(
        "Average Waiting Time = {}\n\
         Average Turnaround Time = {}\n\
         Average Response Time = {}\n\
         Total Context Switches = {}\n",
        metrics.avg_waiting_time,
        metrics.avg_turnaround_time,
        metrics.avg_response_time,
        metrics.context_switches,
    )
}
