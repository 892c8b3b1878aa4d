//! Run quality metrics.
//!
//! Computes the aggregate timing indicators of a completed run from the
//! process batch and its execution trace.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround − burst) |
//! | Avg Turnaround | mean(completion − arrival) |
//! | Avg Response | mean(first dispatch − arrival) |
//! | Context Switches | adjacent trace segments with differing labels |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use crate::models::{ExecutionTrace, Process};

/// Aggregate timing indicators for a completed run.
///
/// Averages are unweighted arithmetic means over all processes.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationMetrics {
    /// Mean time spent ready but not running.
    pub avg_waiting_time: f64,
    /// Mean arrival-to-completion span.
    pub avg_turnaround_time: f64,
    /// Mean arrival-to-first-dispatch span.
    pub avg_response_time: f64,
    /// Label changes between consecutive trace segments, idle included.
    pub context_switches: usize,
}

impl SimulationMetrics {
    /// Computes metrics from a completed batch and its trace.
    ///
    /// An empty batch yields zero averages; validation rejects empty
    /// batches upstream, so this guard only matters for programmatic
    /// callers.
    pub fn calculate(processes: &[Process], trace: &ExecutionTrace) -> Self {
        let context_switches = trace.context_switches();
        if processes.is_empty() {
            return Self {
                avg_waiting_time: 0.0,
                avg_turnaround_time: 0.0,
                avg_response_time: 0.0,
                context_switches,
            };
        }

        let count = processes.len() as f64;
        let total_waiting: u64 = processes.iter().map(|p| u64::from(p.waiting_time)).sum();
        let total_turnaround: u64 = processes.iter().map(|p| u64::from(p.turnaround_time)).sum();
        let total_response: u64 = processes.iter().map(|p| u64::from(p.response_time)).sum();

        Self {
            avg_waiting_time: total_waiting as f64 / count,
            avg_turnaround_time: total_turnaround as f64 / count,
            avg_response_time: total_response as f64 / count,
            context_switches,
        }
    }
}
