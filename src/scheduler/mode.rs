//! Scheduling-mode selection.
//!
//! Picks between the two engines from the quantum and the largest burst
//! in the batch: a quantum that covers the largest burst means no process
//! would ever be preempted, so the non-preemptive engine runs instead.
//!
//! The rule deliberately ignores arrival-order effects — with staggered
//! arrivals the two engines can still order work differently — and is
//! kept as documented behavior rather than a guaranteed-optimal
//! classifier.

use std::fmt;

use crate::models::Process;

/// Which scheduling engine a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingMode {
    /// First-Come-First-Served: non-preemptive, arrival order.
    Fcfs,
    /// Round Robin: preemptive, fixed-quantum time slices.
    RoundRobin,
}

impl fmt::Display for SchedulingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulingMode::Fcfs => write!(f, "FCFS"),
            SchedulingMode::RoundRobin => write!(f, "Round Robin"),
        }
    }
}

/// Selects the scheduling mode for a batch.
///
/// Returns [`SchedulingMode::Fcfs`] when `quantum` is at least the
/// largest burst time, [`SchedulingMode::RoundRobin`] otherwise. Pure
/// function; an empty batch has a largest burst of 0 and selects FCFS,
/// though validation rejects empty batches before scheduling.
pub fn select_mode(processes: &[Process], quantum: u32) -> SchedulingMode {
    let max_burst = processes.iter().map(|p| p.burst_time).max().unwrap_or(0);
    if quantum >= max_burst {
        SchedulingMode::Fcfs
    } else {
        SchedulingMode::RoundRobin
    }
}
