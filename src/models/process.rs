//! Process (job) model.
//!
//! A process is the unit of CPU scheduling: a fixed arrival time, a fixed
//! CPU demand (burst time), and the timing fields a scheduler fills in as
//! the simulated clock advances.
//!
//! # Metric Derivation
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion − arrival |
//! | Waiting | turnaround − burst |
//! | Response | first dispatch − arrival |
//!
//! Waiting and response are non-negative by construction (unsigned time
//! units), and response never exceeds waiting.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Created once during input acquisition, mutated only by the active
/// scheduler, and frozen once `completion_time` is set.
///
/// # Time Representation
/// All times are integer simulation units relative to clock 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique identifier, 1-based in input order.
    pub id: u32,
    /// Time the process enters the ready queue.
    pub arrival_time: u32,
    /// Total CPU time required.
    pub burst_time: u32,
    /// CPU time still owed. Decremented slice by slice under Round Robin;
    /// FCFS runs to completion and leaves it untouched.
    pub remaining_time: u32,
    /// Clock value at first dispatch. `None` until the process first runs.
    pub start_time: Option<u32>,
    /// Clock value when the process finished. `None` while unfinished.
    pub completion_time: Option<u32>,
    /// Time spent ready but not running. Derived at completion.
    pub waiting_time: u32,
    /// Arrival-to-completion span. Derived at completion.
    pub turnaround_time: u32,
    /// Arrival-to-first-dispatch span. Derived at first dispatch.
    pub response_time: u32,
}

impl Process {
    /// Creates a process with unset timings and `remaining_time` equal to
    /// the burst time.
    pub fn new(id: u32, arrival_time: u32, burst_time: u32) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            start_time: None,
            completion_time: None,
            waiting_time: 0,
            turnaround_time: 0,
            response_time: 0,
        }
    }

    /// Records the first dispatch at `clock`, fixing the response time.
    ///
    /// Subsequent calls are no-ops: response time is measured to the
    /// first slice only.
    pub(crate) fn record_start(&mut self, clock: u32) {
        if self.start_time.is_none() {
            self.start_time = Some(clock);
            self.response_time = clock - self.arrival_time;
        }
    }

    /// Records completion at `clock` and derives turnaround and waiting
    /// time.
    pub(crate) fn record_completion(&mut self, clock: u32) {
        self.completion_time = Some(clock);
        self.turnaround_time = clock - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }

    /// Whether the process has received any CPU time.
    pub fn has_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether the process has finished.
    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }
}
