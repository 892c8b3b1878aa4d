//! Scheduling engines, mode selection, and metrics.
//!
//! Provides the two scheduling algorithms (FCFS and Round Robin), the
//! rule that picks between them, the timing metrics derived from a
//! completed run, and the end-to-end [`Simulator`] driver.
//!
//! # Algorithms
//!
//! `FcfsScheduler` is non-preemptive: processes run to completion in
//! arrival order. `RoundRobinScheduler` is preemptive: ready processes
//! receive fixed-quantum slices in a fixed cyclic order until all finish.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4.3

mod engine;
mod fcfs;
mod metrics;
mod mode;
mod round_robin;

pub use engine::{SimulationReport, SimulationRequest, Simulator};
pub use fcfs::FcfsScheduler;
pub use metrics::SimulationMetrics;
pub use mode::{select_mode, SchedulingMode};
pub use round_robin::RoundRobinScheduler;
