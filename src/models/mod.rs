//! Simulation domain models.
//!
//! Provides the core data types for representing a scheduling run:
//! the processes being scheduled and the execution trace (Gantt data)
//! a scheduler produces.
//!
//! # Lifecycle
//!
//! A `Process` is created with its immutable inputs (arrival and burst
//! time), mutated by exactly one scheduler per run, and immutable once
//! its completion time is set. The `ExecutionTrace` records who held the
//! CPU over every instant of the run, idle gaps included.

mod process;
mod trace;

pub use process::Process;
pub use trace::{ExecutionTrace, SegmentLabel, TraceSegment};
