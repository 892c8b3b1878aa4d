//! CPU scheduling simulator.
//!
//! Simulates non-preemptive (FCFS) and preemptive (Round Robin) CPU
//! scheduling for a fixed batch of processes, producing per-process
//! timing metrics and a textual Gantt chart.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `TraceSegment`,
//!   `ExecutionTrace`, `SegmentLabel`
//! - **`scheduler`**: The two scheduling engines, mode selection,
//!   metrics, and the end-to-end `Simulator`
//! - **`render`**: Gantt chart and result-table rendering
//! - **`validation`**: Structural checks on simulation requests
//! - **`generator`**: Random workload generation for demos and tests
//!
//! # Architecture
//!
//! The library is purely synchronous and never performs I/O: a
//! `SimulationRequest` goes in, a `SimulationReport` comes out, and the
//! binary (or any other consumer) decides how to present it. Exactly one
//! scheduler touches a process batch per run.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod generator;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod validation;
