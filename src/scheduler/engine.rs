//! End-to-end simulation driver.
//!
//! Bundles a process batch and a quantum into a request, picks the
//! scheduling mode, runs exactly one engine over the batch, and returns
//! the completed run: mode, processes, trace, and metrics.

use crate::models::{ExecutionTrace, Process};
use crate::scheduler::{
    select_mode, FcfsScheduler, RoundRobinScheduler, SchedulingMode, SimulationMetrics,
};

/// Input container for a simulation run.
#[derive(Debug, Clone)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Round Robin time quantum (also drives mode selection).
    pub quantum: u32,
}

impl SimulationRequest {
    /// Creates a new request.
    pub fn new(processes: Vec<Process>, quantum: u32) -> Self {
        Self { processes, quantum }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// Which engine ran.
    pub mode: SchedulingMode,
    /// The batch after scheduling, in dispatch (arrival) order, with all
    /// timing fields filled in.
    pub processes: Vec<Process>,
    /// Who held the CPU, instant by instant.
    pub trace: ExecutionTrace,
    /// Aggregate timing indicators.
    pub metrics: SimulationMetrics,
}

/// Runs simulation requests start to finish.
///
/// # Example
///
/// ```
/// use procsim::models::Process;
/// use procsim::scheduler::{SchedulingMode, SimulationRequest, Simulator};
///
/// let request = SimulationRequest::new(
///     vec![Process::new(1, 0, 5), Process::new(2, 0, 3)],
///     2,
/// );
/// let report = Simulator::new().run(request);
/// assert_eq!(report.mode, SchedulingMode::RoundRobin);
/// assert_eq!(report.trace.busy_time(), 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator;

impl Simulator {
    /// Creates a new simulator.
    pub fn new() -> Self {
        Self
    }

    /// Consumes a request, runs the selected engine over the owned
    /// batch, and reports the completed run.
    ///
    /// Taking the request by value enforces the one-scheduler-per-run
    /// rule: no caller can feed the same mutated batch to a second
    /// engine.
    pub fn run(&self, request: SimulationRequest) -> SimulationReport {
        let SimulationRequest {
            mut processes,
            quantum,
        } = request;

        let mode = select_mode(&processes, quantum);
        let trace = match mode {
            SchedulingMode::Fcfs => FcfsScheduler::new().schedule(&mut processes),
            SchedulingMode::RoundRobin => {
                RoundRobinScheduler::new(quantum).schedule(&mut processes)
            }
        };
        let metrics = SimulationMetrics::calculate(&processes, &trace);

        SimulationReport {
            mode,
            processes,
            trace,
            metrics,
        }
    }
}
