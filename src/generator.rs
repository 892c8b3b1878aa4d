//! Random workload generation.
//!
//! Builds batches of synthetic processes for demos and tests. The
//! generator is deterministic under a seeded RNG, so tests can pin down
//! exact workloads.
//!
//! # Usage
//!
//! ```
//! use procsim::generator::WorkloadGenerator;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let batch = WorkloadGenerator::new()
//!     .with_burst_range(1, 10)
//!     .with_same_arrival()
//!     .generate(4, &mut rng);
//! assert_eq!(batch.len(), 4);
//! assert!(batch.iter().all(|p| p.arrival_time == 0));
//! ```

use std::ops::RangeInclusive;

use rand::Rng;

use crate::models::Process;

/// Builds random process batches.
///
/// Bursts default to `1..=10`; arrivals default to `0..=10`.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    burst_range: RangeInclusive<u32>,
    arrival_range: RangeInclusive<u32>,
}

impl WorkloadGenerator {
    /// Creates a generator with the default ranges.
    pub fn new() -> Self {
        Self {
            burst_range: 1..=10,
            arrival_range: 0..=10,
        }
    }

    /// Sets the burst-time range. `min` must be at least 1 — a process
    /// that needs no CPU time is rejected by validation.
    pub fn with_burst_range(mut self, min: u32, max: u32) -> Self {
        self.burst_range = min.max(1)..=max.max(1);
        self
    }

    /// Sets the arrival-time range.
    pub fn with_arrival_range(mut self, min: u32, max: u32) -> Self {
        self.arrival_range = min..=max;
        self
    }

    /// Makes every process arrive at time 0.
    pub fn with_same_arrival(self) -> Self {
        self.with_arrival_range(0, 0)
    }

    /// Generates `count` processes with 1-based sequential ids.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Process> {
        (1..=count)
            .map(|id| {
                let arrival = rng.random_range(self.arrival_range.clone());
                let burst = rng.random_range(self.burst_range.clone());
                Process::new(id as u32, arrival, burst)
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}
