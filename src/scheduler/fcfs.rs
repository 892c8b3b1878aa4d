//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Sort processes by arrival time (stable — input order breaks ties).
//! 2. Walk the clock forward, inserting an idle segment whenever it
//!    trails the next arrival.
//! 3. Run each process to completion without interruption.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use crate::models::{ExecutionTrace, Process, SegmentLabel};

/// Non-preemptive, arrival-order scheduler.
///
/// # Example
///
/// ```
/// use procsim::models::Process;
/// use procsim::scheduler::FcfsScheduler;
///
/// let mut processes = vec![Process::new(1, 0, 5), Process::new(2, 0, 3)];
/// let trace = FcfsScheduler::new().schedule(&mut processes);
/// assert_eq!(processes[0].completion_time, Some(5));
/// assert_eq!(processes[1].completion_time, Some(8));
/// assert_eq!(trace.segment_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Runs the batch to completion, filling per-process timing fields
    /// in place, and returns the execution trace.
    ///
    /// Reorders `processes` by arrival time; callers see the batch in
    /// the order it was dispatched. `remaining_time` is left untouched —
    /// nothing is preempted, so it is never consumed slice by slice.
    pub fn schedule(&self, processes: &mut [Process]) -> ExecutionTrace {
        let mut trace = ExecutionTrace::new();
        let mut clock: u32 = 0;

        processes.sort_by_key(|p| p.arrival_time);

        for process in processes.iter_mut() {
            if clock < process.arrival_time {
                trace.record(SegmentLabel::Idle, clock, process.arrival_time);
                clock = process.arrival_time;
            }

            let start = clock;
            process.record_start(start);
            clock += process.burst_time;
            process.record_completion(clock);
            trace.record(SegmentLabel::Process(process.id), start, clock);
        }

        trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completions(processes: &[Process]) -> Vec<(u32, Option<u32>)> {
        processes.iter().map(|p| (p.id, p.completion_time)).collect()
    }

    #[test]
    fn test_simultaneous_arrivals() {
        // Arrivals {0,0,0}, bursts {5,3,8}: input order is kept, so the
        // completions land at 5, 8, 16 and the waits at 0, 5, 8.
        let mut processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 0, 3),
            Process::new(3, 0, 8),
        ];
        let trace = FcfsScheduler::new().schedule(&mut processes);

        assert_eq!(
            completions(&processes),
            vec![(1, Some(5)), (2, Some(8)), (3, Some(16))]
        );
        let waits: Vec<u32> = processes.iter().map(|p| p.waiting_time).collect();
        assert_eq!(waits, vec![0, 5, 8]);

        assert!(trace.is_contiguous());
        assert_eq!(trace.busy_time(), 16);
        assert_eq!(trace.context_switches(), 2);
    }

    #[test]
    fn test_idle_gap_before_late_arrival() {
        let mut processes = vec![Process::new(1, 5, 3)];
        let trace = FcfsScheduler::new().schedule(&mut processes);

        assert_eq!(
            trace.segments,
            vec![
                crate::models::TraceSegment::new(SegmentLabel::Idle, 0, 5),
                crate::models::TraceSegment::new(SegmentLabel::Process(1), 5, 8),
            ]
        );
        assert_eq!(processes[0].waiting_time, 0);
        assert_eq!(processes[0].response_time, 0);
    }

    #[test]
    fn test_staggered_arrivals_sorted() {
        let mut processes = vec![
            Process::new(1, 4, 2),
            Process::new(2, 0, 3),
            Process::new(3, 2, 1),
        ];
        let trace = FcfsScheduler::new().schedule(&mut processes);

        // Dispatch order: P2 [0,3), P3 [3,4), P1 [4,6)
        let order: Vec<u32> = processes.iter().map(|p| p.id).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert!(trace.is_contiguous());
        assert_eq!(trace.busy_time(), 6);
    }

    #[test]
    fn test_arrival_ties_keep_input_order() {
        let mut processes = vec![
            Process::new(1, 3, 2),
            Process::new(2, 3, 2),
            Process::new(3, 3, 2),
        ];
        FcfsScheduler::new().schedule(&mut processes);

        let order: Vec<u32> = processes.iter().map(|p| p.id).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_remaining_time_untouched() {
        let mut processes = vec![Process::new(1, 0, 4)];
        FcfsScheduler::new().schedule(&mut processes);
        assert_eq!(processes[0].remaining_time, 4);
        assert!(processes[0].is_complete());
    }

    #[test]
    fn test_deterministic_rerun() {
        let fresh = || {
            vec![
                Process::new(1, 0, 5),
                Process::new(2, 1, 3),
                Process::new(3, 9, 2),
            ]
        };
        let mut a = fresh();
        let mut b = fresh();
        let trace_a = FcfsScheduler::new().schedule(&mut a);
        let trace_b = FcfsScheduler::new().schedule(&mut b);
        assert_eq!(trace_a, trace_b);
        assert_eq!(a, b);
    }
}
