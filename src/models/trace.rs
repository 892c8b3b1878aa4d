//! Execution trace (Gantt chart) model.
//!
//! A trace is the ordered record of who held the CPU over a run: one
//! segment per uninterrupted stretch of execution (or idleness). Round
//! Robin emits one segment per slice, so consecutive segments may carry
//! the same label; they are deliberately never merged — context-switch
//! counting and the Gantt chart depend on the slice boundaries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who occupied the CPU during a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentLabel {
    /// No process was ready.
    Idle,
    /// The process with this id was running.
    Process(u32),
}

impl fmt::Display for SegmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentLabel::Idle => write!(f, "IDLE"),
            SegmentLabel::Process(id) => write!(f, "P{id}"),
        }
    }
}

/// A half-open interval `[start, end)` of CPU time given to one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceSegment {
    /// Occupant of the CPU.
    pub label: SegmentLabel,
    /// Segment start (inclusive).
    pub start: u32,
    /// Segment end (exclusive). Always greater than `start`.
    pub end: u32,
}

impl TraceSegment {
    /// Creates a segment.
    pub fn new(label: SegmentLabel, start: u32, end: u32) -> Self {
        Self { label, start, end }
    }

    /// Segment length (`end - start`).
    #[inline]
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Whether this segment is an idle gap.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.label == SegmentLabel::Idle
    }
}

/// Ordered, gap-free record of CPU allocation over a whole run.
///
/// Segments are appended in clock order; every gap between dispatches is
/// filled explicitly with an [`SegmentLabel::Idle`] segment, so a valid
/// trace satisfies `segments[i].end == segments[i + 1].start` throughout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionTrace {
    /// The segments, in non-decreasing start order.
    pub segments: Vec<TraceSegment>,
}

impl ExecutionTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn record(&mut self, label: SegmentLabel, start: u32, end: u32) {
        self.segments.push(TraceSegment::new(label, start, end));
    }

    /// Whether consecutive segments meet exactly (no gaps, no overlaps).
    pub fn is_contiguous(&self) -> bool {
        self.segments
            .windows(2)
            .all(|pair| pair[0].end == pair[1].start)
    }

    /// Total CPU time spent running processes (idle segments excluded).
    pub fn busy_time(&self) -> u32 {
        self.segments
            .iter()
            .filter(|s| !s.is_idle())
            .map(|s| s.duration())
            .sum()
    }

    /// Latest end time across all segments, 0 when empty.
    pub fn makespan(&self) -> u32 {
        self.segments.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Number of context switches: adjacent segments whose labels differ.
    ///
    /// Idle counts as a distinct label, so transitions into and out of an
    /// idle gap each count as a switch.
    pub fn context_switches(&self) -> usize {
        self.segments
            .windows(2)
            .filter(|pair| pair[0].label != pair[1].label)
            .count()
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Whether the trace has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
