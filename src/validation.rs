//! Input validation for simulation requests.
//!
//! Checks structural integrity of a request before scheduling. Detects:
//! - Empty process batches
//! - Zero quanta and zero burst times
//! - Duplicate process ids
//! - Process records that have already been through a scheduler
//!
//! The interactive front end re-prompts until its input is well-formed,
//! so these checks exist for programmatic callers of the library.

use std::collections::HashSet;

use crate::scheduler::SimulationRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The request contains no processes.
    EmptyBatch,
    /// The time quantum is zero.
    ZeroQuantum,
    /// A process requires no CPU time.
    ZeroBurst,
    /// Two processes share the same id.
    DuplicateId,
    /// A process has already been scheduled in a previous run.
    StaleProcess,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a simulation request.
///
/// Checks:
/// 1. At least one process
/// 2. Quantum is positive
/// 3. Every burst time is positive
/// 4. No duplicate process ids
/// 5. Every record is fresh (no start/completion time set, remaining
///    time equal to burst time) — a batch goes through exactly one
///    scheduler per run
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &SimulationRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyBatch,
            "Request contains no processes",
        ));
    }

    if request.quantum == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroQuantum,
            "Time quantum must be positive",
        ));
    }

    let mut ids = HashSet::new();
    for p in &request.processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process id: {}", p.id),
            ));
        }

        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process {} has a zero burst time", p.id),
            ));
        }

        if p.has_started() || p.is_complete() || p.remaining_time != p.burst_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::StaleProcess,
                format!("Process {} has already been scheduled", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
