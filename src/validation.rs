//! Input validation and schedule verification.
//!
//! The scheduler itself never rejects input: identifiers are compared by
//! exact value and reused ids simply share counters. This module is the
//! boundary check callers opt into. It detects:
//! - Duplicate job IDs (their precedence chains would merge)
//! - Duplicate task IDs (placements become ambiguous)
//! - Jobs with no tasks
//! - Blank job IDs, task IDs and task names
//!
//! [`verify_schedule`] checks a finished schedule against its jobs.

use crate::models::{Job, Schedule, Violation};
use std::collections::HashSet;
use std::fmt;

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
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two jobs share the same ID.
    DuplicateJobId,
    /// Two tasks share the same ID.
    DuplicateTaskId,
    /// A job has no tasks.
    EmptyJob,
    /// An identifier is empty or whitespace only.
    BlankIdentifier,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a job list before scheduling.
///
/// Checks:
/// 1. No duplicate job IDs
/// 2. No duplicate task IDs (across all jobs)
/// 3. All jobs have at least one task
/// 4. No blank job IDs, task IDs or task names
///
/// Identifiers are compared exactly; `"Print"` and `"print "` are distinct.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut job_ids = HashSet::new();
    let mut task_ids = HashSet::new();

    for (index, job) in jobs.iter().enumerate() {
        if is_blank(&job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankIdentifier,
                format!("Job at position {index} has a blank ID"),
            ));
        }

        if !job_ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateJobId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if job.tasks.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyJob,
                format!("Job '{}' has no tasks", job.id),
            ));
        }

        for (pos, task) in job.tasks.iter().enumerate() {
            if is_blank(&task.id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BlankIdentifier,
                    format!("Task {pos} of job '{}' has a blank ID", job.id),
                ));
            }
            if is_blank(&task.name) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BlankIdentifier,
                    format!("Task '{}' of job '{}' has a blank name", task.id, job.id),
                ));
            }
            if !task_ids.insert(task.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateTaskId,
                    format!("Duplicate task ID: {}", task.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Checks a schedule against the jobs it was built from.
///
/// Reports every task with no placement on its machine, and every task
/// whose slot is not strictly after its predecessor's in the same job
/// entry. Machine exclusivity needs no check: a timeline holds at most
/// one task per slot.
pub fn verify_schedule(jobs: &[Job], schedule: &Schedule) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (job, slots) in jobs.iter().zip(schedule.job_slots(jobs)) {
        let mut previous: Option<(&str, usize)> = None;

        for (task, slot) in job.tasks.iter().zip(slots) {
            let Some(slot) = slot else {
                violations.push(Violation::missing_placement(
                    &task.id,
                    format!(
                        "Task '{}' of job '{}' is not placed on '{}'",
                        task.id, job.id, task.name
                    ),
                ));
                continue;
            };

            if let Some((prev_id, prev_slot)) = previous {
                if slot <= prev_slot {
                    violations.push(Violation::precedence_violation(
                        &task.id,
                        format!(
                            "Task '{}' at slot {slot} does not follow '{prev_id}' at slot {prev_slot}",
                            task.id
                        ),
                    ));
                }
            }
            previous = Some((task.id.as_str(), slot));
        }
    }

    violations
}
