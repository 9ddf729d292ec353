//! Unit-slot greedy list scheduler.
//!
//! # Algorithm
//!
//! 1. Walk jobs in input order, and tasks within a job in chain order.
//! 2. For each task, take `slot = max(machine_next[m], job_next[j])`.
//! 3. Place the task id at `slot` on machine `m`, padding with gaps.
//! 4. Set both `machine_next[m]` and `job_next[j]` to `slot + 1`.
//!
//! Counters start at 0 on first use of a machine or job id. Jobs without
//! tasks touch neither counter.
//!
//! # Complexity
//! O(n) expected for n tasks, plus O(makespan) per machine for padding.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::models::{Job, Schedule};
use crate::validation::{validate_jobs, ValidationError};

/// Builds the per-machine timetable for `jobs`.
///
/// Pure and deterministic: the same job list always yields the same
/// schedule. Never fails; identifiers are used as given, so reused job ids
/// share one precedence chain and reused task names share one machine.
///
/// # Example
///
/// ```
/// use slot_schedule::models::{Job, Task};
/// use slot_schedule::scheduler::generate_schedule;
///
/// let jobs = vec![
///     Job::new("A").with_task(Task::new("A-1", "Print")).with_task(Task::new("A-2", "Print")),
/// ];
/// let schedule = generate_schedule(&jobs);
/// let print = schedule.timeline("Print").unwrap();
/// assert_eq!(print.get(0), Some("A-1"));
/// assert_eq!(print.get(1), Some("A-2"));
/// ```
pub fn generate_schedule(jobs: &[Job]) -> Schedule {
    let mut schedule = Schedule::new();
    let mut machine_next: HashMap<&str, usize> = HashMap::new();
    let mut job_next: HashMap<&str, usize> = HashMap::new();

    for job in jobs {
        if job.tasks.is_empty() {
            trace!(job = %job.id, "skipping job without tasks");
            continue;
        }

        let job_slot = job_next.entry(job.id.as_str()).or_insert(0);

        for task in &job.tasks {
            let machine_slot = machine_next.entry(task.machine()).or_insert(0);
            let slot = (*machine_slot).max(*job_slot);

            let displaced = schedule.place(task.machine(), slot, task.id.as_str());
            debug_assert!(displaced.is_none(), "slot {slot} on {} reused", task.name);

            *machine_slot = slot + 1;
            *job_slot = slot + 1;

            trace!(job = %job.id, task = %task.id, machine = %task.name, slot, "placed task");
        }
    }

    debug!(
        "Scheduled {} tasks from {} jobs on {} machines, makespan {} slots",
        schedule.placement_count(),
        jobs.len(),
        schedule.machine_count(),
        schedule.makespan()
    );

    schedule
}

/// Input container for scheduling.
///
/// Deserializes from `{ "jobs": [...], "strict": true }`; `strict` is
/// optional and defaults to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Jobs in priority (input) order.
    pub jobs: Vec<Job>,
    /// Validate the jobs before scheduling.
    #[serde(default)]
    pub strict: bool,
}

impl ScheduleRequest {
    /// Creates a non-strict request.
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs,
            strict: false,
        }
    }

    /// Sets strict validation.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Configurable front end to [`generate_schedule`].
///
/// In strict mode, job lists are run through
/// [`validate_jobs`] first and rejected with every problem found.
/// Otherwise input is scheduled as given.
///
/// # Example
///
/// ```
/// use slot_schedule::models::{Job, Task};
/// use slot_schedule::scheduler::SlotScheduler;
///
/// let jobs = vec![
///     Job::new("A").with_task(Task::new("T", "Print")),
///     Job::new("A").with_task(Task::new("U", "Trim")),
/// ];
///
/// assert!(SlotScheduler::new().schedule(&jobs).is_ok());
/// assert!(SlotScheduler::new().with_strict(true).schedule(&jobs).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlotScheduler {
    strict: bool,
}

impl SlotScheduler {
    /// Creates a non-strict scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets strict validation.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether input is validated before scheduling.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Schedules `jobs`, validating them first in strict mode.
    pub fn schedule(&self, jobs: &[Job]) -> Result<Schedule, Vec<ValidationError>> {
        self.run(jobs, self.strict)
    }

    /// Schedules from a request. Validates if either the scheduler or the
    /// request is strict.
    pub fn schedule_request(
        &self,
        request: &ScheduleRequest,
    ) -> Result<Schedule, Vec<ValidationError>> {
        self.run(&request.jobs, self.strict || request.strict)
    }

    fn run(&self, jobs: &[Job], strict: bool) -> Result<Schedule, Vec<ValidationError>> {
        if strict {
            if let Err(errors) = validate_jobs(jobs) {
                warn!("Rejected {} jobs with {} validation errors", jobs.len(), errors.len());
                return Err(errors);
            }
        }
        Ok(generate_schedule(jobs))
    }
}
