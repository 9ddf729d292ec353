//! Job model.
//!
//! A job is an ordered chain of tasks. The order is a precedence
//! constraint: task `i + 1` may not start before task `i` has finished.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Task;

/// A job: an identifier plus an ordered sequence of tasks.
///
/// Jobs sharing an `id` share one precedence counter during scheduling,
/// so callers should keep ids unique per real-world job
/// (see [`crate::validation::validate_jobs`]).
///
/// # Wire Format
/// Serializes as `{ "jobId": "...", "tasks": [...] }`. A missing
/// `tasks` field deserializes as an empty job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Job identifier.
    #[serde(rename = "jobId")]
    pub id: String,
    /// Tasks in precedence order.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Job {
    /// Creates a job with no tasks.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tasks: Vec::new(),
        }
    }

    /// Appends a task to the end of the chain.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Appends several tasks, preserving their order.
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.tasks.extend(tasks);
        self
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Whether this job has any tasks.
    pub fn has_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Distinct machines visited by this job, in first-use order.
    pub fn machines(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tasks
            .iter()
            .map(Task::machine)
            .filter(|m| seen.insert(*m))
            .collect()
    }
}
