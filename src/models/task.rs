//! Task (operation) model.
//!
//! A task is one step of a job. It occupies exactly one slot on the
//! machine named by [`Task::name`].

use serde::{Deserialize, Serialize};

/// A single unit-length operation bound to one machine.
///
/// # Wire Format
/// Serializes as `{ "taskId": "...", "taskName": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier, placed into the machine's timeline.
    #[serde(rename = "taskId")]
    pub id: String,
    /// Task name. Also the identifier of the machine the task runs on.
    #[serde(rename = "taskName")]
    pub name: String,
}

impl Task {
    /// Creates a task that runs on the machine called `name`.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The machine this task occupies.
    #[inline]
    pub fn machine(&self) -> &str {
        &self.name
    }
}
