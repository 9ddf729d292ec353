//! Scheduling domain models.
//!
//! Input is a list of [`Job`]s, each an ordered chain of [`Task`]s. A task's
//! name doubles as the machine it runs on, so machines are never declared
//! separately. Output is a [`Schedule`]: one [`Timeline`] of discrete slots
//! per machine.
//!
//! # Domain Mappings
//!
//! | slot-schedule | Print shop | Manufacturing | Laboratory |
//! |---------------|------------|---------------|------------|
//! | Job | Order | Work order | Sample |
//! | Task | Print / Laminate / Trim step | Operation | Assay step |
//! | Machine | Press | Workcenter | Instrument |
//! | Slot | Shift turn | Period | Run |

mod job;
mod schedule;
mod task;

pub use job::Job;
pub use schedule::{Placement, Schedule, Timeline, Violation, ViolationType};
pub use task::Task;
