//! Unit-slot list scheduling for production jobs.
//!
//! Turns an ordered list of jobs, each an ordered chain of machine-bound
//! tasks, into a per-machine timetable of discrete slots. Placement is a
//! single greedy pass in input order: every task takes the earliest slot
//! that is free on its machine and after its job's previous task.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `Job`, `Timeline`, `Schedule`,
//!   `Violation`
//! - **`scheduler`**: `generate_schedule`, the configurable `SlotScheduler`,
//!   and `ScheduleKpi`
//! - **`validation`**: Boundary checks on job lists and schedule verification
//!
//! # Example
//!
//! ```
//! use slot_schedule::models::{Job, Task};
//! use slot_schedule::scheduler::generate_schedule;
//!
//! let jobs = vec![
//!     Job::new("A")
//!         .with_task(Task::new("A-1", "Print"))
//!         .with_task(Task::new("A-2", "Laminate")),
//!     Job::new("B")
//!         .with_task(Task::new("B-1", "Print"))
//!         .with_task(Task::new("B-2", "Laminate")),
//! ];
//!
//! let schedule = generate_schedule(&jobs);
//! assert_eq!(schedule.slot_of("B-1"), Some(("Print", 1)));
//! assert_eq!(schedule.slot_of("A-2"), Some(("Laminate", 1)));
//! assert_eq!(schedule.makespan(), 3);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 7
//! - Graham (1966), "Bounds for certain multiprocessing anomalies"

pub mod models;
pub mod scheduler;
pub mod validation;
