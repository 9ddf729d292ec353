//! Greedy slot scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `generate_schedule` is a single-pass list scheduler over unit-length
//! tasks. Each task goes to the earliest slot that is both free on its
//! machine and after its job's previous task. Input order is the only
//! priority; placements are never revised.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, gaps, utilization, and job completion
//! slots for a finished schedule.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 7
//! - Graham (1966), "Bounds for certain multiprocessing anomalies"

mod kpi;
mod slot;

pub use kpi::ScheduleKpi;
pub use slot::{generate_schedule, ScheduleRequest, SlotScheduler};
