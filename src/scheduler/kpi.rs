//! Schedule quality metrics (KPIs).
//!
//! Computes performance indicators from a completed schedule and the jobs
//! it was built from. All times are in slots.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Longest machine timeline |
//! | Gaps | Unset slots across all timelines |
//! | Avg Utilization | Mean of occupied slots / makespan per machine |
//! | Job Completion | Last assigned slot + 1, per job id |
//! | Avg Completion | Mean job completion |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::HashMap;

use crate::models::{Job, Schedule};

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Makespan in slots.
    pub makespan: usize,
    /// Number of placed tasks.
    pub placement_count: usize,
    /// Number of unset slots.
    pub gap_count: usize,
    /// Average machine utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Per-machine utilization.
    pub utilization_by_machine: HashMap<String, f64>,
    /// Completion slot (exclusive) per job id.
    pub completion_by_job: HashMap<String, usize>,
    /// Mean completion slot over jobs with placed tasks.
    pub avg_completion: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and its input jobs.
    ///
    /// Job entries sharing an id are merged: the job completes when its
    /// last entry does.
    pub fn calculate(schedule: &Schedule, jobs: &[Job]) -> Self {
        let mut completion_by_job: HashMap<String, usize> = HashMap::new();

        for (job, slots) in jobs.iter().zip(schedule.job_slots(jobs)) {
            if let Some(last) = slots.into_iter().flatten().max() {
                let completion = completion_by_job.entry(job.id.clone()).or_insert(0);
                *completion = (*completion).max(last + 1);
            }
        }

        let utilization_by_machine = schedule.all_utilizations();
        let avg_utilization = if utilization_by_machine.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_machine.values().sum();
            sum / utilization_by_machine.len() as f64
        };

        let avg_completion = if completion_by_job.is_empty() {
            0.0
        } else {
            let sum: usize = completion_by_job.values().sum();
            sum as f64 / completion_by_job.len() as f64
        };

        Self {
            makespan: schedule.makespan(),
            placement_count: schedule.placement_count(),
            gap_count: schedule.gap_count(),
            avg_utilization,
            utilization_by_machine,
            completion_by_job,
            avg_completion,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_makespan: usize, min_utilization: f64) -> bool {
        self.makespan <= max_makespan && self.avg_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use crate::scheduler::generate_schedule;

    fn chain_jobs() -> Vec<Job> {
        vec![
            Job::new("A")
                .with_task(Task::new("A-1", "Print"))
                .with_task(Task::new("A-2", "Laminate"))
                .with_task(Task::new("A-3", "Trim")),
            Job::new("B")
                .with_task(Task::new("B-1", "Print"))
                .with_task(Task::new("B-2", "Laminate"))
                .with_task(Task::new("B-3", "Trim")),
        ]
    }

    #[test]
    fn test_kpi_chain() {
        let jobs = chain_jobs();
        let s = generate_schedule(&jobs);
        let kpi = ScheduleKpi::calculate(&s, &jobs);

        assert_eq!(kpi.makespan, 4);
        assert_eq!(kpi.placement_count, 6);
        assert_eq!(kpi.gap_count, 3);
        // Each machine: 2 of 4 slots
        assert!((kpi.avg_utilization - 0.5).abs() < 1e-10);
        assert!((kpi.utilization_by_machine["Trim"] - 0.5).abs() < 1e-10);

        assert_eq!(kpi.completion_by_job["A"], 3);
        assert_eq!(kpi.completion_by_job["B"], 4);
        assert!((kpi.avg_completion - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_merges_reused_job_id() {
        let jobs = vec![
            Job::new("A").with_task(Task::new("A-1", "Print")),
            Job::new("A").with_task(Task::new("A-2", "Trim")),
        ];
        let s = generate_schedule(&jobs);
        let kpi = ScheduleKpi::calculate(&s, &jobs);
        assert_eq!(kpi.completion_by_job.len(), 1);
        assert_eq!(kpi.completion_by_job["A"], 2);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Schedule::new(), &[Job::new("empty")]);
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.avg_utilization, 0.0);
        assert!(kpi.completion_by_job.is_empty());
        assert_eq!(kpi.avg_completion, 0.0);
    }

    #[test]
    fn test_meets_thresholds() {
        let jobs = chain_jobs();
        let kpi = ScheduleKpi::calculate(&generate_schedule(&jobs), &jobs);
        assert!(kpi.meets_thresholds(4, 0.5));
        assert!(!kpi.meets_thresholds(3, 0.5));
        assert!(!kpi.meets_thresholds(4, 0.6));
    }
}
