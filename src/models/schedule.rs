//! Schedule (solution) model.
//!
//! A schedule maps each machine to a [`Timeline`]: a sequence of discrete,
//! zero-based slots, each holding one task id or nothing. Unset slots are
//! gaps left when job precedence pushed a task past the machine's next
//! free slot. A machine that never received a task has no timeline at all.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.3 (Gantt charts)

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, VecDeque};

use super::Job;

/// One machine's slot sequence.
///
/// Serializes as a JSON array with `null` for gaps, e.g.
/// `[null, "A-2", "B-2"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    slots: Vec<Option<String>>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `task_id` at `slot`, padding with gaps if the timeline is
    /// shorter. Returns the task previously occupying the slot, if any.
    pub fn place(&mut self, slot: usize, task_id: impl Into<String>) -> Option<String> {
        if slot >= self.slots.len() {
            self.slots.resize(slot + 1, None);
        }
        self.slots[slot].replace(task_id.into())
    }

    /// Task id at `slot`. `None` for gaps and for slots past the end.
    pub fn get(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).and_then(|s| s.as_deref())
    }

    /// Number of slots, including gaps.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the timeline has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Number of unset slots.
    pub fn gap_count(&self) -> usize {
        self.len() - self.occupied_count()
    }

    /// Occupied slots as `(slot, task_id)`, in slot order.
    pub fn placements(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, s)| s.as_deref().map(|id| (slot, id)))
    }

    /// First slot holding `task_id`.
    pub fn position(&self, task_id: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.as_deref() == Some(task_id))
    }

    /// Raw slot sequence.
    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }
}

impl<S: Into<String>> FromIterator<Option<S>> for Timeline {
    fn from_iter<I: IntoIterator<Item = Option<S>>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(|s| s.map(Into::into)).collect(),
        }
    }
}

/// A task placed on a machine at a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'a> {
    /// Machine (task name).
    pub machine: &'a str,
    /// Zero-based slot index.
    pub slot: usize,
    /// Placed task id.
    pub task_id: &'a str,
}

/// A complete timetable: machine name → [`Timeline`].
///
/// Machines are kept in name order so iteration and serialization are
/// deterministic. Serializes transparently as
/// `{ "Laminate": [null, "A-2"], "Print": ["A-1", "B-1"] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    timelines: BTreeMap<String, Timeline>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `task_id` on `machine` at `slot`, creating the machine's
    /// timeline on first use. Returns the displaced task id, if any.
    pub fn place(&mut self, machine: &str, slot: usize, task_id: impl Into<String>) -> Option<String> {
        match self.timelines.get_mut(machine) {
            Some(timeline) => timeline.place(slot, task_id),
            None => {
                let mut timeline = Timeline::new();
                timeline.place(slot, task_id);
                self.timelines.insert(machine.to_string(), timeline);
                None
            }
        }
    }

    /// Timeline for a machine, if it has any task.
    pub fn timeline(&self, machine: &str) -> Option<&Timeline> {
        self.timelines.get(machine)
    }

    /// Machines in name order.
    pub fn machines(&self) -> impl Iterator<Item = &str> + '_ {
        self.timelines.keys().map(String::as_str)
    }

    /// `(machine, timeline)` pairs in machine name order.
    pub fn timelines(&self) -> impl Iterator<Item = (&str, &Timeline)> + '_ {
        self.timelines.iter().map(|(m, t)| (m.as_str(), t))
    }

    /// Number of machines with at least one task.
    pub fn machine_count(&self) -> usize {
        self.timelines.len()
    }

    /// Whether no task has been placed.
    pub fn is_empty(&self) -> bool {
        self.timelines.is_empty()
    }

    /// Makespan in slots: length of the longest timeline.
    pub fn makespan(&self) -> usize {
        self.timelines.values().map(Timeline::len).max().unwrap_or(0)
    }

    /// Total number of placed tasks.
    pub fn placement_count(&self) -> usize {
        self.timelines.values().map(Timeline::occupied_count).sum()
    }

    /// Total number of gaps across all machines.
    pub fn gap_count(&self) -> usize {
        self.timelines.values().map(Timeline::gap_count).sum()
    }

    /// All placements, by machine name then slot.
    pub fn placements(&self) -> impl Iterator<Item = Placement<'_>> + '_ {
        self.timelines.iter().flat_map(|(machine, timeline)| {
            timeline.placements().map(move |(slot, task_id)| Placement {
                machine,
                slot,
                task_id,
            })
        })
    }

    /// Machine and slot of the first placement of `task_id`.
    ///
    /// Ambiguous when task ids are reused; see [`Schedule::job_slots`].
    pub fn slot_of(&self, task_id: &str) -> Option<(&str, usize)> {
        self.timelines
            .iter()
            .find_map(|(m, t)| t.position(task_id).map(|slot| (m.as_str(), slot)))
    }

    /// Fraction of the makespan during which `machine` is busy.
    ///
    /// Returns `None` for an empty schedule. Unused machines report `0.0`.
    pub fn utilization(&self, machine: &str) -> Option<f64> {
        let horizon = self.makespan();
        if horizon == 0 {
            return None;
        }
        let busy = self.timeline(machine).map_or(0, Timeline::occupied_count);
        Some(busy as f64 / horizon as f64)
    }

    /// Utilization of every machine, using the makespan as horizon.
    pub fn all_utilizations(&self) -> HashMap<String, f64> {
        let horizon = self.makespan();
        if horizon == 0 {
            return HashMap::new();
        }
        self.timelines
            .iter()
            .map(|(m, t)| (m.clone(), t.occupied_count() as f64 / horizon as f64))
            .collect()
    }

    /// Slot assigned to each task of each job entry, parallel to `jobs`.
    ///
    /// `None` marks a task that has no placement on its machine. Tasks
    /// sharing an id on the same machine are matched in input order, which
    /// is also slot order because a machine's next free slot only grows.
    pub fn job_slots(&self, jobs: &[Job]) -> Vec<Vec<Option<usize>>> {
        let mut queues: HashMap<(&str, &str), VecDeque<usize>> = HashMap::new();
        for p in self.placements() {
            queues.entry((p.machine, p.task_id)).or_default().push_back(p.slot);
        }

        jobs.iter()
            .map(|job| {
                job.tasks
                    .iter()
                    .map(|task| {
                        queues
                            .get_mut(&(task.machine(), task.id.as_str()))
                            .and_then(VecDeque::pop_front)
                    })
                    .collect()
            })
            .collect()
    }

    /// Consumes the schedule, returning the underlying map.
    pub fn into_timelines(self) -> BTreeMap<String, Timeline> {
        self.timelines
    }
}

/// A constraint violation found when checking a schedule against its jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Offending task id.
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationType {
    /// Task does not appear on its machine.
    MissingPlacement,
    /// Task is not strictly after its job predecessor.
    PrecedenceViolation,
}

impl Violation {
    /// Creates a missing placement violation.
    pub fn missing_placement(task_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violation_type: ViolationType::MissingPlacement,
            entity_id: task_id.into(),
            message: message.into(),
        }
    }

    /// Creates a precedence violation.
    pub fn precedence_violation(task_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violation_type: ViolationType::PrecedenceViolation,
            entity_id: task_id.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.place("Print", 0, "A-1");
        s.place("Print", 1, "B-1");
        s.place("Laminate", 1, "A-2");
        s.place("Laminate", 2, "B-2");
        s
    }

    #[test]
    fn test_timeline_place_pads_with_gaps() {
        let mut t = Timeline::new();
        assert_eq!(t.place(2, "X"), None);
        assert_eq!(t.len(), 3);
        assert_eq!(t.get(0), None);
        assert_eq!(t.get(2), Some("X"));
        assert_eq!(t.get(7), None);
        assert_eq!(t.occupied_count(), 1);
        assert_eq!(t.gap_count(), 2);
    }

    #[test]
    fn test_timeline_place_returns_displaced() {
        let mut t = Timeline::new();
        t.place(0, "X");
        assert_eq!(t.place(0, "Y"), Some("X".to_string()));
        assert_eq!(t.get(0), Some("Y"));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_timeline_placements_skip_gaps() {
        let t: Timeline = vec![None, Some("A-2"), Some("B-2")].into_iter().collect();
        let p: Vec<_> = t.placements().collect();
        assert_eq!(p, vec![(1, "A-2"), (2, "B-2")]);
        assert_eq!(t.position("B-2"), Some(2));
        assert_eq!(t.position("nope"), None);
    }

    #[test]
    fn test_schedule_makespan_and_counts() {
        let s = sample_schedule();
        assert_eq!(s.makespan(), 3);
        assert_eq!(s.machine_count(), 2);
        assert_eq!(s.placement_count(), 4);
        assert_eq!(s.gap_count(), 1);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_schedule_machines_sorted() {
        let s = sample_schedule();
        let machines: Vec<_> = s.machines().collect();
        assert_eq!(machines, vec!["Laminate", "Print"]);
    }

    #[test]
    fn test_schedule_slot_of() {
        let s = sample_schedule();
        assert_eq!(s.slot_of("A-2"), Some(("Laminate", 1)));
        assert_eq!(s.slot_of("B-1"), Some(("Print", 1)));
        assert_eq!(s.slot_of("Z"), None);
    }

    #[test]
    fn test_schedule_utilization() {
        let s = sample_schedule();
        // Print: 2 of 3 slots
        let u = s.utilization("Print").unwrap();
        assert!((u - 2.0 / 3.0).abs() < 1e-10);
        // Unknown machine is idle
        assert_eq!(s.utilization("Trim"), Some(0.0));

        let all = s.all_utilizations();
        assert_eq!(all.len(), 2);
        assert!((all["Laminate"] - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert_eq!(s.makespan(), 0);
        assert_eq!(s.placement_count(), 0);
        assert!(s.is_empty());
        assert_eq!(s.utilization("Print"), None);
        assert!(s.all_utilizations().is_empty());
    }

    #[test]
    fn test_schedule_serializes_gaps_as_null() {
        let s = sample_schedule();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Print": ["A-1", "B-1"],
                "Laminate": [null, "A-2", "B-2"]
            })
        );

        let back: Schedule = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_job_slots_parallel_to_jobs() {
        let s = sample_schedule();
        let jobs = vec![
            Job::new("A")
                .with_task(Task::new("A-1", "Print"))
                .with_task(Task::new("A-2", "Laminate")),
            Job::new("B")
                .with_task(Task::new("B-1", "Print"))
                .with_task(Task::new("B-2", "Laminate"))
                .with_task(Task::new("B-3", "Trim")),
        ];
        let slots = s.job_slots(&jobs);
        assert_eq!(slots, vec![vec![Some(0), Some(1)], vec![Some(1), Some(2), None]]);
    }

    #[test]
    fn test_job_slots_reused_task_ids() {
        let mut s = Schedule::new();
        s.place("Print", 0, "step");
        s.place("Print", 1, "step");
        let jobs = vec![
            Job::new("A").with_task(Task::new("step", "Print")),
            Job::new("B").with_task(Task::new("step", "Print")),
        ];
        assert_eq!(s.job_slots(&jobs), vec![vec![Some(0)], vec![Some(1)]]);
    }

    #[test]
    fn test_violation_factories() {
        let v1 = Violation::missing_placement("A-1", "not placed");
        assert_eq!(v1.violation_type, ViolationType::MissingPlacement);
        assert_eq!(v1.entity_id, "A-1");

        let v2 = Violation::precedence_violation("A-2", "before A-1");
        assert_eq!(v2.violation_type, ViolationType::PrecedenceViolation);
    }
}
