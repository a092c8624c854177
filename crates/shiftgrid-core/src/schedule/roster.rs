//! Roster synthesis and extraction.

use std::collections::HashSet;

use crate::domain::{Employee, ScheduleBlock};

/// Upper bound on the synthesized placeholder roster.
pub const SYNTHESIZED_ROSTER_CAP: usize = 5;

/// Build a placeholder roster when the caller supplied none:
/// `emp-1..emp-N` with N = min(task count, cap).
pub fn synthesize_roster(task_count: usize) -> Vec<Employee> {
    (1..=task_count.min(SYNTHESIZED_ROSTER_CAP))
        .map(|i| Employee::new(format!("emp-{i}"), format!("Employee {i}")))
        .collect()
}

/// Deduplicated employees actually referenced by a block sequence,
/// first-seen order. Pure and idempotent; an empty sequence yields an
/// empty roster (the no-roster case degrades, it does not error).
pub fn extract_roster(blocks: &[ScheduleBlock]) -> Vec<Employee> {
    let mut seen = HashSet::new();
    let mut roster = Vec::new();
    for block in blocks {
        if seen.insert(block.employee_id.as_str()) {
            roster.push(Employee::new(
                block.employee_id.clone(),
                block.employee_name.clone(),
            ));
        }
    }
    roster
}
