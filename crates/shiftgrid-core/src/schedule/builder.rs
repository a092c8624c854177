//! Block builder: compose normalizer, classifier and assigner output.

use tracing::warn;

use crate::domain::{
    AssignmentSource, Category, Employee, ScheduleBlock, TaskRecord, display_task_name,
};

use super::normalize::normalize;
use super::roster::synthesize_roster;

/// Turn a task batch into an ordered block sequence.
///
/// Pure transform: same order as the input, malformed records skipped (the
/// batch never aborts), output length ≤ input length and exactly 1:1 for
/// well-formed records. An empty batch yields an empty sequence.
///
/// Assignment policy:
/// - A record carrying its own employee identity uses it verbatim
///   (`AssignmentSource::Authoritative`).
/// - Otherwise round-robin over `roster` (if supplied and non-empty) or a
///   synthesized `emp-1..emp-N` roster, keyed by the record's input index
///   so re-running the transform on the same batch assigns identically —
///   even when malformed records in between get dropped.
pub fn transform(records: &[TaskRecord], roster: Option<&[Employee]>) -> Vec<ScheduleBlock> {
    if records.is_empty() {
        return Vec::new();
    }

    let synthesized;
    let pool: &[Employee] = match roster {
        Some(supplied) if !supplied.is_empty() => supplied,
        _ => {
            synthesized = synthesize_roster(records.len());
            &synthesized
        }
    };

    let mut blocks = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let slot = match normalize(record) {
            Ok(slot) => slot,
            Err(error) => {
                warn!(task_id = %record.task_id, %error, "skipping malformed task record");
                continue;
            }
        };

        let (employee_id, employee_name, assignment_source) = match &record.employee_id {
            Some(id) => {
                let name = record.employee_name.clone().unwrap_or_else(|| id.clone());
                (id.clone(), name, AssignmentSource::Authoritative)
            }
            None => {
                let employee = &pool[index % pool.len()];
                (
                    employee.id.clone(),
                    employee.name.clone(),
                    AssignmentSource::Synthesized,
                )
            }
        };

        let category = Category::classify(&record.task_type);
        let id = if record.task_id.is_empty() {
            format!("task-{index}")
        } else {
            record.task_id.clone()
        };

        blocks.push(ScheduleBlock {
            id,
            employee_id,
            employee_name,
            task_name: display_task_name(&record.task_type),
            day: slot.day,
            start_hour: slot.start_hour,
            duration_hours: slot.duration_hours,
            category,
            color_token: category.color_token(),
            assignment_source,
        });
    }
    blocks
}
