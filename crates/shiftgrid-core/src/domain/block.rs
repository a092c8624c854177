//! Schedule blocks: one task positioned in weekly-grid coordinates.

use serde::Serialize;

use super::Category;

/// Where a block's employee assignment came from.
///
/// Round-robin placeholder assignment is a visualization aid, not a real
/// allocation; this tag keeps downstream consumers (and tests) from
/// mistaking it for the matching service's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentSource {
    /// Placeholder round-robin over a synthesized or supplied roster.
    Synthesized,
    /// The service delivered this identity on the record; used verbatim.
    Authoritative,
}

/// One task record, grid-addressable. Built once per well-formed record and
/// immutable for the lifetime of a schedule view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleBlock {
    /// Source task_id, or a generated `task-{index}` fallback.
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,

    /// Display name derived from the task_type label.
    pub task_name: String,

    /// 0 = Monday .. 6 = Sunday (Monday-origin weekday of start_datetime).
    pub day: u8,

    /// Fractional hour of day in [0, 24).
    pub start_hour: f64,

    /// Exactly duration_minutes / 60; always > 0, never clamped here.
    /// Window clipping happens only at layout time.
    pub duration_hours: f64,

    pub category: Category,

    /// Deterministic function of `category` (see [`Category::color_token`]).
    pub color_token: &'static str,

    pub assignment_source: AssignmentSource,
}

/// Derive a display name from a task_type label:
/// `"code_review"` → `"Code Review"`. Labels already containing spaces
/// pass through with only the first letter upcased.
pub fn display_task_name(type_label: &str) -> String {
    type_label
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
