//! Input records as delivered by the external scheduling service.
//!
//! These shapes mirror the service JSON verbatim. We deserialize them as-is
//! and keep fields the core itself never reads (`priority`,
//! `required_skills`) so callers can pass them through to other views.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One task as the scheduling service describes it.
///
/// `start_datetime` / `end_datetime` stay as strings here; parsing (and the
/// decision to skip a malformed record) belongs to the normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub task_id: String,
    pub task_type: String,
    pub duration_minutes: u32,

    #[serde(default)]
    pub priority: u32,

    /// Unused by the transform; carried for downstream views.
    #[serde(default)]
    pub required_skills: RequiredSkills,

    /// ISO-8601, with or without an offset.
    pub start_datetime: String,
    pub end_datetime: String,

    /// Set when the service already assigned this task to someone.
    /// In that case the round-robin placeholder assignment is bypassed
    /// and this identity is used verbatim.
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
}

/// Skill requirements come in two wire shapes: a free-text summary
/// (CSV-imported batches) or a structured skill→level map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequiredSkills {
    Levels(HashMap<String, u32>),
    Text(String),
}

impl Default for RequiredSkills {
    fn default() -> Self {
        Self::Levels(HashMap::new())
    }
}

/// An employee, either supplied by the service roster or synthesized
/// as a placeholder (`emp-1..emp-N`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
}

impl Employee {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
