//! Task model definition.

use serde::Serialize;

use super::{leading_days, PlanDate, Priority};

/// A single unit of work inside a phase.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Task {
    /// Name of the task, referenced by other tasks' dependencies
    pub task_name: String,

    /// Free-text description
    pub description: String,

    /// Duration as authored, e.g. `"3 days"`; never reconciled with the dates
    pub duration: String,

    /// First day of the task
    pub start_date: PlanDate,

    /// Last day of the task (not before `start_date`)
    pub end_date: PlanDate,

    /// Names of tasks this one waits on
    pub dependencies: Vec<String>,

    /// Task priority
    pub priority: Priority,
}

impl Task {
    /// Leading day count of the authored duration string.
    pub fn duration_days(&self) -> Option<i64> {
        leading_days(&self.duration)
    }

    /// Whether the task waits on any other task.
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}
