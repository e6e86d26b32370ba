//! Plan document definition.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{leading_days, Phase, PlanDate, Task};

/// A complete generated plan as returned by the plan server.
///
/// Instances are produced by [`crate::validate::validate`], which is also what
/// the `Deserialize` implementation runs, so every `PlanDocument` satisfies
/// the structural invariants: non-empty goal, at least one phase, at least
/// one task per phase, parseable dates.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlanDocument {
    /// The goal the plan was generated for
    pub goal: String,

    /// Total duration as authored, e.g. `"30 days"`
    pub total_duration: String,

    /// First day of the plan
    pub start_date: PlanDate,

    /// Last day of the plan
    pub end_date: PlanDate,

    /// Phases in chronological order
    pub phases: Vec<Phase>,

    /// Milestones and closing remarks
    pub summary: Summary,

    /// Whether the server enhanced the plan with an AI service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_enhanced: Option<bool>,

    /// Project type the server detected for the goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
}

/// Closing summary of a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    /// Milestone descriptions in plan order
    pub milestones: Vec<String>,

    /// Free-text remarks
    pub remarks: String,
}

impl PlanDocument {
    /// Leading day count of `total_duration`.
    pub fn total_days(&self) -> Option<i64> {
        leading_days(&self.total_duration)
    }

    /// All tasks of the plan in phase order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.phases.iter().flat_map(|phase| phase.tasks.iter())
    }

    /// Find a task by exact name.
    pub fn find_task(&self, name: &str) -> Option<&Task> {
        self.tasks().find(|task| task.task_name == name)
    }
}

impl<'de> Deserialize<'de> for PlanDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        crate::validate::validate(&value).map_err(serde::de::Error::custom)
    }
}
