//! Per-plan, per-phase and per-task view data.
//!
//! A [`PlanView`] holds everything a renderer needs, already computed: display
//! dates, phase durations, timeline percentages, icons and dependency
//! annotations. Rendering it is a matter of formatting strings; see
//! [`crate::display::views`] for the markdown form.

use log::{debug, warn};

use crate::{
    display::ShortDate,
    metrics::{phase_duration, timeline_percentage},
    models::{Phase, PlanDocument, Priority, Summary, Task},
};

/// Computed view of a whole plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanView {
    pub goal: String,
    /// Total duration as authored, e.g. `"30 days"`
    pub total_duration: String,
    pub start_date: String,
    pub end_date: String,
    pub ai_enhanced: bool,
    pub timeline: Vec<TimelineBar>,
    pub phases: Vec<PhaseView>,
    pub summary: Summary,
}

/// One bar of the timeline chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineBar {
    pub phase: String,
    pub days: i64,
    /// Share of the plan's total duration; may exceed 100
    pub percentage: f64,
}

/// Computed view of a phase card.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseView {
    pub name: String,
    pub icon: &'static str,
    pub days: i64,
    pub tasks: Vec<TaskView>,
}

/// Computed view of a task row.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskView {
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub start_date: String,
    pub end_date: String,
    /// Duration as authored
    pub duration: String,
    pub dependencies: Vec<DependencyRef>,
}

/// A dependency of a task, annotated with whether it names a task of the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRef {
    pub name: String,
    pub resolved: bool,
}

impl PlanView {
    /// Build the view for a validated plan.
    pub fn from_document(plan: &PlanDocument) -> Self {
        let total_days = plan.total_days().unwrap_or(0);
        debug!(
            "Building view for '{}' ({} phases, {total_days} total days)",
            plan.goal,
            plan.phases.len()
        );

        let phases: Vec<PhaseView> = plan
            .phases
            .iter()
            .map(|phase| PhaseView::from_phase(phase, plan))
            .collect();

        let timeline = phases
            .iter()
            .map(|phase| TimelineBar {
                phase: phase.name.clone(),
                days: phase.days,
                percentage: timeline_percentage(phase.days, total_days),
            })
            .collect();

        Self {
            goal: plan.goal.clone(),
            total_duration: plan.total_duration.clone(),
            start_date: ShortDate(&plan.start_date).to_string(),
            end_date: ShortDate(&plan.end_date).to_string(),
            ai_enhanced: plan.ai_enhanced.unwrap_or(false),
            timeline,
            phases,
            summary: plan.summary.clone(),
        }
    }

    /// Number of phases in the plan.
    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    /// Every dependency that does not name a task of the plan.
    pub fn unresolved_dependencies(&self) -> Vec<&DependencyRef> {
        self.phases
            .iter()
            .flat_map(|phase| phase.tasks.iter())
            .flat_map(|task| task.dependencies.iter())
            .filter(|dependency| !dependency.resolved)
            .collect()
    }
}

impl From<&PlanDocument> for PlanView {
    fn from(plan: &PlanDocument) -> Self {
        Self::from_document(plan)
    }
}

impl TimelineBar {
    /// Bar fill in percent, clamped to `0..=100`.
    pub fn width(&self) -> f64 {
        if self.percentage.is_finite() {
            self.percentage.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    /// `"N day(s)"` label.
    pub fn days_label(&self) -> String {
        plural(self.days, "day")
    }
}

impl PhaseView {
    fn from_phase(phase: &Phase, plan: &PlanDocument) -> Self {
        Self {
            name: phase.name.clone(),
            icon: phase.category().icon(),
            days: phase_duration(&phase.tasks),
            tasks: phase
                .tasks
                .iter()
                .map(|task| TaskView::from_task(task, plan))
                .collect(),
        }
    }

    /// Number of tasks in the phase.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// `"N task(s)"` label.
    pub fn tasks_label(&self) -> String {
        plural(self.task_count() as i64, "task")
    }

    /// `"N day(s)"` label.
    pub fn days_label(&self) -> String {
        plural(self.days, "day")
    }
}

impl TaskView {
    fn from_task(task: &Task, plan: &PlanDocument) -> Self {
        let dependencies = task
            .dependencies
            .iter()
            .map(|name| {
                let resolved = plan.find_task(name).is_some();
                if !resolved {
                    warn!(
                        "Task '{}' depends on unknown task '{name}'",
                        task.task_name
                    );
                }
                DependencyRef {
                    name: name.clone(),
                    resolved,
                }
            })
            .collect();

        Self {
            name: task.task_name.clone(),
            description: task.description.clone(),
            priority: task.priority,
            start_date: ShortDate(&task.start_date).to_string(),
            end_date: ShortDate(&task.end_date).to_string(),
            duration: task.duration.clone(),
            dependencies,
        }
    }

    /// `"Mar 5, 2025 - Mar 7, 2025"`.
    pub fn date_range(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }

    /// Whether the task waits on any other task.
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}

/// `"1 day"`, `"0 days"`, `"3 days"`.
pub fn plural(count: i64, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
