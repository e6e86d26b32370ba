//! Markdown rendering of plan views.

use std::fmt;

use super::collections::{Dependencies, Timeline};
use crate::view::{PhaseView, PlanView, TaskView};

impl fmt::Display for PlanView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.goal)?;
        writeln!(f)?;

        writeln!(f, "- Total Duration: {}", self.total_duration)?;
        writeln!(f, "- Start: {}", self.start_date)?;
        writeln!(f, "- End: {}", self.end_date)?;
        writeln!(f, "- Phases: {}", self.phase_count())?;
        if self.ai_enhanced {
            writeln!(f, "- AI Enhanced")?;
        }

        writeln!(f, "\n## Timeline")?;
        writeln!(f)?;
        write!(f, "{}", Timeline(&self.timeline))?;

        writeln!(f, "\n## Phases")?;
        writeln!(f)?;
        for (index, phase) in self.phases.iter().enumerate() {
            write!(f, "### {}. ", index + 1)?;
            write!(f, "{phase}")?;
        }

        write!(f, "{}", self.summary)
    }
}

impl fmt::Display for PhaseView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} `{}`", self.name, self.icon)?;
        writeln!(f)?;
        writeln!(f, "- {} · {}", self.tasks_label(), self.days_label())?;
        writeln!(f)?;
        for task in &self.tasks {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TaskView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#### {} [{}]", self.name, self.priority)?;
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        writeln!(f, "- Dates: {}", self.date_range())?;
        writeln!(f, "- Duration: {}", self.duration)?;
        if self.has_dependencies() {
            writeln!(f, "- Depends on: {}", Dependencies(&self.dependencies))?;
        }
        writeln!(f)
    }
}
