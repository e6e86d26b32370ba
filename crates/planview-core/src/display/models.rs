//! Display implementations for domain models.
//!
//! This module contains the Display trait implementations for the plan
//! models, separated from the model definitions to keep presentation out of
//! the data structures. A whole [`PlanDocument`] is displayed through its
//! computed [`PlanView`].

use std::fmt;

use crate::{
    models::{PhaseCategory, PlanDocument, Priority, Summary},
    view::PlanView,
};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PhaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().unwrap_or("Generic"))
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Milestones")?;
        writeln!(f)?;
        if self.milestones.is_empty() {
            writeln!(f, "No milestones.")?;
        } else {
            for milestone in &self.milestones {
                writeln!(f, "- {milestone}")?;
            }
        }

        writeln!(f, "\n## Summary")?;
        writeln!(f)?;
        writeln!(f, "{}", self.remarks)
    }
}

impl fmt::Display for PlanDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PlanView::from_document(self))
    }
}
