//! Collection wrapper types for displaying groups of view items.
//!
//! This module provides wrapper types that format collections with consistent
//! structure and empty collection handling.

use std::fmt;

use crate::view::{DependencyRef, TimelineBar};

/// Number of cells in a rendered timeline bar.
const BAR_CELLS: usize = 20;

/// Newtype wrapper for displaying the timeline chart.
///
/// # Examples
///
/// ```rust
/// use planview_core::{display::Timeline, view::TimelineBar};
///
/// let bars = vec![TimelineBar {
///     phase: "Planning".to_string(),
///     days: 3,
///     percentage: 25.0,
/// }];
/// let output = Timeline(&bars).to_string();
/// assert!(output.contains("Planning"));
/// assert!(output.contains("25%"));
/// ```
pub struct Timeline<'a>(pub &'a [TimelineBar]);

impl fmt::Display for Timeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No phases.");
        }
        for bar in self.0 {
            write!(f, "{bar}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TimelineBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = ((self.width() / 100.0) * BAR_CELLS as f64).round() as usize;
        let filled = filled.min(BAR_CELLS);
        writeln!(
            f,
            "- **{}** `{}{}` {:.0}% ({})",
            self.phase,
            "█".repeat(filled),
            "░".repeat(BAR_CELLS - filled),
            self.percentage,
            self.days_label()
        )
    }
}

/// Newtype wrapper for a task's dependency list.
///
/// Dependencies that do not name a task of the plan are marked as unknown.
pub struct Dependencies<'a>(pub &'a [DependencyRef]);

impl fmt::Display for Dependencies<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, dependency) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            if dependency.resolved {
                write!(f, "{}", dependency.name)?;
            } else {
                write!(f, "{} (unknown)", dependency.name)?;
            }
        }
        Ok(())
    }
}
