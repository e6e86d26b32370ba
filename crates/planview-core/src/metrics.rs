//! View-ready numbers derived from a validated plan.
//!
//! All functions here are pure. Durations are whole days; percentages are
//! plain `f64` values where `100.0` means the whole plan.

use crate::{
    display::ShortDate,
    error::Result,
    models::{PhaseCategory, PlanDate, Task},
};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Inclusive day span of a phase.
///
/// Uses the start of the *first* task and the end of the *last* task in list
/// order, not the earliest start and latest end; a phase whose tasks are out
/// of chronological order reports the span between those two endpoints. The
/// span is rounded up to whole days and counts both endpoints, so a one-day
/// task yields `1`. Non-empty lists never yield less than `1`; an empty list
/// yields `0`.
///
/// # Examples
///
/// ```rust
/// use planview_core::metrics::phase_duration;
///
/// assert_eq!(phase_duration(&[]), 0);
/// ```
pub fn phase_duration(tasks: &[Task]) -> i64 {
    let (Some(first), Some(last)) = (tasks.first(), tasks.last()) else {
        return 0;
    };
    span_days(&first.start_date, &last.end_date).max(1)
}

/// Inclusive day count between two plan dates, rounding partial days up.
pub fn span_days(start: &PlanDate, end: &PlanDate) -> i64 {
    let millis = end.duration_since(start).as_millis() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64 + 1
}

/// Share of the whole plan taken by a phase, in percent.
///
/// A non-positive `total_days` yields `0.0` rather than an infinite or NaN
/// value. The result is not clamped to `100.0`; see
/// [`crate::view::TimelineBar::width`] for the clamped bar width.
pub fn timeline_percentage(phase_days: i64, total_days: i64) -> f64 {
    if total_days <= 0 {
        return 0.0;
    }
    (phase_days as f64 / total_days as f64) * 100.0
}

/// Icon key for a phase name.
///
/// Exact, case-sensitive lookup; unknown names get `"fas fa-tasks"`.
///
/// ```rust
/// use planview_core::metrics::phase_icon;
///
/// assert_eq!(phase_icon("Testing"), "fas fa-vial");
/// assert_eq!(phase_icon("Unknown Phase XYZ"), "fas fa-tasks");
/// ```
pub fn phase_icon(phase_name: &str) -> &'static str {
    PhaseCategory::from_name(phase_name).icon()
}

/// Format a date-valued string as `"Mar 5, 2025"`.
///
/// # Errors
///
/// Returns `PlanError::DateParse` if the string is not a date.
///
/// ```rust
/// use planview_core::metrics::format_date;
///
/// assert_eq!(format_date("2025-03-05").unwrap(), "Mar 5, 2025");
/// assert!(format_date("tomorrow").is_err());
/// ```
pub fn format_date(date: &str) -> Result<String> {
    let date = PlanDate::parse(date)?;
    Ok(ShortDate(&date).to_string())
}
