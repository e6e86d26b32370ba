//! Date display utilities.
//!
//! This module provides wrapper types for formatting plan dates in the short,
//! human-readable form used throughout plan output.

use std::fmt;

use crate::models::PlanDate;

/// A wrapper around `PlanDate` that formats it as `"Mar 5, 2025"` via the
/// `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `Mon D, YYYY`
/// - English three-letter month abbreviation
/// - Day of month without padding
/// - Four-digit year
///
/// The time of day, if any, is not shown.
///
/// # Examples
///
/// ```rust
/// use planview_core::{display::ShortDate, models::PlanDate};
///
/// let date = PlanDate::parse("2025-03-05").unwrap();
/// assert_eq!(ShortDate(&date).to_string(), "Mar 5, 2025");
/// ```
pub struct ShortDate<'a>(pub &'a PlanDate);

impl<'a> fmt::Display for ShortDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.date().strftime("%b %-d, %Y"))
    }
}
