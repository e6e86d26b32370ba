//! Data models for generated plans.
//!
//! This module contains the typed form of a plan document as returned by the
//! plan server. Values are only ever built by the validator in
//! [`crate::validate`], so code receiving a [`PlanDocument`] can rely on its
//! structural invariants instead of re-checking them. Display implementations
//! live in [`crate::display::models`].
//!
//! # Shape
//!
//! ```text
//! PlanDocument
//! ├── goal, total_duration, start_date, end_date
//! ├── phases: [Phase]
//! │   └── tasks: [Task]
//! │       └── task_name, description, duration, start/end, dependencies, priority
//! └── summary: { milestones, remarks }
//! ```
//!
//! String-typed fields of the wire format that have a closed set of values
//! are mapped to enums at the boundary: [`Priority`] for task priorities and
//! [`PhaseCategory`] for phase names. The phase name itself is retained, since
//! unknown names are valid and fall back to [`PhaseCategory::Generic`].
//!
//! # Examples
//!
//! ```rust
//! use planview_core::models::{PhaseCategory, Priority};
//!
//! assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
//! assert_eq!(PhaseCategory::from_name("Testing").icon(), "fas fa-vial");
//! assert_eq!(PhaseCategory::from_name("testing"), PhaseCategory::Generic);
//! ```

pub mod date;
pub mod document;
pub mod duration;
pub mod phase;
pub mod priority;
pub mod task;


pub use date::PlanDate;
pub use document::{PlanDocument, Summary};
pub use duration::leading_days;
pub use phase::{Phase, PhaseCategory};
pub use priority::Priority;
pub use task::Task;
