//! Core library for the planview plan viewer.
//!
//! This crate turns plan documents produced by a plan server into view-ready
//! data: it validates raw JSON into typed models, derives phase durations,
//! timeline percentages and icons, and formats the result as markdown.
//!
//! # Pipeline
//!
//! ```text
//! raw JSON ──▶ validate ──▶ PlanDocument ──▶ metrics/view ──▶ PlanView ──▶ display
//! ```
//!
//! - [`validate`]: all-or-nothing validation of raw JSON
//! - [`models`]: the typed plan document
//! - [`metrics`]: pure derivations (phase duration, percentages, icons, dates)
//! - [`view`]: per-plan, per-phase and per-task view models
//! - [`display`]: markdown formatting of views and notifications
//! - [`state`]: the single current plan and its JSON export
//! - [`client`]: HTTP client for the plan server
//!
//! # Quick Start
//!
//! ```rust
//! use planview_core::{metrics, validate::parse_plan, PlanState, PlanView};
//!
//! let plan = parse_plan(r#"{
//!     "goal": "Write a report in 12 days",
//!     "total_duration": "12 days",
//!     "start_date": "2025-01-01",
//!     "end_date": "2025-01-12",
//!     "phases": [{
//!         "phase": "Research",
//!         "tasks": [
//!             {"task_name": "Collect Sources", "description": "", "duration": "3 days",
//!              "start_date": "2025-01-01", "end_date": "2025-01-03",
//!              "dependencies": [], "priority": "High"},
//!             {"task_name": "Draft", "description": "", "duration": "3 days",
//!              "start_date": "2025-01-10", "end_date": "2025-01-12",
//!              "dependencies": ["Collect Sources"], "priority": "medium"}
//!         ]
//!     }],
//!     "summary": {"milestones": [], "remarks": ""}
//! }"#)?;
//!
//! assert_eq!(metrics::phase_duration(&plan.phases[0].tasks), 12);
//!
//! let view = PlanView::from_document(&plan);
//! assert_eq!(view.timeline[0].percentage, 100.0);
//! assert_eq!(view.phases[0].icon, "fas fa-search");
//!
//! let mut state = PlanState::new();
//! state.replace(plan);
//! assert!(state.export_json()?.contains("\"goal\""));
//! # Ok::<(), planview_core::PlanError>(())
//! ```

pub mod client;
pub mod display;
pub mod error;
pub mod metrics;
pub mod models;
pub mod params;
pub mod state;
pub mod validate;
pub mod view;

// Re-export commonly used types
pub use client::{ApiStatus, PlanClient, PlanClientBuilder};
pub use display::{Notification, ShortDate};
pub use error::{PlanError, Result};
pub use models::{Phase, PhaseCategory, PlanDate, PlanDocument, Priority, Summary, Task};
pub use params::{DownloadPlan, GeneratePlan, LoadPlan};
pub use state::PlanState;
pub use view::PlanView;
