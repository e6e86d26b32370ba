//! Display formatting for plans, views and notifications.
//!
//! Domain models and view models implement [`std::fmt::Display`] and produce
//! markdown, which the CLI renders to the terminal. Wrapper types cover the
//! cases where a plain value needs contextual formatting (short dates,
//! timeline charts, dependency lists).
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  PlanDocument   │    │    PlanView     │    │    Markdown     │
//! │   (validated)   │───▶│   (computed)    │───▶│    (terminal)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (Timeline, Dependencies)
//! - [`datetime`]: Short date formatting
//! - [`models`]: Display implementations for domain models
//! - [`status`]: Success and error notifications
//! - [`views`]: Display implementations for view models
//!
//! ## Usage Examples
//!
//! ```rust
//! use planview_core::{display::Notification, validate::parse_plan};
//!
//! let plan = parse_plan(r#"{
//!     "goal": "Ship it",
//!     "total_duration": "2 days",
//!     "start_date": "2025-03-05",
//!     "end_date": "2025-03-06",
//!     "phases": [{"phase": "Deployment", "tasks": [{
//!         "task_name": "Deploy to Production",
//!         "description": "Launch the application",
//!         "duration": "2 days",
//!         "start_date": "2025-03-05",
//!         "end_date": "2025-03-06",
//!         "dependencies": [],
//!         "priority": "High"
//!     }]}],
//!     "summary": {"milestones": [], "remarks": "Go."}
//! }"#).unwrap();
//!
//! let output = plan.to_string();
//! assert!(output.contains("# Ship it"));
//! assert!(output.contains("Mar 5, 2025 - Mar 6, 2025"));
//!
//! let done = Notification::success("Plan downloaded successfully!");
//! assert!(done.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;
pub mod views;

// Re-export commonly used types for convenience
pub use collections::{Dependencies, Timeline};
pub use datetime::ShortDate;
pub use status::Notification;
