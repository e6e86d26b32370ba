//! Parameter structures for planview operations
//!
//! This module contains parameter structures shared between the core library
//! and its interfaces. They carry no framework-specific derives: the CLI
//! defines its own clap argument structs and converts them into these with
//! `From` implementations.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  Client/State   │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Parameters for requesting a new plan.
///
/// Serialized as-is for the body of `POST /api/generate-plan`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratePlan {
    /// Free-text goal to plan for
    pub goal: String,
}

impl GeneratePlan {
    /// Create generation parameters for a goal.
    pub fn new(goal: impl Into<String>) -> Self {
        Self { goal: goal.into() }
    }

    /// The goal with surrounding whitespace removed.
    pub fn trimmed(&self) -> Self {
        Self {
            goal: self.goal.trim().to_string(),
        }
    }
}

/// Parameters for loading a plan document from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadPlan {
    /// Path of the JSON file
    pub path: PathBuf,
}

/// Parameters for downloading the current plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadPlan {
    /// Target directory; defaults to `$XDG_DATA_HOME/planview/exports`
    pub output_dir: Option<PathBuf>,
}
