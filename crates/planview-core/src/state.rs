//! Holder for the single current plan.
//!
//! The rendering shell owns one [`PlanState`] and passes it by reference. A
//! plan is only ever replaced wholesale or cleared; nothing mutates a plan in
//! place once it is held.

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use log::{debug, info};

use crate::{
    error::{IoResultExt, PlanError, Result},
    models::PlanDocument,
    params::DownloadPlan,
};

/// Owner of the current plan, if any.
#[derive(Debug, Default)]
pub struct PlanState {
    current: Option<PlanDocument>,
}

impl PlanState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current plan.
    pub fn current(&self) -> Option<&PlanDocument> {
        self.current.as_ref()
    }

    /// Whether no plan is held.
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Replace the current plan, returning the previous one.
    pub fn replace(&mut self, plan: PlanDocument) -> Option<PlanDocument> {
        debug!("Replacing current plan with '{}'", plan.goal);
        self.current.replace(plan)
    }

    /// Clear the current plan, returning it.
    pub fn reset(&mut self) -> Option<PlanDocument> {
        debug!("Resetting current plan");
        self.current.take()
    }

    /// Serialize the current plan as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::NoPlan` when no plan is held.
    pub fn export_json(&self) -> Result<String> {
        let plan = self.current.as_ref().ok_or(PlanError::NoPlan)?;
        Ok(serde_json::to_string_pretty(plan)?)
    }

    /// Write the current plan to `task-plan-<epoch-ms>.json`.
    ///
    /// Without an output directory the file is placed under
    /// `$XDG_DATA_HOME/planview/exports`.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::NoPlan` when no plan is held, and
    /// `PlanError::FileSystem` or `PlanError::XdgDirectory` when the file
    /// cannot be written.
    pub fn download(&self, params: &DownloadPlan) -> Result<PathBuf> {
        let json = self.export_json()?;
        let file_name = export_file_name(Timestamp::now());

        let path = match &params.output_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir).fs_context(dir)?;
                dir.join(&file_name)
            }
            None => default_export_path(&file_name)?,
        };

        write_export(&path, &json)?;
        Ok(path)
    }
}

/// File name of a plan exported at the given instant.
///
/// ```rust
/// use jiff::Timestamp;
/// use planview_core::state::export_file_name;
///
/// let at = Timestamp::from_millisecond(1_735_689_600_123).unwrap();
/// assert_eq!(export_file_name(at), "task-plan-1735689600123.json");
/// ```
pub fn export_file_name(at: Timestamp) -> String {
    format!("task-plan-{}.json", at.as_millisecond())
}

fn default_export_path(file_name: &str) -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix("planview")
        .place_data_file(Path::new("exports").join(file_name))
        .map_err(|e| PlanError::XdgDirectory(e.to_string()))
}

fn write_export(path: &Path, json: &str) -> Result<()> {
    std::fs::write(path, json).fs_context(path)?;
    info!("Plan exported to {}", path.display());
    Ok(())
}
