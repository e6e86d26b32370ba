//! Command handlers and their clap argument structures
//!
//! Argument structs carry the clap attributes and convert into the core
//! parameter types, so the core crate stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Client / Validator / State
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use log::{debug, info, warn};
use planview_core::{
    metrics, validate::load_plan, view::plural, DownloadPlan, GeneratePlan, LoadPlan,
    Notification, PlanClient, PlanClientBuilder, PlanError, PlanState, PlanView,
};

use crate::renderer::TerminalRenderer;

const EMPTY_GOAL: &str = "Please enter a goal";
const GENERATE_FAILED: &str = "Failed to generate plan. Please try again.";

#[derive(Args)]
pub struct GenerateArgs {
    /// Goal to plan for, e.g. "Launch a blog in 2 weeks"
    #[arg(required = true)]
    pub goal: Vec<String>,
    #[command(flatten)]
    pub download: DownloadArgs,
}

impl From<&GenerateArgs> for GeneratePlan {
    fn from(val: &GenerateArgs) -> Self {
        GeneratePlan::new(val.goal.join(" "))
    }
}

#[derive(Args)]
pub struct ShowArgs {
    /// Path to a plan JSON file
    pub file: PathBuf,
    #[command(flatten)]
    pub download: DownloadArgs,
}

impl From<&ShowArgs> for LoadPlan {
    fn from(val: &ShowArgs) -> Self {
        LoadPlan {
            path: val.file.clone(),
        }
    }
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to a plan JSON file
    pub file: PathBuf,
}

impl From<&ValidateArgs> for LoadPlan {
    fn from(val: &ValidateArgs) -> Self {
        LoadPlan {
            path: val.file.clone(),
        }
    }
}

#[derive(Args)]
pub struct IconArgs {
    /// Phase name, matched exactly
    pub phase: String,
}

/// Export options shared by commands that produce a plan.
#[derive(Args)]
pub struct DownloadArgs {
    /// Save the plan as JSON after rendering it
    #[arg(short, long)]
    pub download: bool,

    /// Directory for the exported file. Defaults to
    /// $XDG_DATA_HOME/planview/exports
    #[arg(long, requires = "download")]
    pub output_dir: Option<PathBuf>,
}

impl From<&DownloadArgs> for DownloadPlan {
    fn from(val: &DownloadArgs) -> Self {
        DownloadPlan {
            output_dir: val.output_dir.clone(),
        }
    }
}

/// Runs commands against a plan server and holds the current plan.
///
/// The HTTP client is only built by commands that contact the server, so a
/// bad server URL never blocks offline commands.
pub struct Cli {
    client_builder: PlanClientBuilder,
    renderer: TerminalRenderer,
    state: PlanState,
}

impl Cli {
    pub fn new(client_builder: PlanClientBuilder, renderer: TerminalRenderer) -> Self {
        Self {
            client_builder,
            renderer,
            state: PlanState::new(),
        }
    }

    fn client(&self) -> Result<PlanClient> {
        self.client_builder
            .clone()
            .build()
            .context("Failed to initialize plan client")
    }

    /// Requests a plan for the goal, renders it and optionally saves it.
    pub async fn generate(&mut self, args: &GenerateArgs) -> Result<()> {
        let params = GeneratePlan::from(args);
        let client = self.client()?;
        info!("Requesting plan from {}", client.base_url());

        match client.generate_plan(&params).await {
            Ok(plan) => {
                self.state.replace(plan);
            }
            Err(e @ PlanError::InvalidInput { .. }) => {
                self.renderer.notify(&Notification::error(EMPTY_GOAL))?;
                return Err(e).context(EMPTY_GOAL);
            }
            Err(e) => {
                if e.is_transient() {
                    warn!("Plan server request failed: {e}");
                } else {
                    warn!("Plan server answered with an unusable plan: {e}");
                }
                self.renderer.notify(&Notification::error(GENERATE_FAILED))?;
                return Err(e).context(GENERATE_FAILED);
            }
        }

        self.render_current()?;
        self.download_if_requested(&args.download)
    }

    /// Loads a saved plan, renders it and optionally re-exports it.
    pub fn show(&mut self, args: &ShowArgs) -> Result<()> {
        let params = LoadPlan::from(args);
        let plan = load_plan(&params)
            .with_context(|| format!("Failed to load plan from {}", params.path.display()))?;
        self.state.replace(plan);

        self.render_current()?;
        self.download_if_requested(&args.download)
    }

    /// Checks a saved plan and reports its shape without rendering it.
    pub fn validate(&self, args: &ValidateArgs) -> Result<()> {
        let params = LoadPlan::from(args);
        match load_plan(&params) {
            Ok(plan) => {
                let view = PlanView::from_document(&plan);
                let unresolved = view.unresolved_dependencies().len();
                let mut message = format!(
                    "Plan is valid: {}, {}",
                    plural(view.phase_count() as i64, "phase"),
                    plural(plan.tasks().count() as i64, "task"),
                );
                if unresolved > 0 {
                    message.push_str(&format!(
                        " ({})",
                        plural(unresolved as i64, "unresolved dependency name")
                    ));
                }
                self.renderer.notify(&Notification::success(message))
            }
            Err(e) => {
                self.renderer.notify(&Notification::error(e.to_string()))?;
                Err(e).context(format!("{} is not a valid plan", params.path.display()))
            }
        }
    }

    /// Reports whether the server runs with AI generation enabled.
    pub async fn status(&self) -> Result<()> {
        let client = self.client()?;
        let status = client
            .status()
            .await
            .context("API status check failed")?;
        debug!("Server status: {status:?}");

        let mut markdown = format!("# Plan Server\n\n- URL: {}\n", client.base_url());
        if let Some(state) = &status.status {
            markdown.push_str(&format!("- Status: {state}\n"));
        }
        if let Some(version) = &status.version {
            markdown.push_str(&format!("- Version: {version}\n"));
        }
        self.renderer.render(&markdown)?;

        let notification = if status.google_ai {
            Notification::success("AI Enhanced Mode Active")
        } else {
            Notification::error("AI mode unavailable, plans use built-in templates")
        };
        self.renderer.notify(&notification)
    }

    pub fn icon(&self, args: &IconArgs) -> Result<()> {
        println!("{}", metrics::phase_icon(&args.phase));
        Ok(())
    }

    fn render_current(&self) -> Result<()> {
        let plan = self
            .state
            .current()
            .context("No plan has been loaded")?;
        let view = PlanView::from_document(plan);
        self.renderer.render(&view.to_string())
    }

    fn download_if_requested(&self, args: &DownloadArgs) -> Result<()> {
        if !args.download {
            return Ok(());
        }
        let path = self
            .state
            .download(&DownloadPlan::from(args))
            .context("Failed to download plan")?;
        self.renderer.notify(&Notification::success(format!(
            "Plan downloaded successfully! ({})",
            path.display()
        )))
    }
}
