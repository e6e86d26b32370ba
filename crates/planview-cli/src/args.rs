use clap::{Parser, Subcommand};
use planview_core::client::builder::DEFAULT_BASE_URL;

use crate::cli::{GenerateArgs, IconArgs, ShowArgs, ValidateArgs};

/// Terminal viewer for generated task plans
///
/// planview asks a plan server to break a goal down into phases, tasks and
/// milestones, then renders the returned plan with its timeline, per-phase
/// durations and task dependencies. Plans saved as JSON can be rendered or
/// validated offline.
#[derive(Parser)]
#[command(version, about, name = "pv")]
pub struct Args {
    /// Base URL of the plan server
    #[arg(long, global = true, env = "PLANVIEW_SERVER_URL", default_value = DEFAULT_BASE_URL)]
    pub server_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 60)]
    pub timeout_secs: u64,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the planview CLI
///
/// - `generate`: request a new plan from the server and render it
/// - `show`: render a plan saved as JSON
/// - `validate`: check a saved plan without rendering it
/// - `status`: ask the server whether AI mode is available
/// - `icon`: look up the icon of a phase name
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a plan for a goal
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Render a plan JSON file
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Validate a plan JSON file
    #[command(alias = "v")]
    Validate(ValidateArgs),
    /// Show the plan server status
    Status,
    /// Print the icon for a phase name
    Icon(IconArgs),
}
