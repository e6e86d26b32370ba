//! planview CLI application
//!
//! Command-line front end for a plan server: generates plans from a goal,
//! renders saved plans and exports them as JSON.

mod args;
mod cli;
mod renderer;

use std::time::Duration;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use planview_core::PlanClientBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        server_url,
        timeout_secs,
        no_color,
        command,
    } = Args::parse();

    let client_builder = PlanClientBuilder::new()
        .with_base_url(server_url)
        .with_timeout(Duration::from_secs(timeout_secs));

    let renderer = TerminalRenderer::new(!no_color);
    let mut cli = Cli::new(client_builder, renderer);

    info!("planview started");

    match command {
        Generate(args) => cli.generate(&args).await,
        Show(args) => cli.show(&args),
        Validate(args) => cli.validate(&args),
        Status => cli.status().await,
        Icon(args) => cli.icon(&args),
    }
}
