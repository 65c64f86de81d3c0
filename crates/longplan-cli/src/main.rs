//! Longplan CLI Application
//!
//! Command-line front end for the longplan goal planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use longplan_core::{PlanAction, PlanStoreBuilder};
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_file,
        no_color,
        command,
    } = Args::parse();

    let store = PlanStoreBuilder::new()
        .with_data_file(data_file)
        .build()
        .context("Failed to initialize plan store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Longplan started with {}", store.path().display());

    let cli = Cli::new(store, renderer);
    match command {
        Some(New(args)) => cli.new_plan(&args),
        Some(Show) | None => cli.show(),
        Some(Plan) => cli.show_plan(),
        Some(Done) => cli.act(PlanAction::Complete),
        Some(Skip) => cli.act(PlanAction::Skip),
        Some(Progress) => cli.progress(),
        Some(Reset) => cli.reset(),
        Some(Categorize(args)) => cli.categorize(&args),
    }
}
