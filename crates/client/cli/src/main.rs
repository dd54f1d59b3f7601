//! Headless client entry point.
mod args;
mod logging;
mod output;

use anyhow::{Context, Result};
use chase_content::ContentFactory;
use chase_runtime::Simulation;
use clap::Parser;

use args::Cli;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.sim_config();
    let seed = config.resolve_seed();

    let _guard = logging::setup_logging(cli.log_file, &format!("seed_{seed}"))?;

    let factory = match &config.level_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::classic(),
    };
    let scenario = factory
        .load_scenario()
        .with_context(|| format!("loading scenario from {}", factory.data_dir().display()))?;
    tracing::info!(dir = %factory.data_dir().display(), seed, "scenario loaded");

    let mut sim = Simulation::builder()
        .scenario(scenario)
        .seed(seed)
        .build()?;

    if cli.scatter {
        sim.respawn_ghosts();
    }

    let summary = sim.run_with(config.ticks, |_| cli.heading);
    if cli.json {
        output::print_json(&sim, &summary)?;
    } else {
        output::print_text(&sim, &summary);
    }

    Ok(())
}
