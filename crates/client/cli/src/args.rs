//! Command-line arguments. Flags override the `CHASE_*` environment.
use std::path::PathBuf;

use chase_runtime::{Heading, SimConfig};
use clap::Parser;

/// Headless ghost-pursuit simulator
#[derive(Debug, Parser)]
#[command(name = "chase")]
#[command(about = "Run the ghost pursuit engine without a screen", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Scenario directory with level.ron, roster.ron and optional config.toml
    #[arg(long)]
    pub level_dir: Option<PathBuf>,

    /// Ticks to simulate; clearing the pellets moves on to the next level
    #[arg(long)]
    pub ticks: Option<u64>,

    /// RNG seed (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Heading the player holds every tick (up, down, left, right)
    #[arg(long, value_parser = parse_heading)]
    pub heading: Option<Heading>,

    /// Scatter ghosts to random open spots before the first tick
    #[arg(long)]
    pub scatter: bool,

    /// Print the run summary as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Also write logs to the platform cache directory
    #[arg(long)]
    pub log_file: bool,
}

impl Cli {
    /// Environment settings with command-line overrides applied.
    pub fn sim_config(&self) -> SimConfig {
        let mut config = SimConfig::from_env();
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(ticks) = self.ticks {
            config.ticks = ticks;
        }
        if let Some(dir) = &self.level_dir {
            config.level_dir = Some(dir.clone());
        }
        config
    }
}

fn parse_heading(value: &str) -> Result<Heading, String> {
    value
        .parse()
        .map_err(|_| format!("unknown heading `{value}`; expected up, down, left or right"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse() {
        let cli = Cli::parse_from([
            "chase", "--seed", "7", "--ticks", "120", "--heading", "Left", "--json",
        ]);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.heading, Some(Heading::Left));
        assert!(cli.json);

        let config = cli.sim_config();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.ticks, 120);
    }

    #[test]
    fn bad_heading_is_rejected() {
        assert!(Cli::try_parse_from(["chase", "--heading", "north"]).is_err());
    }
}
