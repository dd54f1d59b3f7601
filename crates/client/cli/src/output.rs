//! Human-readable and JSON renderings of a finished run.
use anyhow::Result;
use chase_core::Point;
use chase_runtime::{RunSummary, Simulation};
use serde::Serialize;

#[derive(Serialize)]
struct GhostLine<'a> {
    name: &'a str,
    personality: &'a str,
    position: Point,
    speed: f64,
}

#[derive(Serialize)]
struct RunOutput<'a> {
    seed: u64,
    level: u32,
    summary: &'a RunSummary,
    player: Point,
    pellets_left: usize,
    ghosts: Vec<GhostLine<'a>>,
    digest: String,
}

fn run_output<'a>(sim: &'a Simulation, summary: &'a RunSummary) -> RunOutput<'a> {
    let ghosts = sim
        .state()
        .ghosts
        .iter()
        .enumerate()
        .map(|(index, ghost)| GhostLine {
            name: sim.ghost_name(index).unwrap_or("?"),
            personality: ghost.personality.as_ref(),
            position: ghost.position,
            speed: ghost.speed,
        })
        .collect();

    RunOutput {
        seed: sim.seed(),
        level: sim.level_number(),
        summary,
        player: sim.state().player.position,
        pellets_left: sim.state().pellets.len(),
        ghosts,
        digest: hex::encode(sim.state().digest()),
    }
}

pub fn print_json(sim: &Simulation, summary: &RunSummary) -> Result<()> {
    println!("{}", serde_json::to_string(&run_output(sim, summary))?);
    Ok(())
}

pub fn print_text(sim: &Simulation, summary: &RunSummary) {
    let out = run_output(sim, summary);

    println!("level {} (seed {})", out.level, out.seed);
    println!(
        "  ticks {}  moves {}  stalls {}  contact ticks {}",
        summary.ticks, summary.moves, summary.stalls, summary.contact_ticks
    );
    println!(
        "  score {}  pellets eaten {}  left {}  levels cleared {}",
        summary.score, summary.pellets_eaten, out.pellets_left, summary.levels_cleared
    );
    match summary.first_contact {
        Some(tick) => println!("  first contact at tick {tick}"),
        None => println!("  no contact"),
    }
    println!("  player {}", out.player);
    for ghost in &out.ghosts {
        println!(
            "  {:<8} {:<7} {} speed {:.2}",
            ghost.name, ghost.personality, ghost.position, ghost.speed
        );
    }
    println!("  digest {}", out.digest);
}
