#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Headless command-line runner for Swarm Survival.
//!
//! Drives a seeded run with a simple autopilot standing in for the player and
//! prints an end-of-run report.

mod autopilot;
mod report;

use std::{fs, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use swarm_survival_core::{Command, FrameInput, Tuning};
use swarm_survival_simulation::{apply, query, Simulation};
use swarm_survival_system_analytics::summarize;

use report::Report;

#[derive(Parser, Debug)]
#[command(
    name = "swarm-survival",
    version,
    about = "Run a headless Swarm Survival simulation"
)]
struct Cli {
    /// Simulated seconds to run before stopping.
    #[arg(long, default_value_t = 300)]
    seconds: u32,

    /// Seed for every random stream of the run.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// TOML file overriding parts of the default tuning.
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=1000))]
    fps: u32,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

/// Entry point for the Swarm Survival command-line interface.
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let tuning = load_tuning(cli.tuning.as_ref())?;
    let mut simulation =
        Simulation::new(tuning, cli.seed).context("tuning cannot drive a run")?;
    tracing::info!(seed = cli.seed, seconds = cli.seconds, fps = cli.fps, "starting run");

    run(&mut simulation, &cli);

    let report = Report {
        seed: cli.seed,
        died: query::is_over(&simulation),
        level: query::level(&simulation),
        summary: summarize(query::run_stats(&simulation)),
    };
    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{json}");
    } else {
        print!("{report}");
    }
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read tuning file `{}`", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse tuning file `{}`", path.display()))
}

fn run(simulation: &mut Simulation, cli: &Cli) {
    let dt = Duration::from_secs_f64(1.0 / f64::from(cli.fps));
    let frames = u64::from(cli.seconds) * u64::from(cli.fps);
    let mut events = Vec::new();

    for _ in 0..frames {
        events.clear();
        let movement = autopilot::steer(query::world(simulation));
        apply(
            simulation,
            Command::Tick {
                dt,
                input: FrameInput {
                    movement,
                    viewport: None,
                },
            },
            &mut events,
        );
        if query::pending_offer(simulation).is_some() {
            apply(simulation, Command::ChooseUpgrade { slot: 0 }, &mut events);
        }
        if query::is_over(simulation) {
            tracing::info!(elapsed = ?query::elapsed(simulation), "run ended");
            break;
        }
    }
}
