use nbody2d::{SimulationConfig, Scenario};
use nbody2d::run_2d;
use nbody2d::{bench_step, bench_collisions};

use bevy::app::AppExit;
use clap::Parser;
use anyhow::{bail, Result};

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// YAML settings file, defaults are used when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print step timings instead of opening a window
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_config(args: &Args) -> Result<SimulationConfig> {
    match &args.file {
        Some(path) => SimulationConfig::load(path),
        None => Ok(SimulationConfig::default()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_step()?;
        bench_collisions();
        return Ok(());
    }

    let cfg = load_config(&args)?;
    let scenario = Scenario::build_scenario(&cfg)?;

    if let AppExit::Error(code) = run_2d(scenario, &cfg.window) {
        bail!("viewer exited with code {code}");
    }

    Ok(())
}
