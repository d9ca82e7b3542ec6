use gasbox::config::SimConfig;
use gasbox::core::{FluctuationSample, Simulation, ThermoSummary};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Headless driver: runs a gas-box scenario to completion and reports.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML scenario file; unspecified keys use built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the particle count
    #[arg(short = 'n', long)]
    particles: Option<usize>,

    /// Override the maximum tick count
    #[arg(short = 't', long)]
    max_ticks: Option<u64>,

    /// Override the time step
    #[arg(long)]
    dt: Option<f64>,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the fluctuation series as CSV (tick,magnitude)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open scenario {}", path.display()))?;
            serde_yaml::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse scenario {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(n) = args.particles {
        config.num_particles = n;
    }
    if let Some(t) = args.max_ticks {
        config.max_ticks = t;
    }
    if let Some(dt) = args.dt {
        config.dt = dt;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn print_summary(t: &ThermoSummary) {
    println!("---------------------------------------");
    println!("Initial fluctuation: {:.2}", t.initial_fluctuation);
    println!("Mean kinetic energy per particle: {:.2e} J", t.mean_kinetic_energy);
    println!("Total kinetic energy: {:.2e} J", t.total_kinetic_energy);
    println!("Pressure: {:.2e} Pa", t.pressure);
    println!("Temperature: {:.2e} K", t.temperature);
    println!("---------------------------------------");
}

fn write_csv(path: &Path, series: &[FluctuationSample]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    writeln!(w, "tick,magnitude")?;
    for s in series {
        writeln!(w, "{},{}", s.tick, s.magnitude)?;
    }
    w.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&args)?;
    let mut sim = Simulation::new(config).context("invalid simulation configuration")?;
    print_summary(sim.thermo());

    let ticks = sim.run_to_completion();
    println!("Maximum tick count reached after {ticks} ticks.");
    if let Some(last) = sim.latest_fluctuation() {
        println!("Final fluctuation: {:.2}", last.magnitude);
    }
    println!("Mean fluctuation: {:.3}", sim.mean_fluctuation());

    if let Some(path) = &args.output {
        write_csv(path, sim.fluctuations())?;
        println!("Fluctuation series written to {}", path.display());
    }
    Ok(())
}
