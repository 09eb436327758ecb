use rampsim::{ScenarioConfig, Scenario, Summary};
use rampsim::{bench_dt_curve, halving_steps, write_csv};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "rampsim", about = "Slide a body down a ramp and report where it stops")]
struct Args {
    /// Scenario YAML file
    #[arg(short, long, default_value = "scenarios/default.yaml")]
    file: PathBuf,

    /// Write the velocity/position/time series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Override the body mass (kg)
    #[arg(long)]
    mass: Option<f64>,

    /// Override the slope length (in the scenario's unit)
    #[arg(long)]
    ramp_length: Option<f64>,

    /// Time the scenario over a range of step sizes instead of a single run
    #[arg(long)]
    bench: bool,

    /// Logging verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

// load here to keep main clean
fn load_scenario_from_yaml(path: &Path) -> Result<ScenarioConfig> {
    let file = File::open(path).with_context(|| format!("failed to open scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", path.display()))?;
    Ok(cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = args.log_level.parse::<Level>().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to init logging")?;

    let mut cfg = load_scenario_from_yaml(&args.file)?;
    if let Some(m) = args.mass {
        cfg.parameters.mass = Some(m);
    }
    if let Some(len) = args.ramp_length {
        cfg.ramp.length = len;
    }

    let scenario = Scenario::build(&cfg)?;
    info!(angle = scenario.ramp_angle, length = scenario.ramp_length, "scenario loaded");

    if args.bench {
        let coarse = scenario.engine.parameters().dt * 16.0;
        bench_dt_curve(&scenario, &halving_steps(coarse, 8));
        return Ok(());
    }

    let traj = scenario.run()?;
    println!("{}", Summary::new(&scenario, &traj));

    if let Some(path) = args.csv {
        let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        write_csv(BufWriter::new(file), &traj.series)?;
        info!(path = %path.display(), samples = traj.series.len(), "series written");
    }

    Ok(())
}
