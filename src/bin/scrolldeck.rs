//! Inspection CLI: evaluate a card-stack config without an embedder attached.

use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scrolldeck::{StackConfig, StackCurve, sweep};

#[derive(Parser, Debug)]
#[command(name = "scrolldeck", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate an even progress sweep and print one JSON record per step.
    Sweep(SweepArgs),
    /// Validate a config JSON file.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Config JSON; omit to use the built-in defaults.
    #[arg(long = "config")]
    config_path: Option<PathBuf>,

    /// Card count for the built-in defaults (ignored with --config).
    #[arg(long, default_value_t = 3)]
    items: usize,

    /// Use the single-phase spring defaults instead of the three-phase ones
    /// (ignored with --config).
    #[arg(long)]
    spring: bool,

    /// Number of sweep steps across [0, 1].
    #[arg(long, default_value_t = 11)]
    steps: usize,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Config JSON to validate.
    #[arg(long = "config")]
    config_path: PathBuf,
}

#[derive(serde::Serialize)]
struct SweepRecord<'a> {
    progress: f64,
    states: &'a [scrolldeck::VisualState],
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Sweep(args) => run_sweep(args),
        Command::Check(args) => run_check(args),
    }
}

fn load_config(path: &PathBuf) -> anyhow::Result<StackConfig> {
    let file = File::open(path).with_context(|| format!("open config {}", path.display()))?;
    let config: StackConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse config {}", path.display()))?;
    Ok(config)
}

fn run_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let config = match &args.config_path {
        Some(path) => load_config(path)?,
        None if args.spring => StackConfig::spring_for_items(args.items),
        None => StackConfig::for_items(args.items),
    };

    for (progress, states) in sweep(&config, args.steps)? {
        let record = SweepRecord {
            progress,
            states: &states,
        };
        println!("{}", serde_json::to_string(&record)?);
    }
    Ok(())
}

fn run_check(args: CheckArgs) -> anyhow::Result<()> {
    let config = load_config(&args.config_path)?;
    config.validate()?;
    let curve = match config.curve {
        StackCurve::Phased { .. } => "phased",
        StackCurve::Spring { .. } => "spring",
    };
    println!("ok: {} items, {curve} curve", config.items);
    Ok(())
}
