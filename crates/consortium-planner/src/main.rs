//! Consortium planner CLI
//!
//! Reads one period document, prints the period report as JSON.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use consortium_planner::{run_period, PeriodInput, PlannerConfig, PLANNER_VERSION};
use consortium_synergy::SearchMode;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Sequential,
    Parallel,
}

impl From<ModeArg> for SearchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sequential => SearchMode::Sequential,
            ModeArg::Parallel => SearchMode::Parallel,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "consortium-planner", version, about = "Plan a consortium period")]
struct Cli {
    /// Period input document (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Config file (TOML, JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search mode, overrides the configured one
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Pretty-print the report
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean JSON report
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    info!(version = PLANNER_VERSION, input = %cli.input.display(), "Starting planner");

    let mut config = PlannerConfig::load(cli.config.as_deref())?;
    if let Some(mode) = cli.mode {
        config.optimizer.search_mode = mode.into();
    }

    let input = PeriodInput::from_path(&cli.input)?;
    let report = run_period(&config, input)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("Failed to serialize period report")?;
    println!("{}", json);

    Ok(())
}
