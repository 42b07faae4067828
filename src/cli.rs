use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Aeolus next-day weather likelihood estimator.
#[derive(Parser)]
#[command(
    name = "aeolus",
    version,
    about = "Markov-chain next-day weather likelihood estimator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Rank tomorrow's likely weather given today's conditions.
    Predict(PredictArgs),
    /// Summarize the transition structure estimated from the observations.
    Inspect(InspectArgs),
}

/// Arguments for the `predict` subcommand.
#[derive(clap::Args)]
pub struct PredictArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "aeolus.toml")]
    pub config: PathBuf,

    /// Override observation data path from config.
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Today's levels as comma-separated values, e.g. "high,low,medium,low,low".
    /// Prompts interactively when omitted.
    #[arg(short, long)]
    pub today: Option<String>,

    /// Write the full report as JSON to this path.
    #[arg(short, long)]
    pub json: Option<PathBuf>,
}

/// Arguments for the `inspect` subcommand.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "aeolus.toml")]
    pub config: PathBuf,

    /// Override observation data path from config.
    #[arg(short, long)]
    pub data: Option<PathBuf>,
}
