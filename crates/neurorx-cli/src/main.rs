//! NeuroRx — Pediatric neuro-oncology drug repurposing explorer.
//! Entry point for the `neurorx` binary.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use neurorx_catalog::Catalog;
use tracing_subscriber::EnvFilter;

use commands::{App, DetailArgs, ExposureArgs, ModelArgs, RankArgs, ReadinessArgs};

#[derive(Parser)]
#[command(name = "neurorx", version, about = "Rank and model repurposed drugs for pediatric brain tumors")]
#[command(propagate_version = true)]
struct Cli {
    /// Catalog file (.yaml, .yml or .json); overrides the configured path
    #[arg(long, global = true, env = "NEURORX_CATALOG")]
    catalog: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank candidates for a query
    Rank(RankArgs),
    /// Readiness score, tier and rationale for one drug
    Readiness(ReadinessArgs),
    /// Oral, CED and FUS exposure curves
    Exposure(ExposureArgs),
    /// Model one delivery scenario, optionally against a second infusion length
    Model(ModelArgs),
    /// Everything known about one drug
    Detail(DetailArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the command output
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("neurorx=debug,info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = config::Config::load()?;
    let catalog = match cli.catalog.as_ref().or(config.catalog.path.as_ref()) {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::bundled().context("loading bundled catalog")?,
    };
    let app = App { config, catalog };

    let output = match cli.command {
        Commands::Rank(args) => commands::rank_command(&app, args, cli.json),
        Commands::Readiness(args) => commands::readiness_command(&app, args, cli.json),
        Commands::Exposure(args) => commands::exposure_command(&app, args, cli.json),
        Commands::Model(args) => commands::model_command(&app, args, cli.json),
        Commands::Detail(args) => commands::detail_command(&app, args, cli.json),
    }?;
    print!("{output}");
    Ok(())
}
