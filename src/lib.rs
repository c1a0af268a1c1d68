//! rMonitorias library root.
//! Exposes the CLI parser, the high-level run() function and the pipeline
//! stages (normalizer, streak detector, eligibility projector, allocator).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Env var holding the tracing filter, e.g. `RMONITORIAS_LOG=debug`.
pub const LOG_ENV: &str = "RMONITORIAS_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => {
            let path = Config::resolve_path(cli.config.as_deref());
            cli::commands::config::handle(&cli.command, cfg, &path)
        }
        Commands::Streaks { .. } => cli::commands::streaks::handle(&cli.command, cfg),
        Commands::Allocate { .. } => cli::commands::allocate::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr so stdout stays clean for tables.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` writes the file, so it must not fail on a broken one
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(cli.config.as_deref())?,
    };

    dispatch(&cli, &cfg)
}
