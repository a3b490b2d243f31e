//! rTurnos library root.
//! Exposes the scheduling engine (grid, store, day view), the CLI parser and
//! the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Check => cli::commands::check::handle(cfg),
        Commands::Slots { .. } => cli::commands::slots::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the configured filter.
fn init_logging(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_filter.as_str()));

    // a second init (tests driving run() twice) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom) = &cli.data {
        cfg.appointments_file = custom.clone();
    }

    init_logging(&cfg);
    tracing::debug!(appointments_file = %cfg.appointments_file, "configuration loaded");

    dispatch(&cli, &cfg)
}
