//! rOvertime library root.
//! Exposes the CLI parser, the high-level run() function and the overtime
//! pipeline (loader, accrual, compensation cap).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use log::debug;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Some(Commands::Init) => cli::commands::init::handle(cli),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
        Some(cmd @ Commands::Year { .. }) => cli::commands::year::handle(cmd, cfg),
        Some(cmd @ Commands::Export { .. }) => cli::commands::export::handle(cmd, cfg),
        Some(Commands::Summary) | None => cli::commands::summary::handle(cfg),
    }
}

/// Apply the global `--source` / `--cap` overrides on top of the loaded config.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) -> AppResult<()> {
    if let Some(source) = &cli.source {
        cfg.stempel_file = source.clone();
    }
    if let Some(cap) = cli.cap {
        cfg.monthly_compensated = cap;
    }
    cfg.validate()
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    apply_overrides(&cli, &mut cfg)?;
    debug!("config={cfg:?}");

    dispatch(&cli, &cfg)
}

/// Extra line printed under an error, if the error has an obvious fix.
pub fn hint_for(err: &AppError) -> Option<String> {
    match err {
        AppError::SourceMissing(_) => Some(format!(
            "Configure the StempelUhrDataBackup.csv path in {} (stempel_file), \
             or pass --source / set {}",
            Config::config_file().display(),
            config::ENV_FILE_PATH
        )),
        e if e.is_parse_error() => Some(
            "Every row needs 'YYYY-MM-DD HH:MM:SS' start/end timestamps and numeric \
             break, time and required-hours columns"
                .to_string(),
        ),
        _ => None,
    }
}
