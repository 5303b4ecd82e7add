//! rTracker library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher. No subcommand means `report`.
pub fn dispatch(command: Option<&Commands>, cfg: &Config) -> AppResult<()> {
    let report = Commands::Report;
    let cmd = command.unwrap_or(&report);

    match cmd {
        Commands::Init => commands::init::handle(cfg),
        Commands::Start { .. } => commands::start::handle(cmd, cfg),
        Commands::Close { .. } => commands::close::handle(cmd, cfg),
        Commands::Toggle { .. } => commands::toggle::handle(cmd, cfg),
        Commands::Truncate => commands::truncate::handle(cfg),
        Commands::Delete { .. } => commands::delete::handle(cmd, cfg),
        Commands::Report => commands::report::handle(cfg),
        Commands::Count { .. } => commands::count::handle(cmd, cfg),
        Commands::Time { .. } => commands::time::handle(cmd, cfg),
        Commands::Log { .. } => commands::log::handle(cmd, cfg),
        Commands::Config { .. } => commands::config::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // --db wins over the configuration file
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(cli.command.as_ref(), &cfg)
}
