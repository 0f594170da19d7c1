//! rWorkouts library root.
//! Exposes the workout model and store, the tracker with its collaborators,
//! the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod geolocation;
pub mod map;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(cli, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, cfg),
        Commands::Show { .. } => cli::commands::show::handle(cli, cfg),
        Commands::Map => cli::commands::map::handle(cli, cfg),
        Commands::Reset { .. } => cli::commands::reset::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // --db overrides the configured database
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
