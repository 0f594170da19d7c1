pub mod add;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod map;
pub mod reset;
pub mod show;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::tracker::Tracker;
use crate::db::storage::SqliteStorage;
use crate::errors::AppResult;
use crate::geolocation::FixedLocator;
use crate::map::TerminalMap;
use crate::models::coords::Coords;
use std::io::Stdout;

pub type CliTracker = Tracker<TerminalMap<Stdout>, FixedLocator, SqliteStorage>;

/// Current position: `--position` wins over `home_position`.
pub(crate) fn current_position(cli: &Cli, cfg: &Config) -> AppResult<Option<Coords>> {
    match &cli.position {
        Some(p) => Ok(Some(Coords::parse(p)?)),
        None => cfg.home_coords(),
    }
}

/// Wire the tracker to the terminal map, the configured position and the
/// SQLite storage.
pub(crate) fn open_tracker(cli: &Cli, cfg: &Config) -> AppResult<CliTracker> {
    let locator = FixedLocator::new(current_position(cli, cfg)?);
    let storage = SqliteStorage::open(&cfg.database)?;
    Ok(Tracker::new(
        TerminalMap::stdout(),
        locator,
        storage,
        cfg.tracker_settings(),
    ))
}
