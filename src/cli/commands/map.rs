use crate::cli::commands::open_tracker;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{alert, info};

/// Start the tracker: load the map around the current position with one
/// marker per workout.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut tracker = open_tracker(cli, cfg)?;
    let startup = tracker.start()?;

    if let Some(e) = startup.map_error {
        alert(format!("{} 😢", e));
    }

    info(format!("{} workout(s) loaded", startup.loaded));
    Ok(())
}
