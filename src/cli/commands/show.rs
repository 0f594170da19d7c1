use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::alert;

/// Move the map to a workout. Unknown ids are ignored.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = &cli.command {
        let mut tracker = open_tracker(cli, cfg)?;
        let startup = tracker.start()?;

        if let Some(e) = startup.map_error {
            alert(format!("{} 😢", e));
            return Ok(());
        }

        tracker.move_to_popup(id)?;
    }
    Ok(())
}
