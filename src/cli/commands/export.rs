use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = &cli.command
    {
        let mut tracker = open_tracker(cli, cfg)?;
        tracker.hydrate()?;

        let count = ExportLogic::export(tracker.workouts(), *format, file, *force)?;

        tracker.storage().audit(
            "export",
            file,
            &format!("{} workout(s) exported as {}", count, format.as_str()),
        );
    }
    Ok(())
}
