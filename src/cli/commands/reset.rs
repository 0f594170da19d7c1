use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::reset::ResetLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { force } = &cli.command {
        if !*force
            && !ask_confirmation("Delete ALL stored workouts? This action is irreversible.")
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut tracker = open_tracker(cli, cfg)?;
        let removed = ResetLogic::apply(&mut tracker)?;

        tracker.storage().audit(
            "reset",
            tracker.settings().storage_key.as_str(),
            &format!("{} workout(s) removed", removed),
        );

        success(format!("{} workout(s) removed.", removed));
    }

    Ok(())
}
