use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::workout::Workout;
use crate::ui::messages::info;
use crate::ui::workout_view::{render_entry, render_table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { details, kind } = &cli.command {
        let mut tracker = open_tracker(cli, cfg)?;
        tracker.hydrate()?;

        let workouts: Vec<Workout> = tracker
            .workouts()
            .iter()
            .filter(|w| kind.is_none_or(|k| w.workout_type() == k))
            .cloned()
            .collect();

        if workouts.is_empty() {
            info("No workouts recorded yet.");
            return Ok(());
        }

        if *details {
            // newest first, like the sidebar list
            for w in workouts.iter().rev() {
                println!("{}\n", render_entry(w));
            }
        } else {
            print!("{}", render_table(&workouts));
        }

        println!("Total: {} workout(s)", workouts.len());
    }
    Ok(())
}
