use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::models::coords::Coords;
use crate::models::workout::WorkoutForm;
use crate::ui::messages::success;
use crate::ui::workout_view::render_entry;

/// Record a new workout.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        kind,
        distance,
        duration,
        metric,
        at,
    } = &cli.command
    {
        //
        // 1. Parse the clicked position (optional)
        //
        let at = at.as_deref().map(Coords::parse).transpose()?;

        //
        // 2. Build the form: the third value is cadence or elevation gain
        //
        let form = WorkoutForm {
            workout_type: *kind,
            distance: *distance,
            duration: *duration,
            cadence: kind.is_running().then_some(*metric),
            elevation_gain: kind.is_cycling().then_some(*metric),
        };

        //
        // 3. Execute logic
        //
        let mut tracker = open_tracker(cli, cfg)?;
        let workout = AddLogic::apply(&mut tracker, &form, at)?;

        success(format!(
            "{} recorded (id {})",
            workout.description(),
            workout.id()
        ));
        println!("{}", render_entry(&workout));

        tracker.storage().audit(
            "add",
            workout.id(),
            &format!("{} at {}", workout.description(), workout.coords()),
        );
    }

    Ok(())
}
