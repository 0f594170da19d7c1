use crate::core::tracker::Tracker;
use crate::db::storage::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::geolocation::Geolocator;
use crate::map::MapView;
use crate::models::coords::Coords;
use crate::models::workout::{Workout, WorkoutForm};
use crate::ui::messages::warning;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Start the tracker, pick the workout position and record the workout.
    ///
    /// The position is `at` when given (a click on the map), otherwise the
    /// current position. Without either the submission is refused.
    pub fn apply<M: MapView, G: Geolocator, S: KeyValueStore>(
        tracker: &mut Tracker<M, G, S>,
        form: &WorkoutForm,
        at: Option<Coords>,
    ) -> AppResult<Workout> {
        let startup = tracker.start()?;

        let position = match (at, startup.center) {
            (Some(clicked), _) => clicked,
            (None, Some(center)) => center,
            (None, None) => {
                return Err(startup.map_error.unwrap_or(AppError::NoPositionSelected));
            }
        };

        tracker.select_position(position);
        let workout = tracker.new_workout(form)?.clone();

        if let Some(e) = &startup.map_error {
            warning(format!("{} (workout saved without a map marker)", e));
        }

        Ok(workout)
    }
}
