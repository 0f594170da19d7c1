pub mod coords;
pub mod workout;
pub mod workout_type;

pub use coords::Coords;
pub use workout::{Workout, WorkoutForm, WorkoutKind};
pub use workout_type::WorkoutType;
