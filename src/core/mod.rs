pub mod add;
pub mod config;
pub mod export;
pub mod log;
pub mod reset;
pub mod store;
pub mod tracker;

pub use store::{StoreState, WorkoutStore};
pub use tracker::{Startup, Tracker, TrackerSettings};
