pub mod messages;
pub mod workout_view;
