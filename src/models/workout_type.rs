use clap::ValueEnum;
use serde::Serialize;

/// Discriminant of a workout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Running,
    Cycling,
}

impl WorkoutType {
    /// Persisted discriminant (`type` field of a record).
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    /// Capitalised name used in descriptions ("Running on April 14").
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutType::Running => "🏃‍♂️",
            WorkoutType::Cycling => "🚴",
        }
    }

    /// Class attached to the marker popup.
    pub fn popup_class(&self) -> String {
        format!("{}-popup", self.as_str())
    }

    pub fn is_running(&self) -> bool {
        matches!(self, WorkoutType::Running)
    }

    pub fn is_cycling(&self) -> bool {
        matches!(self, WorkoutType::Cycling)
    }
}
