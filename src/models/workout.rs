use super::{coords::Coords, workout_type::WorkoutType};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};

/// Number of trailing timestamp digits kept for an id.
const ID_DIGITS: usize = 10;

/// Variant payload: the user supplied metric plus the derived one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutKind {
    Running {
        /// steps/min
        cadence: f64,
        /// min/km
        pace: f64,
    },
    Cycling {
        /// meters
        #[serde(rename = "elevationGain")]
        elevation_gain: f64,
        /// km/h
        speed: f64,
    },
}

/// A single recorded exercise session.
///
/// Every field is fixed at construction except `click_count`. Deserializing a
/// persisted record restores it as a snapshot: nothing is validated or
/// recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    id: String,
    created_at: DateTime<Local>,
    coords: Coords,
    /// km
    distance: f64,
    /// minutes
    duration: f64,
    click_count: u32,
    description: String,
    #[serde(flatten)]
    kind: WorkoutKind,
}

/// Values submitted through the new-workout form.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutForm {
    pub workout_type: WorkoutType,
    pub distance: f64,
    pub duration: f64,
    pub cadence: Option<f64>,
    pub elevation_gain: Option<f64>,
}

fn all_finite(inputs: &[f64]) -> bool {
    inputs.iter().all(|v| v.is_finite())
}

fn all_positive(inputs: &[f64]) -> bool {
    inputs.iter().all(|v| *v > 0.0)
}

/// Id derived from the creation instant: the last ten digits of the
/// epoch-milliseconds value. Two workouts created in the same millisecond
/// share an id.
pub fn generate_id(created_at: &DateTime<Local>) -> String {
    let millis = created_at.timestamp_millis().to_string();
    let start = millis.len().saturating_sub(ID_DIGITS);
    millis[start..].to_string()
}

/// "Running on April 14"
pub fn describe(workout_type: WorkoutType, created_at: &DateTime<Local>) -> String {
    format!(
        "{} on {} {}",
        workout_type.label(),
        created_at.format("%B"),
        created_at.day()
    )
}

impl Workout {
    pub fn running(coords: Coords, distance: f64, duration: f64, cadence: f64) -> AppResult<Self> {
        Self::running_at(Local::now(), coords, distance, duration, cadence)
    }

    pub fn running_at(
        created_at: DateTime<Local>,
        coords: Coords,
        distance: f64,
        duration: f64,
        cadence: f64,
    ) -> AppResult<Self> {
        let inputs = [distance, duration, cadence];
        if !all_finite(&inputs) || !all_positive(&inputs) {
            return Err(AppError::invalid_input());
        }

        let pace = duration / distance;
        Ok(Self::build(
            created_at,
            coords,
            distance,
            duration,
            WorkoutKind::Running { cadence, pace },
        ))
    }

    pub fn cycling(
        coords: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> AppResult<Self> {
        Self::cycling_at(Local::now(), coords, distance, duration, elevation_gain)
    }

    /// Elevation gain only has to be finite: zero and negative values are
    /// accepted.
    pub fn cycling_at(
        created_at: DateTime<Local>,
        coords: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> AppResult<Self> {
        if !all_finite(&[distance, duration, elevation_gain]) || !all_positive(&[distance, duration])
        {
            return Err(AppError::invalid_input());
        }

        let speed = distance / (duration / 60.0);
        Ok(Self::build(
            created_at,
            coords,
            distance,
            duration,
            WorkoutKind::Cycling {
                elevation_gain,
                speed,
            },
        ))
    }

    /// Build the variant selected in the form. A missing variant metric is
    /// treated like any other invalid input.
    pub fn from_form(form: &WorkoutForm, coords: Coords) -> AppResult<Self> {
        Self::from_form_at(Local::now(), form, coords)
    }

    pub fn from_form_at(
        created_at: DateTime<Local>,
        form: &WorkoutForm,
        coords: Coords,
    ) -> AppResult<Self> {
        match form.workout_type {
            WorkoutType::Running => {
                let cadence = form.cadence.ok_or_else(AppError::invalid_input)?;
                Self::running_at(created_at, coords, form.distance, form.duration, cadence)
            }
            WorkoutType::Cycling => {
                let elevation = form.elevation_gain.ok_or_else(AppError::invalid_input)?;
                Self::cycling_at(created_at, coords, form.distance, form.duration, elevation)
            }
        }
    }

    fn build(
        created_at: DateTime<Local>,
        coords: Coords,
        distance: f64,
        duration: f64,
        kind: WorkoutKind,
    ) -> Self {
        let workout_type = match kind {
            WorkoutKind::Running { .. } => WorkoutType::Running,
            WorkoutKind::Cycling { .. } => WorkoutType::Cycling,
        };

        Self {
            id: generate_id(&created_at),
            description: describe(workout_type, &created_at),
            created_at,
            coords,
            distance,
            duration,
            click_count: 0,
            kind,
        }
    }

    /// Count one user interaction with this workout.
    pub fn register_interaction(&mut self) {
        self.click_count = self.click_count.saturating_add(1);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Local> {
        &self.created_at
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn click_count(&self) -> u32 {
        self.click_count
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &WorkoutKind {
        &self.kind
    }

    pub fn workout_type(&self) -> WorkoutType {
        match self.kind {
            WorkoutKind::Running { .. } => WorkoutType::Running,
            WorkoutKind::Cycling { .. } => WorkoutType::Cycling,
        }
    }

    pub fn pace(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Running { pace, .. } => Some(pace),
            WorkoutKind::Cycling { .. } => None,
        }
    }

    pub fn cadence(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Running { cadence, .. } => Some(cadence),
            WorkoutKind::Cycling { .. } => None,
        }
    }

    pub fn speed(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Cycling { speed, .. } => Some(speed),
            WorkoutKind::Running { .. } => None,
        }
    }

    pub fn elevation_gain(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Cycling { elevation_gain, .. } => Some(elevation_gain),
            WorkoutKind::Running { .. } => None,
        }
    }

    pub fn get_date_time(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}
