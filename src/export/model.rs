use crate::models::workout::Workout;
use serde::Serialize;

/// One CSV row per workout. Variant columns are empty when they do not apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutExport {
    pub id: String,
    #[serde(rename = "type")]
    pub workout_type: String,
    pub created_at: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub distance_km: f64,
    pub duration_min: f64,
    pub cadence_spm: Option<f64>,
    pub pace_min_km: Option<f64>,
    pub elevation_gain_m: Option<f64>,
    pub speed_km_h: Option<f64>,
    pub click_count: u32,
}

impl From<&Workout> for WorkoutExport {
    fn from(w: &Workout) -> Self {
        let coords = w.coords();
        Self {
            id: w.id().to_string(),
            workout_type: w.workout_type().as_str().to_string(),
            created_at: w.created_at().to_rfc3339(),
            description: w.description().to_string(),
            lat: coords.lat,
            lng: coords.lng,
            distance_km: w.distance(),
            duration_min: w.duration(),
            cadence_spm: w.cadence(),
            pace_min_km: w.pace(),
            elevation_gain_m: w.elevation_gain(),
            speed_km_h: w.speed(),
            click_count: w.click_count(),
        }
    }
}
