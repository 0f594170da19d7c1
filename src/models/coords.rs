use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A (latitude, longitude) pair.
///
/// Persisted as a two element JSON array `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parse and validate a CLI value such as `40.7,-74.0`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let (lat_s, lng_s) = s
            .split_once(',')
            .ok_or_else(|| AppError::InvalidCoords(format!("'{}' (expected LAT,LNG)", s)))?;

        let lat: f64 = lat_s
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidCoords(format!("invalid latitude '{}'", lat_s.trim())))?;
        let lng: f64 = lng_s
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidCoords(format!("invalid longitude '{}'", lng_s.trim())))?;

        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::InvalidCoords(format!(
                "latitude {} out of range [-90, 90]",
                lat
            )));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::InvalidCoords(format!(
                "longitude {} out of range [-180, 180]",
                lng
            )));
        }

        Ok(Self { lat, lng })
    }

    /// Link to the same spot on openstreetmap.org.
    pub fn osm_url(&self, zoom: u8) -> String {
        format!(
            "https://www.openstreetmap.org/#map={}/{}/{}",
            zoom, self.lat, self.lng
        )
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(c: Coords) -> Self {
        [c.lat, c.lng]
    }
}

impl FromStr for Coords {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coords::parse(s)
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}
