//! Geolocation collaborator.
//!
//! A position request completes exactly once, either with coordinates or with
//! a failure; the `Result` returned by [`Geolocator::current_position`] is that
//! single outcome.

use crate::errors::{AppError, AppResult};
use crate::models::coords::Coords;

pub trait Geolocator {
    fn current_position(&self) -> AppResult<Coords>;
}

/// Reports a position known in advance (`--position` or the `home_position`
/// config key). Without one every request fails.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedLocator {
    position: Option<Coords>,
}

impl FixedLocator {
    pub fn new(position: Option<Coords>) -> Self {
        Self { position }
    }

    pub fn at(coords: Coords) -> Self {
        Self::new(Some(coords))
    }

    pub fn unavailable() -> Self {
        Self::new(None)
    }
}

impl Geolocator for FixedLocator {
    fn current_position(&self) -> AppResult<Coords> {
        self.position.ok_or_else(|| {
            AppError::Geolocation(
                "no position available (use --position LAT,LNG or set home_position)".into(),
            )
        })
    }
}
