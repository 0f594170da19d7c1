use crate::core::tracker::Tracker;
use crate::db::storage::KeyValueStore;
use crate::errors::AppResult;
use crate::geolocation::Geolocator;
use crate::map::MapView;

pub struct ResetLogic;

impl ResetLogic {
    /// Drop every persisted workout. Returns how many were stored.
    pub fn apply<M: MapView, G: Geolocator, S: KeyValueStore>(
        tracker: &mut Tracker<M, G, S>,
    ) -> AppResult<usize> {
        let stored = tracker.hydrate()?;
        tracker.reset()?;
        Ok(stored)
    }
}
