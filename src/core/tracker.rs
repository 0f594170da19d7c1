use crate::core::store::{DEFAULT_STORAGE_KEY, WorkoutStore};
use crate::db::storage::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::geolocation::Geolocator;
use crate::map::{
    DEFAULT_ZOOM, MapHandle, MapView, MarkerHandle, OSM_ATTRIBUTION, OSM_TILE_URL, PanOptions,
    PopupOptions,
};
use crate::models::coords::Coords;
use crate::models::workout::{Workout, WorkoutForm};
use crate::ui::workout_view::popup_content;
use chrono::{DateTime, Local};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerSettings {
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub storage_key: String,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            tile_url: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// Outcome of [`Tracker::start`].
#[derive(Debug)]
pub struct Startup {
    /// Workouts restored from the persistence backend.
    pub loaded: usize,
    /// Map centre, when the position request succeeded.
    pub center: Option<Coords>,
    /// Why the map could not be loaded.
    pub map_error: Option<AppError>,
}

/// The application: owns the workout store and drives the three injected
/// collaborators.
///
/// Everything runs on one thread. The map click handler shares the selected
/// position with the tracker through an `Rc<Cell<_>>`.
pub struct Tracker<M: MapView, G: Geolocator, S: KeyValueStore> {
    map: M,
    locator: G,
    storage: S,
    settings: TrackerSettings,
    store: WorkoutStore,
    map_handle: Option<MapHandle>,
    selected: Rc<Cell<Option<Coords>>>,
}

fn render_marker<M: MapView>(
    map: &mut M,
    handle: MapHandle,
    workout: &Workout,
) -> AppResult<MarkerHandle> {
    let marker = map.add_marker(handle, workout.coords())?;
    let options = PopupOptions::sticky(workout.workout_type().popup_class());
    map.bind_popup(marker, &popup_content(workout), &options)?;
    Ok(marker)
}

impl<M: MapView, G: Geolocator, S: KeyValueStore> Tracker<M, G, S> {
    pub fn new(map: M, locator: G, storage: S, settings: TrackerSettings) -> Self {
        let store = WorkoutStore::with_key(&settings.storage_key);
        Self {
            map,
            locator,
            storage,
            settings,
            store,
            map_handle: None,
            selected: Rc::new(Cell::new(None)),
        }
    }

    /// Restore persisted workouts. Returns how many were loaded.
    pub fn hydrate(&mut self) -> AppResult<usize> {
        let loaded = self.store.load_from(&self.storage)?;
        Ok(loaded.len())
    }

    /// Ask for the current position and, on success, load the map around it.
    pub fn locate(&mut self) -> AppResult<Coords> {
        let center = self.locator.current_position()?;
        self.load_map(center)?;
        Ok(center)
    }

    /// `hydrate` then `locate`. A geolocation failure leaves the map unloaded
    /// and is reported in the returned [`Startup`].
    pub fn start(&mut self) -> AppResult<Startup> {
        let loaded = self.hydrate()?;

        match self.locate() {
            Ok(center) => Ok(Startup {
                loaded,
                center: Some(center),
                map_error: None,
            }),
            Err(e @ AppError::Geolocation(_)) => Ok(Startup {
                loaded,
                center: None,
                map_error: Some(e),
            }),
            Err(e) => Err(e),
        }
    }

    fn load_map(&mut self, center: Coords) -> AppResult<()> {
        let handle = self.map.create_map(center, self.settings.zoom)?;
        self.map
            .add_tile_layer(handle, &self.settings.tile_url, &self.settings.attribution)?;

        let selected = Rc::clone(&self.selected);
        self.map
            .on_map_click(handle, Box::new(move |coords| selected.set(Some(coords))))?;

        // the store may have been hydrated before the map existed
        for workout in self.store.all() {
            render_marker(&mut self.map, handle, workout)?;
        }

        self.map_handle = Some(handle);
        Ok(())
    }

    /// Remember `coords` as the position of the next submitted workout.
    pub fn select_position(&mut self, coords: Coords) {
        self.selected.set(Some(coords));
    }

    pub fn selected_position(&self) -> Option<Coords> {
        self.selected.get()
    }

    /// Validate and record a submitted workout at the selected position.
    ///
    /// Invalid input or a failed save leaves the store, the map and the
    /// selection untouched.
    pub fn new_workout(&mut self, form: &WorkoutForm) -> AppResult<&Workout> {
        self.new_workout_at(Local::now(), form)
    }

    pub fn new_workout_at(
        &mut self,
        created_at: DateTime<Local>,
        form: &WorkoutForm,
    ) -> AppResult<&Workout> {
        let coords = self.selected.get().ok_or(AppError::NoPositionSelected)?;
        let workout = Workout::from_form_at(created_at, form, coords)?;

        // persist first: a failed write leaves memory and the map as they were
        let mut next = self.store.clone();
        next.add(workout);
        next.save_to(&mut self.storage)?;
        self.store = next;
        self.selected.set(None);

        let workout = self
            .store
            .all()
            .last()
            .ok_or_else(|| AppError::Other("workout not stored".into()))?;

        if let Some(handle) = self.map_handle {
            render_marker(&mut self.map, handle, workout)?;
        }

        Ok(workout)
    }

    /// Pan the map to the workout with `id`. Returns `false` (and does
    /// nothing) when the map is not loaded or the id is unknown.
    pub fn move_to_popup(&mut self, id: &str) -> AppResult<bool> {
        let Some(handle) = self.map_handle else {
            return Ok(false);
        };
        let Some(workout) = self.store.find_by_id(id) else {
            return Ok(false);
        };

        self.map.set_view(
            handle,
            workout.coords(),
            self.settings.zoom,
            &PanOptions::default(),
        )?;
        Ok(true)
    }

    /// Delete the persisted snapshot. The in-memory state is stale afterwards
    /// and the tracker should be rebuilt.
    pub fn reset(&mut self) -> AppResult<()> {
        self.store.reset(&mut self.storage)
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn workouts(&self) -> &[Workout] {
        self.store.all()
    }

    pub fn is_map_loaded(&self) -> bool {
        self.map_handle.is_some()
    }

    pub fn map_handle(&self) -> Option<MapHandle> {
        self.map_handle
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn settings(&self) -> &TrackerSettings {
        &self.settings
    }
}
