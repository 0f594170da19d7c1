//! Map collaborator: the operations the tracker needs from a slippy-map
//! library (centre and zoom, tile layer, click events, markers with popups,
//! panning).

pub mod terminal;

pub use terminal::TerminalMap;

use crate::errors::AppResult;
use crate::models::coords::Coords;

/// Zoom level used when the map is created and when panning to a workout.
pub const DEFAULT_ZOOM: u8 = 13;

pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapHandle(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub usize);

/// Called with the clicked position.
pub type ClickHandler = Box<dyn FnMut(Coords)>;

#[derive(Debug, Clone, PartialEq)]
pub struct PopupOptions {
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
    pub class_name: String,
}

impl PopupOptions {
    /// Popups stay open until explicitly closed.
    pub fn sticky(class_name: impl Into<String>) -> Self {
        Self {
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
            class_name: class_name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanOptions {
    pub animate: bool,
    /// seconds
    pub duration: f64,
}

impl Default for PanOptions {
    fn default() -> Self {
        Self {
            animate: true,
            duration: 1.0,
        }
    }
}

pub trait MapView {
    fn create_map(&mut self, center: Coords, zoom: u8) -> AppResult<MapHandle>;

    fn add_tile_layer(&mut self, map: MapHandle, url_template: &str, attribution: &str)
    -> AppResult<()>;

    /// Register a handler fired on every click on `map`.
    fn on_map_click(&mut self, map: MapHandle, handler: ClickHandler) -> AppResult<()>;

    fn add_marker(&mut self, map: MapHandle, coords: Coords) -> AppResult<MarkerHandle>;

    /// Attach an (open) popup to a marker.
    fn bind_popup(
        &mut self,
        marker: MarkerHandle,
        content: &str,
        options: &PopupOptions,
    ) -> AppResult<()>;

    fn set_view(
        &mut self,
        map: MapHandle,
        coords: Coords,
        zoom: u8,
        pan: &PanOptions,
    ) -> AppResult<()>;
}
