//! Text rendering of the map: every map operation becomes one line of output.

use super::{ClickHandler, MapHandle, MapView, MarkerHandle, PanOptions, PopupOptions};
use crate::errors::{AppError, AppResult};
use crate::models::coords::Coords;
use std::io::{self, Stdout, Write};

struct MapState {
    center: Coords,
    zoom: u8,
    tile_url: Option<String>,
    handlers: Vec<ClickHandler>,
}

/// A marker placed on a map, with its popup once bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub map: MapHandle,
    pub coords: Coords,
    pub popup: Option<(String, PopupOptions)>,
}

pub struct TerminalMap<W: Write> {
    out: W,
    maps: Vec<MapState>,
    markers: Vec<Marker>,
}

impl TerminalMap<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalMap<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            maps: Vec::new(),
            markers: Vec::new(),
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Current centre and zoom of `map`.
    pub fn view(&self, map: MapHandle) -> Option<(Coords, u8)> {
        self.maps.get(map.0).map(|m| (m.center, m.zoom))
    }

    pub fn tile_url(&self, map: MapHandle) -> Option<&str> {
        self.maps.get(map.0).and_then(|m| m.tile_url.as_deref())
    }

    /// Deliver a click at `coords` to every handler registered on `map`.
    /// Clicking a map that was never created does nothing.
    pub fn click(&mut self, map: MapHandle, coords: Coords) {
        if let Some(state) = self.maps.get_mut(map.0) {
            for handler in state.handlers.iter_mut() {
                handler(coords);
            }
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    fn map_state(&mut self, map: MapHandle) -> AppResult<&mut MapState> {
        self.maps
            .get_mut(map.0)
            .ok_or_else(|| AppError::Other(format!("unknown map handle {}", map.0)))
    }
}

impl<W: Write> MapView for TerminalMap<W> {
    fn create_map(&mut self, center: Coords, zoom: u8) -> AppResult<MapHandle> {
        self.maps.push(MapState {
            center,
            zoom,
            tile_url: None,
            handlers: Vec::new(),
        });

        writeln!(self.out, "🗺️  Map centred at {} (zoom {})", center, zoom)?;
        writeln!(self.out, "🔗 {}", center.osm_url(zoom))?;
        Ok(MapHandle(self.maps.len() - 1))
    }

    fn add_tile_layer(
        &mut self,
        map: MapHandle,
        url_template: &str,
        attribution: &str,
    ) -> AppResult<()> {
        self.map_state(map)?.tile_url = Some(url_template.to_string());
        writeln!(self.out, "🧱 Tiles: {} ({})", url_template, attribution)?;
        Ok(())
    }

    fn on_map_click(&mut self, map: MapHandle, handler: ClickHandler) -> AppResult<()> {
        self.map_state(map)?.handlers.push(handler);
        Ok(())
    }

    fn add_marker(&mut self, map: MapHandle, coords: Coords) -> AppResult<MarkerHandle> {
        self.map_state(map)?;
        self.markers.push(Marker {
            map,
            coords,
            popup: None,
        });
        Ok(MarkerHandle(self.markers.len() - 1))
    }

    fn bind_popup(
        &mut self,
        marker: MarkerHandle,
        content: &str,
        options: &PopupOptions,
    ) -> AppResult<()> {
        let m = self
            .markers
            .get_mut(marker.0)
            .ok_or_else(|| AppError::Other(format!("unknown marker handle {}", marker.0)))?;
        m.popup = Some((content.to_string(), options.clone()));
        let coords = m.coords;

        writeln!(
            self.out,
            "📍 [{}] {} @ {}",
            options.class_name, content, coords
        )?;
        Ok(())
    }

    fn set_view(
        &mut self,
        map: MapHandle,
        coords: Coords,
        zoom: u8,
        pan: &PanOptions,
    ) -> AppResult<()> {
        let state = self.map_state(map)?;
        state.center = coords;
        state.zoom = zoom;

        if pan.animate {
            writeln!(
                self.out,
                "🎯 Panning to {} (zoom {}, {:.1}s)",
                coords, zoom, pan.duration
            )?;
        } else {
            writeln!(self.out, "🎯 View set to {} (zoom {})", coords, zoom)?;
        }
        writeln!(self.out, "🔗 {}", coords.osm_url(zoom))?;
        Ok(())
    }
}
