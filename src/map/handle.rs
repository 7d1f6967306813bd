use anyhow::{Context, Result};
use web_sys::HtmlElement;

use super::leaflet::{self, FlyOptions, MapOptions, TileLayerOptions};
use crate::config::WidgetConfig;
use crate::model::FlyTo;
use crate::state::Viewport;

/// Owns one Leaflet map. Dropping it removes the map and everything on it.
pub struct MapHandle {
    map: leaflet::Map,
}

impl MapHandle {
    /// Creates the map in `container` with built-in navigation disabled and
    /// adds the base tile layer.
    pub fn create(container: &HtmlElement, config: &WidgetConfig) -> Result<Self> {
        let (center, zoom) = config.initial_view();
        let options = leaflet::to_js(&MapOptions {
            center: center.to_array(),
            zoom,
            scroll_wheel_zoom: false,
            double_click_zoom: false,
            box_zoom: false,
            zoom_control: false,
            attribution_control: false,
        })?;
        let map = leaflet::new_map(container, &options)
            .map_err(leaflet::js_error)
            .context("L.map failed (is Leaflet loaded?)")?;
        // From here on an early return drops `handle`, which removes the map.
        let handle = Self { map };

        let tile_options = leaflet::to_js(&TileLayerOptions {
            max_zoom: config.max_zoom,
            no_wrap: false,
            attribution: config.tile_attribution,
        })?;
        let tiles = leaflet::new_tile_layer(config.tile_url, &tile_options)
            .map_err(leaflet::js_error)
            .context("L.tileLayer failed")?;
        tiles.add_to(&handle.map);
        Ok(handle)
    }

    pub fn map(&self) -> &leaflet::Map {
        &self.map
    }

    pub fn zoom_in(&self) {
        self.map.zoom_in();
    }

    pub fn zoom_out(&self) {
        self.map.zoom_out();
    }
}

impl Viewport for MapHandle {
    fn fly_to(&self, target: FlyTo) {
        let center = match leaflet::to_js(&target.center.to_array()) {
            Ok(v) => v,
            Err(e) => {
                log::error!("flyTo skipped: {:#}", e);
                return;
            }
        };
        let options = leaflet::to_js(&FlyOptions {
            duration: target.duration_secs,
        })
        .unwrap_or(wasm_bindgen::JsValue::UNDEFINED);
        self.map.fly_to(&center, target.zoom, &options);
    }
}

impl Drop for MapHandle {
    fn drop(&mut self) {
        log::debug!("removing map instance");
        self.map.remove_map();
    }
}
