use std::rc::Rc;

use anyhow::{Context, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::handle::MapHandle;
use super::leaflet;
use crate::config::boundary_style;
use crate::geometry::BoundaryCollection;
use crate::model::FeatureStyle;
use crate::state::{BoundaryStyler, OverlayState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Enter(usize),
    Leave,
}

struct Listener {
    layer: leaflet::GeoJson,
    enter: Closure<dyn FnMut()>,
    leave: Closure<dyn FnMut()>,
}

/// Leaflet rendering of a boundary collection: one `L.geoJSON` per feature,
/// grouped so the whole overlay adds and removes as a unit. Index `i` here is
/// feature `i` of the collection and of the matching `OverlayState`.
pub struct BoundaryLayer {
    group: leaflet::FeatureGroup,
    listeners: Vec<Listener>,
    styles: [JsValue; 3],
}

impl BoundaryLayer {
    /// Builds the overlay, binds `mouseover`/`mouseout` on every feature to
    /// `on_pointer`, and adds it to `map`.
    pub fn build(
        map: &MapHandle,
        collection: &BoundaryCollection,
        on_pointer: Rc<dyn Fn(PointerEvent)>,
    ) -> Result<Self> {
        let styles = [
            leaflet::to_js(&boundary_style(FeatureStyle::Default))?,
            leaflet::to_js(&boundary_style(FeatureStyle::Hover))?,
            leaflet::to_js(&boundary_style(FeatureStyle::Selected))?,
        ];
        let layer_options = js_sys::Object::new();
        js_sys::Reflect::set(&layer_options, &"style".into(), &styles[0])
            .map_err(leaflet::js_error)?;

        let group = leaflet::new_feature_group();
        let mut listeners = Vec::with_capacity(collection.len());
        for (index, feature) in collection.features.iter().enumerate() {
            let json = serde_json::to_string(&feature.geojson)
                .with_context(|| format!("serializing feature {}", index))?;
            let data = js_sys::JSON::parse(&json).map_err(leaflet::js_error)?;
            let layer = leaflet::new_geo_json(&data, &layer_options)
                .map_err(leaflet::js_error)
                .with_context(|| format!("L.geoJSON rejected feature {}", index))?;

            let enter = {
                let on_pointer = on_pointer.clone();
                Closure::wrap(Box::new(move || on_pointer(PointerEvent::Enter(index))) as Box<dyn FnMut()>)
            };
            let leave = {
                let on_pointer = on_pointer.clone();
                Closure::wrap(Box::new(move || on_pointer(PointerEvent::Leave)) as Box<dyn FnMut()>)
            };
            layer.on("mouseover", enter.as_ref().unchecked_ref());
            layer.on("mouseout", leave.as_ref().unchecked_ref());
            group.add_layer(&layer);
            listeners.push(Listener { layer, enter, leave });
        }
        group.add_to(map.map());
        log::info!("boundary overlay ready: {} features", listeners.len());
        Ok(Self {
            group,
            listeners,
            styles,
        })
    }

    fn style_value(&self, style: FeatureStyle) -> &JsValue {
        match style {
            FeatureStyle::Default => &self.styles[0],
            FeatureStyle::Hover => &self.styles[1],
            FeatureStyle::Selected => &self.styles[2],
        }
    }
}

impl BoundaryStyler for BoundaryLayer {
    fn restyle(&self, state: &OverlayState, changed: &[usize]) {
        for &i in changed {
            if let (Some(listener), Some(style)) = (self.listeners.get(i), state.style(i)) {
                listener.layer.set_style(self.style_value(style));
            }
        }
    }
}

impl Drop for BoundaryLayer {
    fn drop(&mut self) {
        for l in &self.listeners {
            l.layer.off("mouseover", l.enter.as_ref().unchecked_ref());
            l.layer.off("mouseout", l.leave.as_ref().unchecked_ref());
        }
        self.group.remove_layer();
    }
}
