//! Leaflet bindings. Only the handful of `L.*` calls the widget makes.
//! Leaflet itself is loaded by `index.html` as the global `L`.

use anyhow::anyhow;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    pub fn new_map(container: &HtmlElement, options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = flyTo)]
    pub fn fly_to(this: &Map, center: &JsValue, zoom: f64, options: &JsValue);

    #[wasm_bindgen(method, js_name = zoomIn)]
    pub fn zoom_in(this: &Map);

    #[wasm_bindgen(method, js_name = zoomOut)]
    pub fn zoom_out(this: &Map);

    #[wasm_bindgen(method, js_name = remove)]
    pub fn remove_map(this: &Map);

    #[derive(Debug, Clone)]
    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, map: &Map);

    #[wasm_bindgen(method, js_name = remove)]
    pub fn remove_layer(this: &Layer);

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    pub fn new_tile_layer(url_template: &str, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(extends = Layer)]
    #[derive(Debug, Clone)]
    pub type GeoJson;

    #[wasm_bindgen(catch, js_namespace = L, js_name = geoJSON)]
    pub fn new_geo_json(data: &JsValue, options: &JsValue) -> Result<GeoJson, JsValue>;

    #[wasm_bindgen(method, js_name = setStyle)]
    pub fn set_style(this: &GeoJson, style: &JsValue);

    #[wasm_bindgen(method, js_name = on)]
    pub fn on(this: &GeoJson, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, js_name = off)]
    pub fn off(this: &GeoJson, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(extends = Layer)]
    #[derive(Debug, Clone)]
    pub type FeatureGroup;

    #[wasm_bindgen(js_namespace = L, js_name = featureGroup)]
    pub fn new_feature_group() -> FeatureGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &FeatureGroup, layer: &Layer);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: [f64; 2],
    pub zoom: f64,
    pub scroll_wheel_zoom: bool,
    pub double_click_zoom: bool,
    pub box_zoom: bool,
    pub zoom_control: bool,
    pub attribution_control: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerOptions<'a> {
    pub max_zoom: f64,
    pub no_wrap: bool,
    pub attribution: &'a str,
}

#[derive(Serialize)]
pub struct FlyOptions {
    pub duration: f64,
}

/// Converts an options struct into the plain object Leaflet expects.
pub fn to_js<T: Serialize>(value: &T) -> anyhow::Result<JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| anyhow!("serializing Leaflet options: {:?}", e))
}

pub fn js_error(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}
