//! Boundary geometry loading.
//!
//! The geometry asset is a GeoJSON `FeatureCollection` fetched once per
//! mounted widget. Any failure leaves the widget without an overlay.

use std::fmt;

use geojson::GeoJson;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::model::BoundaryFeature;

#[derive(Debug)]
pub enum LoadError {
    /// The request never produced a response (offline, CORS, no window).
    Network(String),
    /// Non-2xx response.
    Status(u16),
    /// The response body could not be read as text.
    Body(String),
    Parse(String),
    /// Valid GeoJSON, but a single feature or bare geometry.
    NotACollection,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network(e) => write!(f, "request failed: {}", e),
            LoadError::Status(code) => write!(f, "unexpected HTTP status {}", code),
            LoadError::Body(e) => write!(f, "failed to read response body: {}", e),
            LoadError::Parse(e) => write!(f, "failed to parse GeoJSON: {}", e),
            LoadError::NotACollection => write!(f, "GeoJSON document is not a FeatureCollection"),
        }
    }
}

impl std::error::Error for LoadError {}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundaryCollection {
    pub features: Vec<BoundaryFeature>,
}

impl BoundaryCollection {
    /// Parses a GeoJSON `FeatureCollection`. Features without geometry are
    /// dropped since there is nothing to draw or hover.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let doc: GeoJson = text
            .parse()
            .map_err(|e: geojson::Error| LoadError::Parse(e.to_string()))?;
        let fc = match doc {
            GeoJson::FeatureCollection(fc) => fc,
            GeoJson::Feature(_) | GeoJson::Geometry(_) => return Err(LoadError::NotACollection),
        };
        let total = fc.features.len();
        let features: Vec<BoundaryFeature> = fc
            .features
            .into_iter()
            .filter(|f| f.geometry.is_some())
            .map(BoundaryFeature::from_geojson)
            .collect();
        if features.len() < total {
            log::debug!("skipped {} features without geometry", total - features.len());
        }
        Ok(Self { features })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// `GET url` and parse the body as a boundary collection.
pub async fn fetch_boundaries(url: &str) -> Result<BoundaryCollection, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".into()))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| LoadError::Network(format!("{:?}", e)))?;
    let resp: Response = resp
        .dyn_into()
        .map_err(|_| LoadError::Network("fetch resolved to a non-Response".into()))?;
    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }
    let text = resp
        .text()
        .map_err(|e| LoadError::Body(format!("{:?}", e)))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| LoadError::Body(format!("{:?}", e)))?
        .as_string()
        .ok_or_else(|| LoadError::Body("body was not a string".into()))?;
    BoundaryCollection::from_json(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AreaCode;

    const TWO_REGIONS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature",
              "properties": { "adcode": 520300, "name": "遵义市" },
              "geometry": { "type": "Polygon", "coordinates": [[[106.0,27.0],[107.5,27.0],[107.5,28.5],[106.0,27.0]]] } },
            { "type": "Feature",
              "properties": { "adcode": 520100, "name": "贵阳市" },
              "geometry": { "type": "MultiPolygon", "coordinates": [[[[106.4,26.4],[106.9,26.4],[106.9,26.9],[106.4,26.4]]]] } },
            { "type": "Feature",
              "properties": { "name": "no geometry" },
              "geometry": null }
        ]
    }"#;

    #[test]
    fn parses_collection_and_drops_empty_geometry() {
        let c = BoundaryCollection::from_json(TWO_REGIONS).unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.features[0].area_code, Some(AreaCode(520300)));
        assert_eq!(c.features[1].name.as_deref(), Some("贵阳市"));
    }

    #[test]
    fn rejects_non_json() {
        let err = BoundaryCollection::from_json("<html>404</html>").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)), "{err}");
    }

    #[test]
    fn rejects_single_feature_document() {
        let single = r#"{ "type": "Feature", "properties": {},
            "geometry": { "type": "Point", "coordinates": [1.0, 2.0] } }"#;
        let err = BoundaryCollection::from_json(single).unwrap_err();
        assert!(matches!(err, LoadError::NotACollection));
    }

    #[test]
    fn empty_collection_is_valid() {
        let c = BoundaryCollection::from_json(r#"{"type":"FeatureCollection","features":[]}"#).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(LoadError::Status(404).to_string(), "unexpected HTTP status 404");
        assert_eq!(
            LoadError::NotACollection.to_string(),
            "GeoJSON document is not a FeatureCollection"
        );
    }
}
