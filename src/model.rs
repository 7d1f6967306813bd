//! Core data models for the region map widget.
//! Location presets, boundary features and the per-feature style states.

/// Geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `[lat, lng]`, the array form Leaflet accepts wherever it wants a `LatLng`.
    pub fn to_array(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

/// Administrative area code (`properties.adcode` in the geometry asset).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AreaCode(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocationId {
    Global,
    Country,
    Zunyi,
    Guiyang,
}

impl LocationId {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationId::Global => "global",
            LocationId::Country => "china",
            LocationId::Zunyi => "zunyi",
            LocationId::Guiyang => "guiyang",
        }
    }
}

/// A named viewport target, optionally tied to the boundary it highlights.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub label: &'static str,
    pub center: LatLng,
    pub zoom: f64,
    /// Only regional presets carry one; `Global` and `Country` never do.
    pub area_code: Option<AreaCode>,
}

/// Viewport animation command issued on selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlyTo {
    pub center: LatLng,
    pub zoom: f64,
    pub duration_secs: f64,
}

impl FlyTo {
    pub fn to_location(location: &Location, duration_secs: f64) -> Self {
        Self {
            center: location.center,
            zoom: location.zoom,
            duration_secs,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeatureStyle {
    #[default]
    Default,
    Hover,
    Selected,
}

/// One administrative shape from the geometry asset.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryFeature {
    pub area_code: Option<AreaCode>,
    pub name: Option<String>,
    /// Untouched source feature, handed to Leaflet as-is.
    pub geojson: geojson::Feature,
}

impl BoundaryFeature {
    pub fn from_geojson(feature: geojson::Feature) -> Self {
        let area_code = feature.property("adcode").and_then(parse_area_code);
        let name = feature
            .property("name")
            .and_then(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self {
            area_code,
            name,
            geojson: feature,
        }
    }
}

fn parse_area_code(value: &serde_json::Value) -> Option<AreaCode> {
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .map(AreaCode),
        serde_json::Value::String(s) => s.trim().parse::<u32>().ok().map(AreaCode),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(properties: serde_json::Value) -> geojson::Feature {
        let raw = json!({
            "type": "Feature",
            "properties": properties,
            "geometry": { "type": "Point", "coordinates": [106.97, 27.72] }
        });
        geojson::Feature::from_json_value(raw).unwrap()
    }

    #[test]
    fn reads_numeric_adcode_and_name() {
        let f = BoundaryFeature::from_geojson(feature(json!({ "adcode": 520300, "name": "遵义市" })));
        assert_eq!(f.area_code, Some(AreaCode(520300)));
        assert_eq!(f.name.as_deref(), Some("遵义市"));
    }

    #[test]
    fn accepts_adcode_written_as_string() {
        let f = BoundaryFeature::from_geojson(feature(json!({ "adcode": " 520100 " })));
        assert_eq!(f.area_code, Some(AreaCode(520100)));
    }

    #[test]
    fn malformed_properties_leave_feature_unselectable() {
        let f = BoundaryFeature::from_geojson(feature(json!({ "adcode": "100000_JD", "name": "" })));
        assert_eq!(f.area_code, None);
        assert_eq!(f.name, None);

        let f = BoundaryFeature::from_geojson(feature(json!({ "adcode": -5 })));
        assert_eq!(f.area_code, None);
    }

    #[test]
    fn fly_target_copies_center_and_zoom() {
        let loc = Location {
            id: LocationId::Zunyi,
            label: "Zunyi",
            center: LatLng::new(27.7274, 106.9723),
            zoom: 6.0,
            area_code: Some(AreaCode(520300)),
        };
        let target = FlyTo::to_location(&loc, 1.2);
        assert_eq!(target.center.to_array(), [27.7274, 106.9723]);
        assert_eq!(target.zoom, 6.0);
        assert_eq!(target.duration_secs, 1.2);
    }
}
