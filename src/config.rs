//! Compile-time configuration: location presets, tile source, geometry asset
//! and the boundary path styles.

use serde::Serialize;

use crate::model::{AreaCode, FeatureStyle, LatLng, Location, LocationId};

pub const SITE_TITLE: &str = "Portfolio";
pub const SITE_TAGLINE: &str = "Software engineer. Places I have lived and worked.";

pub const TILE_URL_TEMPLATE: &str = "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors © CARTO";
pub const TILE_MAX_ZOOM: f64 = 18.0;

pub const GEOMETRY_URL: &str = "/cn.json";

pub const FLY_DURATION_SECS: f64 = 1.2;

/// The button panel renders only while strictly more than this share of the
/// widget is on screen.
pub const PANEL_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Button order follows this list.
pub const LOCATIONS: &[Location] = &[
    Location {
        id: LocationId::Global,
        label: "World",
        center: LatLng::new(20.0, 0.0),
        zoom: 2.0,
        area_code: None,
    },
    Location {
        id: LocationId::Country,
        label: "China",
        center: LatLng::new(35.8617, 104.1954),
        zoom: 4.0,
        area_code: None,
    },
    Location {
        id: LocationId::Zunyi,
        label: "Zunyi",
        center: LatLng::new(27.7274, 106.9723),
        zoom: 6.0,
        area_code: Some(AreaCode(520300)),
    },
    Location {
        id: LocationId::Guiyang,
        label: "Guiyang",
        center: LatLng::new(26.6470, 106.6302),
        zoom: 7.0,
        area_code: Some(AreaCode(520100)),
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    pub locations: &'static [Location],
    pub tile_url: &'static str,
    pub tile_attribution: &'static str,
    pub max_zoom: f64,
    pub geometry_url: &'static str,
    pub fly_duration_secs: f64,
    /// Preset whose center/zoom the map opens on.
    pub home: LocationId,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            locations: LOCATIONS,
            tile_url: TILE_URL_TEMPLATE,
            tile_attribution: TILE_ATTRIBUTION,
            max_zoom: TILE_MAX_ZOOM,
            geometry_url: GEOMETRY_URL,
            fly_duration_secs: FLY_DURATION_SECS,
            home: LocationId::Country,
        }
    }
}

impl WidgetConfig {
    /// Initial center and zoom: the home preset, else the first preset, else
    /// a whole-world view.
    pub fn initial_view(&self) -> (LatLng, f64) {
        self.locations
            .iter()
            .find(|l| l.id == self.home)
            .or_else(|| self.locations.first())
            .map(|l| (l.center, l.zoom))
            .unwrap_or((LatLng::new(20.0, 0.0), 2.0))
    }
}

/// Leaflet `Path` options for one boundary style.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<&'static str>,
}

pub fn boundary_style(style: FeatureStyle) -> PathStyle {
    match style {
        FeatureStyle::Default => PathStyle {
            color: "#8b949e",
            weight: 1.0,
            opacity: 0.6,
            fill_color: "#8b949e",
            fill_opacity: 0.0,
            dash_array: None,
        },
        FeatureStyle::Hover => PathStyle {
            color: "#58a6ff",
            weight: 2.0,
            opacity: 0.9,
            fill_color: "#58a6ff",
            fill_opacity: 0.05,
            dash_array: Some("4 3"),
        },
        FeatureStyle::Selected => PathStyle {
            color: "#f78166",
            weight: 2.5,
            opacity: 1.0,
            fill_color: "#f78166",
            fill_opacity: 0.25,
            dash_array: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_ordered_and_only_regions_carry_area_codes() {
        let ids: Vec<_> = LOCATIONS.iter().map(|l| l.id).collect();
        assert_eq!(
            ids,
            vec![LocationId::Global, LocationId::Country, LocationId::Zunyi, LocationId::Guiyang]
        );
        for loc in LOCATIONS {
            let regional = !matches!(loc.id, LocationId::Global | LocationId::Country);
            assert_eq!(loc.area_code.is_some(), regional, "{}", loc.id.as_str());
        }
    }

    #[test]
    fn initial_view_is_the_country_preset() {
        let (center, zoom) = WidgetConfig::default().initial_view();
        assert_eq!(center, LatLng::new(35.8617, 104.1954));
        assert_eq!(zoom, 4.0);
    }

    #[test]
    fn initial_view_falls_back_when_home_missing() {
        let cfg = WidgetConfig {
            locations: &LOCATIONS[2..],
            ..WidgetConfig::default()
        };
        assert_eq!(cfg.initial_view().0, LOCATIONS[2].center);

        let empty = WidgetConfig {
            locations: &[],
            ..WidgetConfig::default()
        };
        assert_eq!(empty.initial_view(), (LatLng::new(20.0, 0.0), 2.0));
    }

    #[test]
    fn styles_serialize_with_leaflet_option_names() {
        let v = serde_json::to_value(boundary_style(FeatureStyle::Hover)).unwrap();
        assert_eq!(v["fillOpacity"], 0.05);
        assert_eq!(v["dashArray"], "4 3");
        let v = serde_json::to_value(boundary_style(FeatureStyle::Selected)).unwrap();
        assert!(v.get("dashArray").is_none());
    }
}
