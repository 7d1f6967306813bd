use crate::model::{AreaCode, BoundaryFeature, FeatureStyle, Location, LocationId};

/// Indices of features whose style changed in one transition.
pub type StyleChanges = Vec<usize>;

#[derive(Clone, Debug, PartialEq)]
struct FeatureEntry {
    area_code: Option<AreaCode>,
    name: Option<String>,
    style: FeatureStyle,
}

/// Style state of every boundary feature plus the current selection.
///
/// Features are identified by their index in the loaded collection. While
/// `selected` is non-empty hover styling is suppressed for every feature.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayState {
    features: Vec<FeatureEntry>,
    selected: Vec<usize>,
    hovered: Option<usize>,
}

impl OverlayState {
    pub fn new(features: &[BoundaryFeature]) -> Self {
        Self {
            features: features
                .iter()
                .map(|f| FeatureEntry {
                    area_code: f.area_code,
                    name: f.name.clone(),
                    style: FeatureStyle::Default,
                })
                .collect(),
            selected: Vec::new(),
            hovered: None,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn style(&self, index: usize) -> Option<FeatureStyle> {
        self.features.get(index).map(|f| f.style)
    }

    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn hovered_name(&self) -> Option<&str> {
        self.hovered
            .and_then(|i| self.features.get(i))
            .and_then(|f| f.name.as_deref())
    }

    /// Pointer entered feature `index`: hover it unless a selection is active.
    pub fn pointer_enter(&mut self, index: usize) -> StyleChanges {
        if self.has_selection() || index >= self.features.len() {
            return Vec::new();
        }
        self.hovered = Some(index);
        self.transition(|features| features[index].style = FeatureStyle::Hover)
    }

    /// Pointer left a feature: reset everything to default unless a selection
    /// is active.
    pub fn pointer_leave(&mut self) -> StyleChanges {
        if self.has_selection() {
            return Vec::new();
        }
        self.hovered = None;
        self.transition(|features| {
            for f in features.iter_mut() {
                f.style = FeatureStyle::Default;
            }
        })
    }

    /// Clears the previous selection, then selects the features `location`
    /// highlights: none for `Global`, all for `Country`, otherwise every
    /// feature whose area code matches (duplicates included).
    pub fn select(&mut self, location: &Location) -> StyleChanges {
        let mut selected = Vec::new();
        let changes = self.transition(|features| {
            for f in features.iter_mut() {
                f.style = FeatureStyle::Default;
            }
            if location.id == LocationId::Global {
                return;
            }
            for (i, f) in features.iter_mut().enumerate() {
                let hit = match location.id {
                    LocationId::Country => true,
                    _ => location.area_code.is_some() && f.area_code == location.area_code,
                };
                if hit {
                    f.style = FeatureStyle::Selected;
                    selected.push(i);
                }
            }
        });
        self.selected = selected;
        self.hovered = None;
        changes
    }

    fn transition(&mut self, apply: impl FnOnce(&mut [FeatureEntry])) -> StyleChanges {
        let before: Vec<FeatureStyle> = self.features.iter().map(|f| f.style).collect();
        apply(&mut self.features);
        before
            .into_iter()
            .zip(self.features.iter())
            .enumerate()
            .filter(|(_, (old, f))| *old != f.style)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LOCATIONS;
    use crate::model::LatLng;

    fn feature(code: Option<u32>, name: &str) -> BoundaryFeature {
        let raw = serde_json::json!({
            "type": "Feature",
            "properties": { "adcode": code, "name": name },
            "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
        });
        BoundaryFeature::from_geojson(geojson::Feature::from_json_value(raw).unwrap())
    }

    fn guizhou() -> OverlayState {
        OverlayState::new(&[
            feature(Some(520100), "贵阳市"),
            feature(Some(520300), "遵义市"),
            feature(Some(520400), "安顺市"),
            feature(None, "unnamed"),
        ])
    }

    fn preset(id: LocationId) -> &'static Location {
        LOCATIONS.iter().find(|l| l.id == id).unwrap()
    }

    fn styles(s: &OverlayState) -> Vec<FeatureStyle> {
        (0..s.len()).map(|i| s.style(i).unwrap()).collect()
    }

    use crate::model::FeatureStyle::{Default as D, Hover as H, Selected as S};

    #[test]
    fn regional_preset_selects_only_matching_area_code() {
        let mut s = guizhou();
        let changed = s.select(preset(LocationId::Zunyi));
        assert_eq!(styles(&s), vec![D, S, D, D]);
        assert_eq!(s.selected(), &[1]);
        assert_eq!(changed, vec![1]);

        let changed = s.select(preset(LocationId::Guiyang));
        assert_eq!(styles(&s), vec![S, D, D, D]);
        assert_eq!(s.selected(), &[0]);
        assert_eq!(changed, vec![0, 1]);
    }

    #[test]
    fn country_preset_selects_every_feature() {
        let mut s = guizhou();
        s.select(preset(LocationId::Country));
        assert_eq!(styles(&s), vec![S, S, S, S]);
        assert_eq!(s.selected(), &[0, 1, 2, 3]);
    }

    #[test]
    fn global_preset_clears_selection() {
        let mut s = guizhou();
        s.select(preset(LocationId::Country));
        let changed = s.select(preset(LocationId::Global));
        assert_eq!(styles(&s), vec![D, D, D, D]);
        assert!(!s.has_selection());
        assert_eq!(changed, vec![0, 1, 2, 3]);
    }

    #[test]
    fn selection_suppresses_hover() {
        let mut s = guizhou();
        s.select(preset(LocationId::Zunyi));
        assert!(s.pointer_enter(0).is_empty());
        assert!(s.pointer_enter(1).is_empty());
        assert_eq!(styles(&s), vec![D, S, D, D]);
        assert!(s.pointer_leave().is_empty());
        assert_eq!(styles(&s), vec![D, S, D, D]);
        assert_eq!(s.hovered_name(), None);
    }

    #[test]
    fn hover_before_selection() {
        let mut s = guizhou();
        assert_eq!(s.pointer_enter(2), vec![2]);
        assert_eq!(styles(&s), vec![D, D, H, D]);
        assert_eq!(s.hovered_name(), Some("安顺市"));

        assert_eq!(s.pointer_leave(), vec![2]);
        assert_eq!(styles(&s), vec![D, D, D, D]);
        assert_eq!(s.hovered_name(), None);
    }

    #[test]
    fn selecting_clears_a_stale_hover() {
        let mut s = guizhou();
        s.pointer_enter(2);
        s.select(preset(LocationId::Zunyi));
        assert_eq!(styles(&s), vec![D, S, D, D]);
        assert_eq!(s.hovered_name(), None);
    }

    #[test]
    fn duplicate_area_codes_are_all_selected() {
        let mut s = OverlayState::new(&[
            feature(Some(520300), "a"),
            feature(Some(520100), "b"),
            feature(Some(520300), "c"),
        ]);
        s.select(preset(LocationId::Zunyi));
        assert_eq!(styles(&s), vec![S, D, S]);
        assert_eq!(s.selected(), &[0, 2]);
    }

    #[test]
    fn region_without_area_code_selects_nothing() {
        let mut s = guizhou();
        let loc = Location {
            id: LocationId::Guiyang,
            label: "misconfigured",
            center: LatLng::new(0.0, 0.0),
            zoom: 3.0,
            area_code: None,
        };
        s.select(&loc);
        assert!(!s.has_selection());
        assert_eq!(styles(&s), vec![D, D, D, D]);
    }

    #[test]
    fn out_of_range_hover_is_ignored() {
        let mut s = guizhou();
        assert!(s.pointer_enter(99).is_empty());
        assert_eq!(s.hovered_name(), None);
    }

    #[test]
    fn concrete_zunyi_scenario() {
        let mut s = OverlayState::new(&[feature(Some(520300), "遵义市")]);
        let zunyi = Location {
            id: LocationId::Zunyi,
            label: "Zunyi",
            center: LatLng::new(27.7274, 106.9723),
            zoom: 6.0,
            area_code: Some(AreaCode(520300)),
        };
        s.select(&zunyi);
        assert_eq!(styles(&s), vec![S]);
        assert_eq!(s.selected(), &[0]);
    }
}
