use crate::model::{FlyTo, Location};

use super::overlay::OverlayState;

/// Something that can animate to a viewport target.
pub trait Viewport {
    fn fly_to(&self, target: FlyTo);
}

/// Pushes feature styles from [`OverlayState`] to whatever renders them.
pub trait BoundaryStyler {
    fn restyle(&self, state: &OverlayState, changed: &[usize]);
}

/// Per-mount widget state: the map, the overlay once it has loaded, and the
/// selection/hover state that drives overlay styling.
///
/// `generation` is bumped on every unmount so an overlay load started by an
/// earlier mount can tell it is stale. `last_selection` is replayed onto an
/// overlay that finishes loading after the user already picked a location.
pub struct MapSession<V, S> {
    viewport: Option<V>,
    overlay: Option<(S, OverlayState)>,
    last_selection: Option<Location>,
    generation: u32,
}

impl<V, S> Default for MapSession<V, S> {
    fn default() -> Self {
        Self {
            viewport: None,
            overlay: None,
            last_selection: None,
            generation: 0,
        }
    }
}

impl<V: Viewport, S: BoundaryStyler> MapSession<V, S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.viewport.is_some()
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn viewport(&self) -> Option<&V> {
        self.viewport.as_ref()
    }

    pub fn overlay_state(&self) -> Option<&OverlayState> {
        self.overlay.as_ref().map(|(_, state)| state)
    }

    /// Stores the map for this mount and returns the generation token the
    /// overlay load must present. Hands the viewport back if already mounted.
    pub fn mount(&mut self, viewport: V) -> Result<u32, V> {
        if self.viewport.is_some() {
            return Err(viewport);
        }
        self.viewport = Some(viewport);
        Ok(self.generation)
    }

    /// True while the mount that issued `generation` is still live.
    pub fn accepts(&self, generation: u32) -> bool {
        self.viewport.is_some() && self.generation == generation
    }

    /// Installs a loaded overlay, applying any selection made while it was
    /// still loading. Stale loads are dropped and return false.
    pub fn attach_overlay(&mut self, generation: u32, styler: S, mut state: OverlayState) -> bool {
        if !self.accepts(generation) {
            return false;
        }
        if let Some(location) = &self.last_selection {
            state.select(location);
        }
        let all: Vec<usize> = (0..state.len()).collect();
        styler.restyle(&state, &all);
        self.overlay = Some((styler, state));
        true
    }

    /// Restyles the overlay for `location` (when loaded) and flies there.
    /// Returns the issued animation, or `None` before the map exists.
    pub fn select_location(&mut self, location: &Location, duration_secs: f64) -> Option<FlyTo> {
        let viewport = self.viewport.as_ref()?;
        if let Some((styler, state)) = self.overlay.as_mut() {
            let changed = state.select(location);
            styler.restyle(state, &changed);
            log::debug!("{} highlights {} features", location.id.as_str(), state.selected().len());
        }
        self.last_selection = Some(location.clone());
        let target = FlyTo::to_location(location, duration_secs);
        viewport.fly_to(target);
        Some(target)
    }

    pub fn pointer_enter(&mut self, index: usize) {
        if let Some((styler, state)) = self.overlay.as_mut() {
            let changed = state.pointer_enter(index);
            styler.restyle(state, &changed);
        }
    }

    pub fn pointer_leave(&mut self) {
        if let Some((styler, state)) = self.overlay.as_mut() {
            let changed = state.pointer_leave();
            styler.restyle(state, &changed);
        }
    }

    pub fn hovered_name(&self) -> Option<&str> {
        self.overlay_state().and_then(|s| s.hovered_name())
    }

    /// Drops the overlay before the map, then invalidates in-flight loads.
    pub fn unmount(&mut self) {
        self.overlay = None;
        self.viewport = None;
        self.last_selection = None;
        self.generation = self.generation.wrapping_add(1);
    }
}
