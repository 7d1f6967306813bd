//! Leaflet-backed map: the map instance and the boundary overlay drawn on it.

mod handle;
mod leaflet;
mod overlay;

pub use handle::MapHandle;
pub use overlay::{BoundaryLayer, PointerEvent};

/// Session type the widget holds for one mount.
pub type Session = crate::state::MapSession<MapHandle, BoundaryLayer>;
