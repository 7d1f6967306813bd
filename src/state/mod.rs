pub mod overlay;
pub mod session;
pub mod visibility;

pub use overlay::OverlayState;
pub use session::{BoundaryStyler, MapSession, Viewport};
pub use visibility::{latest_ratio, observer_thresholds, panel_visible};
