pub mod app;
pub mod location_panel;
pub mod map_controls;
pub mod region_map;

pub use app::App;
