mod components;
mod config;
mod geometry;
mod logger;
mod map;
mod model;
mod state;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    yew::Renderer::<App>::new().render();
}
