//! Skyfall - weather-driven animated canvas background in WASM

use wasm_bindgen::prelude::*;

pub mod canvas;
pub mod clouds;
pub mod condition;
pub mod config;
pub mod constants;
pub mod error;
pub mod frame_loop;
pub mod painter;
pub mod particles;
pub mod renderer;
pub mod scene;

pub use condition::{Condition, Gradient, Precipitation};
pub use config::BackdropOptions;
pub use error::BackdropError;
pub use painter::Painter;
pub use renderer::WeatherBackground;
pub use scene::Scene;

#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A host page may load the module twice; the first logger stays.
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("[Skyfall] WASM loaded (v{})", env!("CARGO_PKG_VERSION"));
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").into()
}
