#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Section backgrounds and snap-scroll navigation.
//!
//! The simulation and input handling are plain Rust and build on every
//! target; the browser glue only compiles for wasm32.

pub mod circle_field;
pub mod color;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod glyph_rain;
pub mod layout;
pub mod particle_web;
pub mod snap;
pub mod surface;
pub mod tween;

pub use config::Config;
pub use error::ConfigError;
pub use snap::{Command, SnapScroll};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod backgrounds;
    mod canvas;
    mod controls;
    mod page;
    mod render;
    mod transition;

    pub use page::Page;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("snapdeck loaded");
        Ok(())
    }

    /// Mount on the current document. `options` is a partial config object;
    /// `undefined` keeps every default.
    #[wasm_bindgen]
    pub fn mount(options: JsValue) -> Result<Page, JsValue> {
        let config: crate::Config = if options.is_undefined() || options.is_null() {
            crate::Config::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };
        config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;
        Page::mount(config)
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{mount, Page};

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
