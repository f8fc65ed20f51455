// Animated particle background for the résumé page, plus the layout math for
// its PDF export. The page calls `initialize()` once, then mounts a
// `ParticleBackground` on its full-viewport canvas.

mod animation;
mod color;
mod config;
mod error;
mod export;
mod field;
mod particle;
mod surface;
mod web;

use wasm_bindgen::prelude::*;

pub use animation::{Animation, CancelToken};
pub use color::Color;
pub use config::{FieldConfig, ResizePolicy};
pub use error::FieldError;
pub use export::{fit_to_page, PageFormat, Placement, FILE_NAME, RASTER_SCALE};
pub use field::{FrameStats, ParticleField};
pub use particle::Particle;
pub use surface::{CanvasSurface, Surface};
pub use web::ParticleBackground;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Panic messages and log output go to the browser console. Safe to call
// more than once.
#[wasm_bindgen]
pub fn initialize() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_ok() {
        log::debug!("console logger installed");
    }
}
