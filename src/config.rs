// Options accepted by the page shell when mounting the background.

use crate::color::Color;
use crate::error::FieldError;
use serde::Deserialize;

// What happens to the particles when the drawing surface changes size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizePolicy {
    // Only the surface changes; particles outside the new bounds head back
    // in on their next frame and re-enter at their own speed
    Keep,
    // Positions are clamped into the new bounds.
    Clamp,
    // Positions are scaled by the ratio between the new and old size.
    Rescale,
}

impl Default for ResizePolicy {
    fn default() -> Self {
        ResizePolicy::Keep
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    pub count: usize,
    // Two particles closer than this are joined by a line.
    pub link_distance: f64,
    // Upper bound of each velocity component, in units per frame.
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    // Painted over the whole surface every frame; a low alpha leaves trails.
    pub fade: Color,
    pub particle_color: Color,
    pub link_color: Color,
    pub resize_policy: ResizePolicy,
    pub seed: Option<u64>,
}

impl FieldConfig {
    pub const DEFAULT_COUNT: usize = 50;
    pub const DEFAULT_LINK_DISTANCE: f64 = 150.0;
    pub const DEFAULT_MAX_SPEED: f64 = 0.25;

    pub fn from_json(json: &str) -> Result<FieldConfig, FieldError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            count: FieldConfig::DEFAULT_COUNT,
            link_distance: FieldConfig::DEFAULT_LINK_DISTANCE,
            max_speed: FieldConfig::DEFAULT_MAX_SPEED,
            min_radius: 1.0,
            max_radius: 3.0,
            fade: Color::from_u32(0xffffff1a),
            particle_color: Color::from_u32(0x1e3a8a99),
            link_color: Color::from_u32(0x3b82f64d),
            resize_policy: ResizePolicy::Keep,
            seed: None,
        }
    }
}
