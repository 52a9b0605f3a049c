use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::hsl::hsl_to_rgb;

const SATURATION: f64 = 0.7;
const MIN_LIGHTNESS: f64 = 0.2;
const LIGHTNESS_RANGE: f64 = 0.6;

/// Rotates a full turn of hue away from `base_hue` (degrees) while brightening
/// from dark to light. Shared by the Classic, Ocean, Purple and Sunset schemes.
#[must_use]
pub fn hue_ramp_colour(t: f64, base_hue: f64) -> Colour {
    let hue = (base_hue + t * 360.0).rem_euclid(360.0);
    let lightness = MIN_LIGHTNESS + t * LIGHTNESS_RANGE;

    hsl_to_rgb(hue / 360.0, SATURATION, lightness)
}
