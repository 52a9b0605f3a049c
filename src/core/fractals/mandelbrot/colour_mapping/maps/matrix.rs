use crate::core::data::colour::Colour;

/// Green-only ramp that saturates halfway through the iteration range.
#[must_use]
pub fn matrix_colour(t: f64) -> Colour {
    Colour {
        r: 0,
        g: (255.0 * t * 2.0).round().clamp(0.0, 255.0) as u8,
        b: 0,
    }
}
