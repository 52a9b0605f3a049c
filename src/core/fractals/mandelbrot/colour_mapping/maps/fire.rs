use crate::core::data::colour::Colour;

/// Two-segment ramp: black to red over the first half, red to yellow after.
#[must_use]
pub fn fire_colour(t: f64) -> Colour {
    let r = (t * 510.0).min(255.0);
    let g = (t * 510.0 - 255.0).clamp(0.0, 255.0);

    Colour {
        r: r.round() as u8,
        g: g.round() as u8,
        b: 0,
    }
}
