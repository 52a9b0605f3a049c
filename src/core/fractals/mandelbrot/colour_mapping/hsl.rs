use crate::core::data::colour::{Colour, channel_to_byte};

/// Standard HSL to RGB conversion. All inputs are fractions in `[0, 1]`;
/// hue is measured in turns.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Colour {
    if saturation == 0.0 {
        let grey = channel_to_byte(lightness);
        return Colour::new(grey, grey, grey);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    Colour {
        r: channel_to_byte(hue_to_channel(p, q, hue + 1.0 / 3.0)),
        g: channel_to_byte(hue_to_channel(p, q, hue)),
        b: channel_to_byte(hue_to_channel(p, q, hue - 1.0 / 3.0)),
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
