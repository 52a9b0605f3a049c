use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::clock::Clock;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::fractals::mandelbrot::colour_mapping::maps::{
    fire::fire_colour, hue_ramp::hue_ramp_colour, matrix::matrix_colour,
    psychedelic::psychedelic_colour,
};

/// Colour for an escape count. Counts at or above the cap are inside the set
/// and always black, whatever the scheme.
///
/// `wall_clock_seconds` is only read by [`ColourScheme::Psychedelic`].
#[must_use]
pub fn colour_at(
    iteration: u32,
    max_iterations: u32,
    scheme: ColourScheme,
    wall_clock_seconds: f64,
) -> Colour {
    if iteration >= max_iterations {
        return Colour::BLACK;
    }

    let t = f64::from(iteration) / f64::from(max_iterations);

    match scheme {
        ColourScheme::Matrix => matrix_colour(t),
        ColourScheme::Fire => fire_colour(t),
        ColourScheme::Psychedelic => psychedelic_colour(t, wall_clock_seconds),
        ColourScheme::Classic
        | ColourScheme::Ocean
        | ColourScheme::Purple
        | ColourScheme::Sunset => hue_ramp_colour(t, scheme.base_hue()),
    }
}

/// Like [`colour_at`], reading the time from `clock` when the scheme needs it.
#[must_use]
pub fn colour_for(
    iteration: u32,
    max_iterations: u32,
    scheme: ColourScheme,
    clock: &dyn Clock,
) -> Colour {
    let seconds = if scheme.is_time_varying() {
        clock.seconds()
    } else {
        0.0
    };

    colour_at(iteration, max_iterations, scheme, seconds)
}

/// A scheme bound to an iteration cap and a single clock sample, so every
/// pixel of one frame is coloured against the same instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemeColourMap {
    scheme: ColourScheme,
    max_iterations: u32,
    wall_clock_seconds: f64,
}

impl SchemeColourMap {
    #[must_use]
    pub fn new(scheme: ColourScheme, max_iterations: u32, clock: &dyn Clock) -> Self {
        let wall_clock_seconds = if scheme.is_time_varying() {
            clock.seconds()
        } else {
            0.0
        };

        Self {
            scheme,
            max_iterations,
            wall_clock_seconds,
        }
    }

    #[must_use]
    pub fn scheme(&self) -> ColourScheme {
        self.scheme
    }
}

impl ColourMap<u32> for SchemeColourMap {
    fn map(&self, iteration: u32) -> Colour {
        colour_at(
            iteration,
            self.max_iterations,
            self.scheme,
            self.wall_clock_seconds,
        )
    }

    fn display_name(&self) -> &str {
        self.scheme.display_name()
    }
}
