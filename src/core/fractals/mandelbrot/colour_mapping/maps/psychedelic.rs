use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::hsl::hsl_to_rgb;

const HUE_CYCLES: f64 = 5.0;
const SECONDS_PER_CYCLE: f64 = 10.0;

/// Hue cycles five times across the iteration range and drifts with the wall
/// clock, so the same ratio changes colour over time.
#[must_use]
pub fn psychedelic_colour(t: f64, wall_clock_seconds: f64) -> Colour {
    let hue = (t * HUE_CYCLES + wall_clock_seconds / SECONDS_PER_CYCLE).rem_euclid(1.0);

    hsl_to_rgb(hue, 0.8, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_instant_gives_same_colour() {
        assert_eq!(psychedelic_colour(0.3, 42.0), psychedelic_colour(0.3, 42.0));
    }

    #[test]
    fn time_shifts_the_hue() {
        assert_ne!(psychedelic_colour(0.0, 0.0), psychedelic_colour(0.0, 2.5));
    }

    #[test]
    fn ten_seconds_is_a_full_cycle() {
        // hue 0 at t = 0; ten seconds later it has wrapped back around
        assert_eq!(psychedelic_colour(0.0, 0.0), hsl_to_rgb(0.0, 0.8, 0.5));
        assert_eq!(psychedelic_colour(0.0, 10.0), hsl_to_rgb(0.0, 0.8, 0.5));
    }

    #[test]
    fn hue_is_five_cycles_of_t_plus_a_tenth_of_the_seconds() {
        // 0.125 * 5 + 5 / 10 = 1.125, wrapped to 0.125
        assert_eq!(psychedelic_colour(0.125, 5.0), hsl_to_rgb(0.125, 0.8, 0.5));
        // 0.25 * 5 = 1.25, wrapped to 0.25
        assert_eq!(psychedelic_colour(0.25, 0.0), hsl_to_rgb(0.25, 0.8, 0.5));
        assert_eq!(psychedelic_colour(0.1, 2.0), hsl_to_rgb(0.7, 0.8, 0.5));
    }
}
