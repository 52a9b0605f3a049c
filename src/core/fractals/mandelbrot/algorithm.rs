use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas::CanvasDimensions;
use crate::core::data::complex::Complex;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_plane;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time count for `c = x0 + i*y0`, iterating `z <- z² + c` from zero.
///
/// Returns the index of the first iterate whose squared magnitude exceeds 4,
/// so a point already outside the radius reports 0. Points that never escape
/// report `max_iterations`.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z * z + c;
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    max_iterations
}

/// Binds the escape-time loop to a viewport snapshot and canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    canvas: CanvasDimensions,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, canvas: CanvasDimensions) -> Self {
        Self { viewport, canvas }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasDimensions {
        self.canvas
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = u32;

    fn compute(&self, x: u32, y: u32) -> u32 {
        let pixel = ScreenPoint::new(f64::from(x), f64::from(y));
        let c = pixel_to_plane(pixel, &self.viewport, self.canvas);

        escape_time(c, self.viewport.max_iterations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_outside_radius_escapes_immediately() {
        assert_eq!(escape_time(Complex::new(3.0, 3.0), 100), 0);
        assert_eq!(escape_time(Complex::new(-2.5, 0.0), 100), 0);
    }

    #[test]
    fn root_point_never_escapes() {
        assert_eq!(escape_time(Complex::new(-0.5, 0.0), 500), 500);
        assert_eq!(escape_time(Complex::new(-0.5, 0.0), 1), 1);
        assert_eq!(escape_time(Complex::ZERO, 120), 120);
    }

    #[test]
    fn escape_count_for_known_point() {
        // c = 1: z = 1, 2, 5 -> |5|² = 25 escapes on the third iterate
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 100), 2);
    }

    #[test]
    fn boundary_of_disc_does_not_escape() {
        // c = -2 stays at z = 2 forever and |z|² = 4 is not > 4
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 64), 64);
    }

    #[test]
    fn count_is_monotonic_in_iteration_cap() {
        let c = Complex::new(-0.75, 0.1);
        let mut previous = 0;

        for cap in 1..=400 {
            let count = escape_time(c, cap);

            assert!(count >= previous, "cap={} count={} previous={}", cap, count, previous);
            assert!(count <= cap);
            previous = count;
        }
    }

    #[test]
    fn lower_cap_never_exceeds_itself() {
        let c = Complex::new(-0.7435, 0.1314);
        let full = escape_time(c, 1000);

        for cap in [1, 10, 50, 200, 999] {
            let clipped = escape_time(c, cap);

            assert!(clipped <= cap);
            assert!(clipped <= full);
            assert_eq!(clipped, full.min(cap));
        }
    }

    #[test]
    fn algorithm_maps_pixels_through_viewport() {
        let canvas = CanvasDimensions::new(800, 600);
        let algorithm = MandelbrotAlgorithm::new(Viewport::default(), canvas);

        assert_eq!(algorithm.compute(400, 300), 120);
        // top-left corner lies far outside the set
        assert!(algorithm.compute(0, 0) < 5);
    }
}
