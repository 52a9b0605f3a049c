//! Affine maps between canvas pixels and the complex plane.
//!
//! At zoom 1 the canvas spans 3.5 units of the real axis once stretched by
//! the aspect ratio, i.e. both axes advance `3.5 / (zoom * height)` per pixel.

use crate::core::data::canvas::CanvasDimensions;
use crate::core::data::complex::Complex;
use crate::core::data::screen_point::{PixelDelta, ScreenPoint};
use crate::core::data::viewport::Viewport;

/// Width of the plane visible at zoom 1 (scaled by the aspect ratio).
pub const PLANE_SPAN: f64 = 3.5;

#[must_use]
pub fn plane_scale(zoom: f64) -> f64 {
    PLANE_SPAN / zoom
}

#[must_use]
pub fn pixel_to_plane(pixel: ScreenPoint, viewport: &Viewport, canvas: CanvasDimensions) -> Complex {
    let width = f64::from(canvas.width);
    let height = f64::from(canvas.height);
    let scale = plane_scale(viewport.zoom());
    let aspect = canvas.aspect();

    Complex {
        real: viewport.center_x() + ((pixel.x - width / 2.0) * scale * aspect) / width,
        imag: viewport.center_y() + ((pixel.y - height / 2.0) * scale) / height,
    }
}

/// Same scaling as [`pixel_to_plane`] without the centre offset; used for
/// turning drag motion into a centre shift.
#[must_use]
pub fn pixel_delta_to_plane_delta(
    delta: PixelDelta,
    viewport: &Viewport,
    canvas: CanvasDimensions,
) -> Complex {
    let scale = plane_scale(viewport.zoom());
    let aspect = canvas.aspect();

    Complex {
        real: (delta.dx * scale * aspect) / f64::from(canvas.width),
        imag: (delta.dy * scale) / f64::from(canvas.height),
    }
}

#[must_use]
pub fn plane_delta_to_pixel_delta(
    delta: Complex,
    viewport: &Viewport,
    canvas: CanvasDimensions,
) -> PixelDelta {
    let scale = plane_scale(viewport.zoom());
    let aspect = canvas.aspect();

    PixelDelta {
        dx: (delta.real * f64::from(canvas.width)) / (scale * aspect),
        dy: (delta.imag * f64::from(canvas.height)) / scale,
    }
}

#[must_use]
pub fn plane_to_pixel(point: Complex, viewport: &Viewport, canvas: CanvasDimensions) -> ScreenPoint {
    let offset = plane_delta_to_pixel_delta(point - viewport.center(), viewport, canvas);

    ScreenPoint {
        x: f64::from(canvas.width) / 2.0 + offset.dx,
        y: f64::from(canvas.height) / 2.0 + offset.dy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn canvas() -> CanvasDimensions {
        CanvasDimensions::new(800, 600)
    }

    #[test]
    fn canvas_center_maps_to_viewport_center() {
        let viewport = Viewport::default();

        let point = pixel_to_plane(ScreenPoint::new(400.0, 300.0), &viewport, canvas());

        assert_eq!(point, Complex::new(-0.5, 0.0));
    }

    #[test]
    fn left_edge_spans_half_the_stretched_width() {
        let viewport = Viewport::new(0.0, 0.0, 1.0, 100, ColourScheme::Classic).unwrap();

        let left = pixel_to_plane(ScreenPoint::new(0.0, 300.0), &viewport, canvas());
        let top = pixel_to_plane(ScreenPoint::new(400.0, 0.0), &viewport, canvas());

        // 3.5 * (4/3) / 2 and 3.5 / 2
        assert_approx_eq(left.real, -3.5 * (4.0 / 3.0) / 2.0);
        assert_approx_eq(top.imag, -1.75);
    }

    #[test]
    fn pixels_are_square() {
        let viewport = Viewport::default();
        let origin = pixel_to_plane(ScreenPoint::new(100.0, 100.0), &viewport, canvas());
        let right = pixel_to_plane(ScreenPoint::new(101.0, 100.0), &viewport, canvas());
        let down = pixel_to_plane(ScreenPoint::new(100.0, 101.0), &viewport, canvas());

        assert_approx_eq(right.real - origin.real, down.imag - origin.imag);
    }

    #[test]
    fn zoom_shrinks_the_visible_span() {
        let near = Viewport::default().with_zoom(4.0).unwrap();
        let far = Viewport::default();

        let near_delta =
            pixel_delta_to_plane_delta(PixelDelta::new(100.0, 0.0), &near, canvas());
        let far_delta = pixel_delta_to_plane_delta(PixelDelta::new(100.0, 0.0), &far, canvas());

        assert_approx_eq(near_delta.real * 4.0, far_delta.real);
    }

    #[test]
    fn zero_deltas_map_to_zero() {
        let viewport = Viewport::default().with_zoom(1234.5).unwrap();

        assert_eq!(
            pixel_delta_to_plane_delta(PixelDelta::default(), &viewport, canvas()),
            Complex::ZERO
        );
        assert_eq!(
            plane_delta_to_pixel_delta(Complex::ZERO, &viewport, canvas()),
            PixelDelta::default()
        );
    }

    #[test]
    fn plane_to_pixel_inverts_pixel_to_plane() {
        let viewport = Viewport::new(0.3, -0.2, 17.0, 100, ColourScheme::Fire).unwrap();

        for pixel in [
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(123.25, 456.5),
            ScreenPoint::new(799.0, 599.0),
        ] {
            let plane = pixel_to_plane(pixel, &viewport, canvas());
            let back = plane_to_pixel(plane, &viewport, canvas());

            assert!((back.x - pixel.x).abs() < 1e-6, "{:?} -> {:?}", pixel, back);
            assert!((back.y - pixel.y).abs() < 1e-6, "{:?} -> {:?}", pixel, back);
        }
    }

    #[test]
    fn delta_transform_matches_difference_of_absolute_transform() {
        let viewport = Viewport::default().with_zoom(3.0).unwrap();
        let a = ScreenPoint::new(200.0, 150.0);
        let b = ScreenPoint::new(260.0, 110.0);

        let absolute = pixel_to_plane(b, &viewport, canvas()) - pixel_to_plane(a, &viewport, canvas());
        let delta = pixel_delta_to_plane_delta(b - a, &viewport, canvas());

        assert_approx_eq(absolute.real, delta.real);
        assert_approx_eq(absolute.imag, delta.imag);
    }
}
