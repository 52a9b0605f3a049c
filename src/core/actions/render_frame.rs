use std::sync::Arc;
use std::time::Instant;

use log::trace;

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, generate_pixel_buffer_rayon,
};
use crate::core::data::canvas::CanvasDimensions;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::clock::{Clock, SystemClock};
use crate::core::fractals::mandelbrot::colour_mapping::map::SchemeColourMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spread rows across the rayon pool. Output is pixel-for-pixel identical
    /// to the single-threaded sweep.
    pub parallel: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Turns a viewport snapshot into a full RGBA frame.
#[derive(Clone)]
pub struct FrameRenderer {
    clock: Arc<dyn Clock>,
    options: RenderOptions,
}

impl FrameRenderer {
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, options: RenderOptions) -> Self {
        Self { clock, options }
    }

    #[must_use]
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    #[must_use]
    pub fn render(&self, viewport: &Viewport, canvas: CanvasDimensions) -> PixelBuffer {
        render_with_clock(viewport, canvas, self.clock.as_ref(), self.options)
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), RenderOptions::default())
    }
}

impl std::fmt::Debug for FrameRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameRenderer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Single-threaded render against the system clock.
#[must_use]
pub fn render(viewport: &Viewport, canvas: CanvasDimensions) -> PixelBuffer {
    render_with_clock(
        viewport,
        canvas,
        &SystemClock,
        RenderOptions { parallel: false },
    )
}

/// Renders every pixel: plane coordinate, escape count, then colour.
///
/// The clock is sampled once, so a time-varying scheme is consistent across
/// the whole frame. Zero-sized canvases yield an empty buffer.
#[must_use]
pub fn render_with_clock(
    viewport: &Viewport,
    canvas: CanvasDimensions,
    clock: &dyn Clock,
    options: RenderOptions,
) -> PixelBuffer {
    if canvas.is_empty() {
        return PixelBuffer::new(canvas);
    }

    let start = Instant::now();
    let algorithm = MandelbrotAlgorithm::new(*viewport, canvas);
    let colour_map = SchemeColourMap::new(
        viewport.colour_scheme(),
        viewport.max_iterations(),
        clock,
    );

    let pixel_buffer = if options.parallel {
        let iterations = generate_fractal_rayon(canvas, &algorithm);
        generate_pixel_buffer_rayon(&iterations, &colour_map, canvas)
    } else {
        let iterations = generate_fractal(canvas, &algorithm);
        generate_pixel_buffer(&iterations, &colour_map, canvas)
    };

    trace!(
        "rendered {}x{} at zoom {:e} in {:?}",
        canvas.width,
        canvas.height,
        viewport.zoom(),
        start.elapsed()
    );

    pixel_buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::colour_mapping::clock::FixedClock;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;

    fn sequential() -> RenderOptions {
        RenderOptions { parallel: false }
    }

    #[test]
    fn buffer_covers_every_pixel_opaquely() {
        let canvas = CanvasDimensions::new(64, 48);
        let buffer = render(&Viewport::default(), canvas);

        assert_eq!(buffer.buffer_size(), 64 * 48 * 4);
        assert!(buffer.buffer().chunks_exact(4).all(|pixel| pixel[3] == 255));
    }

    #[test]
    fn centre_pixel_of_default_view_is_black() {
        let buffer = render(&Viewport::default(), CanvasDimensions::new(800, 600));

        assert_eq!(buffer.pixel(400, 300), Some([0, 0, 0, 255]));
    }

    #[test]
    fn empty_canvas_returns_empty_buffer() {
        assert!(render(&Viewport::default(), CanvasDimensions::new(0, 600)).is_empty());
        assert!(render(&Viewport::default(), CanvasDimensions::new(800, 0)).is_empty());
    }

    #[test]
    fn rendering_is_deterministic_for_fixed_schemes() {
        let canvas = CanvasDimensions::new(40, 30);

        for &scheme in ColourScheme::ALL {
            if scheme.is_time_varying() {
                continue;
            }
            let viewport = Viewport::default().with_colour_scheme(scheme);

            assert_eq!(render(&viewport, canvas), render(&viewport, canvas), "{}", scheme);
        }
    }

    #[test]
    fn parallel_sweep_matches_sequential_sweep() {
        let canvas = CanvasDimensions::new(121, 67);
        let viewport = Viewport::new(-0.74, 0.13, 40.0, 300, ColourScheme::Sunset).unwrap();
        let clock = FixedClock(0.0);

        assert_eq!(
            render_with_clock(&viewport, canvas, &clock, RenderOptions { parallel: true }),
            render_with_clock(&viewport, canvas, &clock, sequential())
        );
    }

    #[test]
    fn psychedelic_frame_is_reproducible_with_fixed_clock() {
        let canvas = CanvasDimensions::new(32, 24);
        let viewport = Viewport::default().with_colour_scheme(ColourScheme::Psychedelic);

        let first = render_with_clock(&viewport, canvas, &FixedClock(5.0), sequential());
        let again = render_with_clock(&viewport, canvas, &FixedClock(5.0), sequential());
        let later = render_with_clock(&viewport, canvas, &FixedClock(6.0), sequential());

        assert_eq!(first, again);
        assert_ne!(first, later);
    }

    #[test]
    fn renderer_does_not_alter_the_viewport() {
        let viewport = Viewport::default().with_zoom(3.0).unwrap();
        let snapshot = viewport;
        let renderer = FrameRenderer::new(Arc::new(FixedClock(0.0)), sequential());

        let _ = renderer.render(&viewport, CanvasDimensions::new(16, 16));

        assert_eq!(viewport, snapshot);
    }
}
