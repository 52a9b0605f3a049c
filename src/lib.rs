//! Mandelbrot escape-time rendering with pan, click-zoom and continuous dive
//! navigation.
//!
//! [`crate::core`] holds the pure engine: viewport model, plane transform,
//! escape-time evaluator, colour schemes, frame renderer and the navigation
//! state machine. [`controllers::interactive`] runs it behind a background
//! render worker for a presentation layer to drive.

pub mod controllers;
pub mod core;

pub use crate::controllers::interactive::{
    ExplorerSession, FrameData, FrameSink, NavigationObserver, RenderEvent, RenderWorker,
};
pub use crate::core::actions::render_frame::{FrameRenderer, RenderOptions, render, render_with_clock};
pub use crate::core::data::canvas::CanvasDimensions;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::landmarks::{LANDMARKS, Landmark, find_landmark};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::screen_point::{PixelDelta, ScreenPoint};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::escape_time;
pub use crate::core::fractals::mandelbrot::colour_mapping::{
    Clock, ColourScheme, FixedClock, SystemClock, colour_at, colour_for,
};
pub use crate::core::navigation::{
    NavigationController, NavigationError, NavigationLimits, NavigationMode, PointerEvent,
    PointerModifiers, ViewportChange, ZoomProgress,
};
pub use crate::core::util::pixel_to_complex_coords::{
    pixel_delta_to_plane_delta, pixel_to_plane, plane_delta_to_pixel_delta, plane_to_pixel,
};
