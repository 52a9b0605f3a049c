use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;

pub const DEFAULT_CENTER_X: f64 = -0.5;
pub const DEFAULT_CENTER_Y: f64 = 0.0;
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ViewportError {
    #[error("zoom must be a positive finite number, got {0}")]
    NonPositiveZoom(f64),
    #[error("viewport centre must be finite")]
    NonFiniteCoordinate,
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

/// Everything needed to render one frame: which part of the plane, at what
/// magnification, with which iteration cap and colouring.
///
/// Viewports are plain values. Every navigation command builds a new one, so
/// a snapshot handed to the renderer can never change underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ViewportFields")]
pub struct Viewport {
    center_x: f64,
    center_y: f64,
    zoom: f64,
    max_iterations: u32,
    colour_scheme: ColourScheme,
}

#[derive(Deserialize)]
struct ViewportFields {
    center_x: f64,
    center_y: f64,
    zoom: f64,
    max_iterations: u32,
    #[serde(default)]
    colour_scheme: ColourScheme,
}

impl TryFrom<ViewportFields> for Viewport {
    type Error = ViewportError;

    fn try_from(fields: ViewportFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.center_x,
            fields.center_y,
            fields.zoom,
            fields.max_iterations,
            fields.colour_scheme,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center_x: DEFAULT_CENTER_X,
            center_y: DEFAULT_CENTER_Y,
            zoom: DEFAULT_ZOOM,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_scheme: ColourScheme::Classic,
        }
    }
}

impl Viewport {
    pub fn new(
        center_x: f64,
        center_y: f64,
        zoom: f64,
        max_iterations: u32,
        colour_scheme: ColourScheme,
    ) -> Result<Self, ViewportError> {
        validate_center(center_x, center_y)?;
        validate_zoom(zoom)?;

        if max_iterations == 0 {
            return Err(ViewportError::ZeroMaxIterations);
        }

        Ok(Self {
            center_x,
            center_y,
            zoom,
            max_iterations,
            colour_scheme,
        })
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(self.center_x, self.center_y)
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn colour_scheme(&self) -> ColourScheme {
        self.colour_scheme
    }

    pub fn with_center(self, center: Complex) -> Result<Self, ViewportError> {
        validate_center(center.real, center.imag)?;

        Ok(Self {
            center_x: center.real,
            center_y: center.imag,
            ..self
        })
    }

    pub fn with_zoom(self, zoom: f64) -> Result<Self, ViewportError> {
        validate_zoom(zoom)?;

        Ok(Self { zoom, ..self })
    }

    pub fn with_max_iterations(self, max_iterations: u32) -> Result<Self, ViewportError> {
        if max_iterations == 0 {
            return Err(ViewportError::ZeroMaxIterations);
        }

        Ok(Self {
            max_iterations,
            ..self
        })
    }

    #[must_use]
    pub fn with_colour_scheme(self, colour_scheme: ColourScheme) -> Self {
        Self {
            colour_scheme,
            ..self
        }
    }
}

fn validate_center(center_x: f64, center_y: f64) -> Result<(), ViewportError> {
    if center_x.is_finite() && center_y.is_finite() {
        Ok(())
    } else {
        Err(ViewportError::NonFiniteCoordinate)
    }
}

fn validate_zoom(zoom: f64) -> Result<(), ViewportError> {
    if zoom.is_finite() && zoom > 0.0 {
        Ok(())
    } else {
        Err(ViewportError::NonPositiveZoom(zoom))
    }
}
