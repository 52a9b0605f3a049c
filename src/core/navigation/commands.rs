use thiserror::Error;

use crate::core::data::canvas::CanvasDimensions;
use crate::core::data::screen_point::{PixelDelta, ScreenPoint};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::util::pixel_to_complex_coords::{pixel_delta_to_plane_delta, pixel_to_plane};

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NavigationError {
    #[error("zoom factor must be a positive finite number, got {0}")]
    InvalidZoomFactor(f64),
    #[error(transparent)]
    Viewport(#[from] ViewportError),
}

/// Multiplies the zoom by `factor`, keeping the centre.
pub fn zoom_by(viewport: Viewport, factor: f64) -> Result<Viewport, NavigationError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(NavigationError::InvalidZoomFactor(factor));
    }

    Ok(viewport.with_zoom(viewport.zoom() * factor)?)
}

/// Shifts the centre against the drag so the content follows the pointer.
pub fn pan_by(
    viewport: Viewport,
    delta: PixelDelta,
    canvas: CanvasDimensions,
) -> Result<Viewport, NavigationError> {
    let plane_delta = pixel_delta_to_plane_delta(delta, &viewport, canvas);

    Ok(viewport.with_center(viewport.center() - plane_delta)?)
}

/// Re-centres on the plane point under `pixel` and zooms in by `factor`.
pub fn click_zoom(
    viewport: Viewport,
    pixel: ScreenPoint,
    canvas: CanvasDimensions,
    factor: f64,
) -> Result<Viewport, NavigationError> {
    let target = pixel_to_plane(pixel, &viewport, canvas);
    let recentred = viewport.with_center(target)?;

    zoom_by(recentred, factor)
}
