use crate::core::data::canvas::CanvasDimensions;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::commands::NavigationError;
use crate::core::navigation::limits::NavigationLimits;
use crate::core::util::pixel_to_complex_coords::pixel_to_plane;

/// One dive tick: ease the centre a fixed fraction of the way toward the
/// plane point under `target`, then grow the zoom geometrically.
///
/// The target is resolved against the viewport as it stands before the tick,
/// so a stationary pointer still drifts in plane space as the view tightens.
pub fn step_dive(
    viewport: Viewport,
    target: ScreenPoint,
    canvas: CanvasDimensions,
    limits: &NavigationLimits,
) -> Result<Viewport, NavigationError> {
    let center = viewport.center();
    let aim = pixel_to_plane(target, &viewport, canvas);
    let eased = center + (aim - center).scale(limits.dive_approach);

    let moved = viewport.with_center(eased)?;
    Ok(moved.with_zoom(moved.zoom() * limits.dive_zoom_per_tick)?)
}
