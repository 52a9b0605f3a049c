use log::{debug, warn};

use crate::core::data::canvas::CanvasDimensions;
use crate::core::data::complex::Complex;
use crate::core::data::screen_point::{PixelDelta, ScreenPoint};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::navigation::commands::{self, NavigationError};
use crate::core::navigation::dive::step_dive;
use crate::core::navigation::limits::NavigationLimits;
use crate::core::navigation::pointer::{PointerEvent, PointerModifiers};
use crate::core::navigation::status::{DragState, NavigationMode, ViewportChange, ZoomProgress};

/// Owns the current viewport and moves it in response to commands.
///
/// Every command computes a whole new [`Viewport`] and swaps it in; callers
/// only ever see complete snapshots through [`ViewportChange`].
#[derive(Debug, Clone)]
pub struct NavigationController {
    viewport: Viewport,
    canvas: CanvasDimensions,
    mode: NavigationMode,
    limits: NavigationLimits,
    last_pointer: Option<ScreenPoint>,
    max_zoom: f64,
}

impl NavigationController {
    #[must_use]
    pub fn new(canvas: CanvasDimensions, limits: NavigationLimits) -> Self {
        Self::with_viewport(Viewport::default(), canvas, limits)
    }

    #[must_use]
    pub fn with_viewport(
        viewport: Viewport,
        canvas: CanvasDimensions,
        limits: NavigationLimits,
    ) -> Self {
        Self {
            viewport,
            canvas,
            mode: NavigationMode::Idle,
            limits,
            last_pointer: None,
            max_zoom: viewport.zoom(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasDimensions {
        self.canvas
    }

    #[must_use]
    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    #[must_use]
    pub fn limits(&self) -> &NavigationLimits {
        &self.limits
    }

    #[must_use]
    pub fn is_diving(&self) -> bool {
        matches!(self.mode, NavigationMode::Diving { .. })
    }

    #[must_use]
    pub fn zoom_target(&self) -> Option<ScreenPoint> {
        match self.mode {
            NavigationMode::Diving { target } => Some(target),
            _ => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> ZoomProgress {
        ZoomProgress {
            zoom: self.viewport.zoom(),
            max_zoom: self.max_zoom,
        }
    }

    pub fn set_canvas(&mut self, canvas: CanvasDimensions) {
        self.canvas = canvas;
    }

    pub fn zoom_in(&mut self, factor: f64) -> Result<ViewportChange, NavigationError> {
        let next = commands::zoom_by(self.viewport, factor)?;
        Ok(self.publish(next))
    }

    pub fn zoom_out(&mut self, factor: f64) -> Result<ViewportChange, NavigationError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(NavigationError::InvalidZoomFactor(factor));
        }

        let next = commands::zoom_by(self.viewport, factor.recip())?;
        Ok(self.publish(next))
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) -> Result<ViewportChange, NavigationError> {
        let next = commands::pan_by(self.viewport, PixelDelta::new(dx, dy), self.canvas)?;
        Ok(self.publish(next))
    }

    pub fn click_zoom(&mut self, pixel: ScreenPoint) -> Result<ViewportChange, NavigationError> {
        let next = commands::click_zoom(
            self.viewport,
            pixel,
            self.canvas,
            self.limits.click_zoom_factor,
        )?;
        debug!("click-zoom at ({}, {}) -> zoom {}", pixel.x, pixel.y, next.zoom());
        Ok(self.publish(next))
    }

    pub fn jump_to(&mut self, x: f64, y: f64, zoom: f64) -> Result<ViewportChange, NavigationError> {
        let next = self
            .viewport
            .with_center(Complex::new(x, y))?
            .with_zoom(zoom)?;
        debug!("jump to ({}, {}) at zoom {}", x, y, zoom);
        Ok(self.publish(next))
    }

    /// Restores the default view, dropping any drag or dive in progress.
    pub fn reset(&mut self) -> ViewportChange {
        self.mode = NavigationMode::Idle;
        debug!("view reset");
        self.publish(Viewport::default())
    }

    pub fn set_colour_scheme(&mut self, scheme: ColourScheme) -> ViewportChange {
        let next = self.viewport.with_colour_scheme(scheme);
        self.publish(next)
    }

    /// Applies the iteration cap after clamping it to the policy range.
    pub fn set_iteration_cap(&mut self, requested: u32) -> ViewportChange {
        let cap = self.limits.clamp_iteration_cap(requested);
        if cap != requested {
            warn!("iteration cap {} clamped to {}", requested, cap);
        }

        // the clamp keeps the cap at or above `min_iteration_cap`, but a
        // hand-built limits table may allow zero
        let next = self
            .viewport
            .with_max_iterations(cap.max(1))
            .unwrap_or(self.viewport);
        self.publish(next)
    }

    /// Switches dive mode on or off and returns whether it is now on.
    pub fn toggle_dive(&mut self) -> bool {
        if self.is_diving() {
            self.mode = NavigationMode::Idle;
            debug!("dive off");
            false
        } else {
            let target = self.last_pointer.unwrap_or_else(|| self.canvas.center());
            self.mode = NavigationMode::Diving { target };
            debug!("dive on, target ({}, {})", target.x, target.y);
            true
        }
    }

    /// Advances the dive by one tick. Outside dive mode this does nothing.
    pub fn dive_tick(&mut self) -> Option<ViewportChange> {
        let NavigationMode::Diving { target } = self.mode else {
            return None;
        };

        match step_dive(self.viewport, target, self.canvas, &self.limits) {
            Ok(next) => Some(self.publish(next)),
            Err(err) => {
                warn!("dive tick rejected: {}", err);
                None
            }
        }
    }

    pub fn dispatch(&mut self, event: PointerEvent) -> Option<ViewportChange> {
        match event {
            PointerEvent::Down {
                position,
                modifiers,
            } => self.pointer_down(position, modifiers),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position } => self.pointer_up(position),
        }
    }

    pub fn pointer_down(
        &mut self,
        position: ScreenPoint,
        modifiers: PointerModifiers,
    ) -> Option<ViewportChange> {
        self.last_pointer = Some(position);

        if modifiers.dive {
            self.toggle_dive();
            return None;
        }

        if self.mode == NavigationMode::Idle {
            self.mode = NavigationMode::Dragging(DragState {
                origin: position,
                last: position,
                viewport_at_origin: self.viewport,
            });
            debug!("drag start at ({}, {})", position.x, position.y);
        }

        None
    }

    pub fn pointer_move(&mut self, position: ScreenPoint) -> Option<ViewportChange> {
        self.last_pointer = Some(position);

        match self.mode {
            NavigationMode::Idle => None,
            NavigationMode::Diving { .. } => {
                self.mode = NavigationMode::Diving { target: position };
                None
            }
            NavigationMode::Dragging(drag) => {
                let delta = position - drag.last;
                self.mode = NavigationMode::Dragging(DragState {
                    last: position,
                    ..drag
                });

                match commands::pan_by(self.viewport, delta, self.canvas) {
                    Ok(next) => Some(self.publish(next)),
                    Err(err) => {
                        warn!("pan rejected: {}", err);
                        None
                    }
                }
            }
        }
    }

    /// Ends a drag. Short drags count as clicks: the pre-drag view is put
    /// back and a click-zoom happens at the release point instead.
    pub fn pointer_up(&mut self, position: ScreenPoint) -> Option<ViewportChange> {
        self.last_pointer = Some(position);

        let NavigationMode::Dragging(drag) = self.mode else {
            return None;
        };
        self.mode = NavigationMode::Idle;

        if drag.origin.distance_to(position) >= self.limits.click_threshold_px {
            debug!("drag end at ({}, {})", position.x, position.y);
            return None;
        }

        self.viewport = drag.viewport_at_origin;
        match self.click_zoom(position) {
            Ok(change) => Some(change),
            Err(err) => {
                warn!("click-zoom rejected: {}", err);
                Some(self.publish(drag.viewport_at_origin))
            }
        }
    }

    fn publish(&mut self, next: Viewport) -> ViewportChange {
        self.viewport = next;
        if next.zoom() > self.max_zoom {
            self.max_zoom = next.zoom();
        }

        ViewportChange {
            viewport: next,
            progress: self.progress(),
        }
    }
}
