use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::dive::scheduler::{RenderScheduler, SchedulerAction};
use crate::controllers::interactive::dive::ticker::{DiveTicker, TickReport};
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::controllers::interactive::ports::navigation_observer::NavigationObserver;
use crate::controllers::interactive::worker::RenderWorker;
use crate::core::actions::render_frame::FrameRenderer;
use crate::core::data::canvas::CanvasDimensions;
use crate::core::data::landmarks::Landmark;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::navigation::commands::NavigationError;
use crate::core::navigation::controller::NavigationController;
use crate::core::navigation::limits::NavigationLimits;
use crate::core::navigation::pointer::{PointerEvent, PointerModifiers};
use crate::core::navigation::status::{NavigationMode, ViewportChange, ZoomProgress};

/// The entry point a presentation layer drives.
///
/// Input goes to the [`NavigationController`]. Each resulting viewport is
/// reported to the registered observers and queued for a background render
/// whose frame arrives at the [`FrameSink`]. A host calls [`advance`] once
/// per animation frame with the time since the last call so dives progress.
///
/// [`advance`]: ExplorerSession::advance
pub struct ExplorerSession {
    navigation: NavigationController,
    ticker: DiveTicker,
    scheduler: RenderScheduler,
    worker: RenderWorker,
    renderer: FrameRenderer,
    observers: Vec<Arc<dyn NavigationObserver>>,
}

impl ExplorerSession {
    pub fn new(
        canvas: CanvasDimensions,
        limits: NavigationLimits,
        renderer: FrameRenderer,
        sink: Arc<dyn FrameSink>,
    ) -> Self {
        Self::with_viewport(Viewport::default(), canvas, limits, renderer, sink)
    }

    pub fn with_viewport(
        viewport: Viewport,
        canvas: CanvasDimensions,
        limits: NavigationLimits,
        renderer: FrameRenderer,
        sink: Arc<dyn FrameSink>,
    ) -> Self {
        Self {
            ticker: DiveTicker::new(&limits),
            navigation: NavigationController::with_viewport(viewport, canvas, limits),
            scheduler: RenderScheduler::new(),
            worker: RenderWorker::new(renderer.clone(), sink),
            renderer,
            observers: Vec::new(),
        }
    }

    pub fn add_observer(&mut self, observer: Arc<dyn NavigationObserver>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.navigation.viewport()
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasDimensions {
        self.navigation.canvas()
    }

    #[must_use]
    pub fn mode(&self) -> NavigationMode {
        self.navigation.mode()
    }

    #[must_use]
    pub fn progress(&self) -> ZoomProgress {
        self.navigation.progress()
    }

    #[must_use]
    pub fn is_diving(&self) -> bool {
        self.navigation.is_diving()
    }

    #[must_use]
    pub fn limits(&self) -> &NavigationLimits {
        self.navigation.limits()
    }

    /// The spinner signal: a frame is being rendered or is waiting its turn.
    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.worker.is_rendering() || self.scheduler.is_waiting()
    }

    /// Renders `viewport` right away on the calling thread.
    #[must_use]
    pub fn request_render(&self, viewport: &Viewport, canvas: CanvasDimensions) -> PixelBuffer {
        self.renderer.render(viewport, canvas)
    }

    /// Queues a background render of the current view.
    pub fn refresh(&mut self) -> SchedulerAction {
        let request = RenderRequest::new(self.navigation.viewport(), self.navigation.canvas());
        let diving = self.navigation.is_diving();
        let worker = &self.worker;

        self.scheduler.request(
            request,
            diving,
            worker.last_completed_generation(),
            |request| worker.submit(request),
        )
    }

    pub fn resize(&mut self, canvas: CanvasDimensions) -> SchedulerAction {
        debug!("canvas resized to {}x{}", canvas.width, canvas.height);
        self.navigation.set_canvas(canvas);
        self.refresh()
    }

    pub fn dispatch(&mut self, event: PointerEvent) -> Option<ViewportChange> {
        let was_diving = self.navigation.is_diving();
        let change = self.navigation.dispatch(event);

        let dive_changed = self.navigation.is_diving() != was_diving;
        if dive_changed {
            self.ticker.reset();
        }
        match change {
            Some(change) => self.publish(change),
            None if dive_changed && was_diving => {
                self.refresh();
            }
            None => {}
        }

        change
    }

    pub fn dispatch_pointer_down(
        &mut self,
        position: ScreenPoint,
        modifiers: PointerModifiers,
    ) -> Option<ViewportChange> {
        self.dispatch(PointerEvent::Down {
            position,
            modifiers,
        })
    }

    pub fn dispatch_pointer_move(&mut self, position: ScreenPoint) -> Option<ViewportChange> {
        self.dispatch(PointerEvent::Move { position })
    }

    pub fn dispatch_pointer_up(&mut self, position: ScreenPoint) -> Option<ViewportChange> {
        self.dispatch(PointerEvent::Up { position })
    }

    pub fn set_colour_scheme(&mut self, scheme: ColourScheme) -> ViewportChange {
        let change = self.navigation.set_colour_scheme(scheme);
        self.publish(change);
        change
    }

    /// Sets the iteration cap, clamped to the range in [`NavigationLimits`].
    pub fn set_iteration_cap(&mut self, requested: u32) -> ViewportChange {
        let change = self.navigation.set_iteration_cap(requested);
        self.publish(change);
        change
    }

    /// Starts or stops the dive. Stopping sends the current view straight to
    /// the worker in place of any dive frame still held back.
    pub fn toggle_dive(&mut self) -> bool {
        self.ticker.reset();
        let diving = self.navigation.toggle_dive();
        if !diving {
            self.refresh();
        }
        diving
    }

    pub fn jump_to(&mut self, x: f64, y: f64, zoom: f64) -> Result<ViewportChange, NavigationError> {
        let change = self.navigation.jump_to(x, y, zoom)?;
        self.publish(change);
        Ok(change)
    }

    pub fn jump_to_landmark(&mut self, landmark: &Landmark) -> Result<ViewportChange, NavigationError> {
        debug!("jumping to landmark {}", landmark.name);
        self.jump_to(landmark.center.real, landmark.center.imag, landmark.zoom)
    }

    pub fn zoom_in(&mut self, factor: f64) -> Result<ViewportChange, NavigationError> {
        let change = self.navigation.zoom_in(factor)?;
        self.publish(change);
        Ok(change)
    }

    pub fn zoom_out(&mut self, factor: f64) -> Result<ViewportChange, NavigationError> {
        let change = self.navigation.zoom_out(factor)?;
        self.publish(change);
        Ok(change)
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) -> Result<ViewportChange, NavigationError> {
        let change = self.navigation.pan_by(dx, dy)?;
        self.publish(change);
        Ok(change)
    }

    /// Back to the default view. The best zoom reached is kept.
    pub fn reset(&mut self) -> ViewportChange {
        self.ticker.reset();
        let change = self.navigation.reset();
        self.publish(change);
        change
    }

    /// Runs the dive ticks owed for `elapsed` and submits any render that was
    /// held back while the previous frame was in flight.
    pub fn advance(&mut self, elapsed: Duration) -> TickReport {
        let report = if self.navigation.is_diving() {
            let navigation = &mut self.navigation;
            let observers = &self.observers;

            self.ticker.advance(elapsed, || {
                let change = navigation.dive_tick()?;
                for observer in observers {
                    observer.viewport_changed(&change);
                }
                Some(change)
            })
        } else {
            self.ticker.reset();
            TickReport::default()
        };

        if report.state_changed() {
            self.refresh();
        } else {
            let worker = &self.worker;
            self.scheduler
                .flush(worker.last_completed_generation(), |request| {
                    worker.submit(request)
                });
        }

        report
    }

    fn publish(&mut self, change: ViewportChange) {
        for observer in &self.observers {
            observer.viewport_changed(&change);
        }
        self.refresh();
    }
}
