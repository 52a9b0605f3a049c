use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::viewport::Viewport;

/// What the navigation state machine is currently doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationMode {
    Idle,
    Dragging(DragState),
    /// Continuous zoom chasing `target`, the latest pointer position.
    Diving { target: ScreenPoint },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub origin: ScreenPoint,
    pub last: ScreenPoint,
    /// Viewport as it was at pointer-down; restored if the drag turns out to
    /// be a click.
    pub viewport_at_origin: Viewport,
}

/// Zoom figures reported to whoever tracks achievements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomProgress {
    pub zoom: f64,
    pub max_zoom: f64,
}

/// A freshly published viewport snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportChange {
    pub viewport: Viewport,
    pub progress: ZoomProgress,
}
