use crate::core::data::canvas::CanvasDimensions;
use crate::core::data::viewport::Viewport;

/// Everything one render job needs: a viewport snapshot and the canvas size.
///
/// `PartialEq` lets callers skip a render when nothing has changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub canvas: CanvasDimensions,
}

impl RenderRequest {
    #[must_use]
    pub fn new(viewport: Viewport, canvas: CanvasDimensions) -> Self {
        Self { viewport, canvas }
    }
}
