use crate::core::data::screen_point::ScreenPoint;

/// Size of the drawing surface in pixels, owned by the host.
///
/// Zero-sized canvases are allowed; they simply have no pixels to render.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CanvasDimensions {
    pub width: u32,
    pub height: u32,
}

impl CanvasDimensions {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    #[must_use]
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint {
            x: f64::from(self.width) / 2.0,
            y: f64::from(self.height) / 2.0,
        }
    }
}
