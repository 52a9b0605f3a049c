use std::ops::Sub;

/// A position in canvas-pixel space. Pointer positions may be fractional.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        let delta = other - self;
        (delta.dx * delta.dx + delta.dy * delta.dy).sqrt()
    }
}

/// Displacement between two screen positions, in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PixelDelta {
    pub dx: f64,
    pub dy: f64,
}

impl PixelDelta {
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

impl Sub for ScreenPoint {
    type Output = PixelDelta;

    fn sub(self, other: Self) -> PixelDelta {
        PixelDelta {
            dx: self.x - other.x,
            dy: self.y - other.y,
        }
    }
}
