/// Per-pixel computation over a canvas. Implementations must be pure so a
/// sweep can visit pixels in any order (or in parallel) and still produce the
/// same raster.
pub trait FractalAlgorithm {
    type Output;

    fn compute(&self, x: u32, y: u32) -> Self::Output;
}
