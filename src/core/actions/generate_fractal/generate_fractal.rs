use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas::CanvasDimensions;

/// Evaluates `algorithm` for every pixel in raster order on the calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    canvas: CanvasDimensions,
    algorithm: &Alg,
) -> Vec<Alg::Output> {
    if canvas.is_empty() {
        return Vec::new();
    }

    (0..canvas.height)
        .flat_map(|y| (0..canvas.width).map(move |x| (x, y)))
        .map(|(x, y)| algorithm.compute(x, y))
        .collect()
}
