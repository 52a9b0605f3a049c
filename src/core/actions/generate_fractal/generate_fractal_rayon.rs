use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas::CanvasDimensions;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are computed independently and concatenated in order, so the result
/// is identical to [`generate_fractal`](super::generate_fractal::generate_fractal).
pub fn generate_fractal_rayon<Alg>(canvas: CanvasDimensions, algorithm: &Alg) -> Vec<Alg::Output>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Send,
{
    if canvas.is_empty() {
        return Vec::new();
    }

    let width = canvas.width;
    let rows: Vec<Vec<Alg::Output>> = (0..canvas.height)
        .into_par_iter()
        .map(|y| (0..width).map(|x| algorithm.compute(x, y)).collect())
        .collect();

    let mut results = Vec::with_capacity(canvas.pixel_count());
    for row in rows {
        results.extend(row);
    }
    results
}
