use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work: each row is computed sequentially by one
/// rayon task, and the rows are stitched back together in row-major order,
/// so the output matches [`generate_fractal_serial`] exactly.
///
/// [`generate_fractal_serial`]: crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial
pub fn generate_fractal_parallel_rayon<Alg>(
    grid: GridSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let row_width = grid.width() as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..grid.height())
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for x in 0..grid.width() {
                row.push(algorithm.compute(Point { x, y })?);
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
