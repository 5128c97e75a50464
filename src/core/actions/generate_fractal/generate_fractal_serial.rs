use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;

/// Evaluates `algorithm` for every pixel of `grid` in row-major order on the
/// calling thread.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    grid: GridSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (0..grid.height())
        .flat_map(|y| (0..grid.width()).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    struct RowMajorIndex {
        width: u32,
    }

    impl FractalAlgorithm for RowMajorIndex {
        type Success = u32;
        type Failure = Infallible;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(pixel.y * self.width + pixel.x)
        }
    }

    #[test]
    fn test_serial_visits_every_pixel_in_row_major_order() {
        let grid = GridSize::new(4, 3).unwrap();
        let results = generate_fractal_serial(grid, &RowMajorIndex { width: 4 }).unwrap();

        assert_eq!(results, (0..12).collect::<Vec<u32>>());
    }

    #[test]
    fn test_serial_single_pixel_grid() {
        let grid = GridSize::new(1, 1).unwrap();
        let results = generate_fractal_serial(grid, &RowMajorIndex { width: 1 }).unwrap();

        assert_eq!(results, vec![0]);
    }
}
