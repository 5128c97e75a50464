use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::escape_time::escape_count;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use std::convert::Infallible;

/// Escape-time Mandelbrot over one viewport laid onto one pixel grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    grid: GridSize,
    viewport: Viewport,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.grid, &self.viewport);

        Ok(escape_count(c))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(grid: GridSize, viewport: Viewport) -> Self {
        Self { grid, viewport }
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
