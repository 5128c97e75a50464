use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, GeneratePixelBufferError,
};
use crate::core::data::frame::Frame;
use crate::core::data::grid_size::GridSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::palette::gradient_palette::GradientPalette;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// How the per-pixel escape loop is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderStrategy {
    /// One row-major loop on the calling thread.
    Serial,
    /// Rows spread over the rayon thread pool.
    #[default]
    Parallel,
}

/// Renders whole frames of the Mandelbrot set through a gradient palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameRenderer {
    strategy: RenderStrategy,
}

impl FrameRenderer {
    #[must_use]
    pub fn new(strategy: RenderStrategy) -> Self {
        Self { strategy }
    }

    /// Classifies every pixel of `grid` laid over `viewport` and colours it
    /// from `palette`. The elapsed wall time is recorded on the frame.
    pub fn render(
        &self,
        viewport: Viewport,
        grid: GridSize,
        palette: &GradientPalette,
    ) -> Result<Frame, GeneratePixelBufferError> {
        let start = Instant::now();
        let algorithm = MandelbrotAlgorithm::new(grid, viewport);

        let escape_counts = match self.strategy {
            RenderStrategy::Serial => generate_fractal_serial(grid, &algorithm),
            RenderStrategy::Parallel => generate_fractal_parallel_rayon(grid, &algorithm),
        }
        .unwrap_or_else(|never| match never {});

        let pixel_buffer = generate_pixel_buffer(escape_counts, palette, grid)?;

        Ok(Frame {
            pixel_buffer,
            viewport,
            render_duration: start.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    fn grid() -> GridSize {
        GridSize::new(500, 400).unwrap()
    }

    #[test]
    fn test_render_produces_full_rgba_buffer() {
        let frame = FrameRenderer::default()
            .render(Viewport::default(), GridSize::new(20, 10).unwrap(), &GradientPalette::grayscale())
            .unwrap();

        assert_eq!(frame.pixel_buffer.buffer_size(), 20 * 10 * 4);
        assert_eq!(frame.viewport, Viewport::default());
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = FrameRenderer::new(RenderStrategy::Parallel);
        let palette = GradientPalette::grayscale();

        let first = renderer.render(Viewport::default(), grid(), &palette).unwrap();
        let second = renderer.render(Viewport::default(), grid(), &palette).unwrap();

        assert_eq!(first.pixel_buffer.buffer(), second.pixel_buffer.buffer());
    }

    #[test]
    fn test_serial_and_parallel_strategies_agree() {
        let palette = GradientPalette::grayscale();
        let viewport = Viewport::new(-0.8, -0.7, 0.05, 0.15).unwrap();
        let grid = GridSize::new(120, 90).unwrap();

        let serial = FrameRenderer::new(RenderStrategy::Serial)
            .render(viewport, grid, &palette)
            .unwrap();
        let parallel = FrameRenderer::new(RenderStrategy::Parallel)
            .render(viewport, grid, &palette)
            .unwrap();

        assert_eq!(serial.pixel_buffer, parallel.pixel_buffer);
    }

    #[test]
    fn test_pixel_inside_set_gets_last_palette_colour() {
        let frame = FrameRenderer::default()
            .render(Viewport::default(), grid(), &GradientPalette::grayscale())
            .unwrap();

        assert_eq!(
            frame.pixel_buffer.get_pixel(Point { x: 166, y: 200 }).unwrap(),
            Colour::grey(254)
        );
        assert_eq!(
            frame.pixel_buffer.get_pixel(Point { x: 0, y: 0 }).unwrap(),
            Colour::grey(0)
        );
    }
}
