use crate::controllers::render::errors::RenderError;
use crate::core::actions::render_frame::FrameRenderer;
use crate::core::data::frame::Frame;
use crate::core::data::grid_size::GridSize;
use crate::core::data::viewport::Viewport;
use crate::core::palette::gradient_palette::GradientPalette;

/// Renders one frame on behalf of the coordinator's worker thread.
pub trait FrameRenderPort: Send + 'static {
    fn render_frame(
        &self,
        viewport: Viewport,
        grid: GridSize,
        palette: &GradientPalette,
    ) -> Result<Frame, RenderError>;
}

impl FrameRenderPort for FrameRenderer {
    fn render_frame(
        &self,
        viewport: Viewport,
        grid: GridSize,
        palette: &GradientPalette,
    ) -> Result<Frame, RenderError> {
        Ok(self.render(viewport, grid, palette)?)
    }
}
