use crate::controllers::render::data::render_job::{RenderJob, RenderMode};
use crate::controllers::render::errors::RenderError;
use crate::core::data::colour::Colour;
use crate::core::data::grid_size::GridSize;
use crate::core::data::viewport::{Viewport, ViewportBounds};
use crate::core::palette::gradient_palette::GradientPalette;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A render request as it arrives from outside the process, before any
/// validation.
///
/// Dimensions are signed on the wire so that a negative width is reported
/// as invalid grid dimensions rather than as a malformed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub mode: RenderMode,
    pub viewport: ViewportBounds,
    pub width: i64,
    pub height: i64,
    pub gradient: Vec<[u8; 4]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<ViewportBounds>>,
}

impl RenderRequest {
    /// Checks every field and builds the job the worker will run.
    ///
    /// Batch requests render `path`; single-frame requests render `viewport`
    /// and ignore any path.
    pub fn into_job(self) -> Result<RenderJob, RenderError> {
        let viewport = Viewport::try_from(self.viewport)?;
        let grid = GridSize::new(grid_dimension(self.width), grid_dimension(self.height))?;
        let colours = self.gradient.into_iter().map(Colour::from).collect();
        let palette = Arc::new(GradientPalette::from_colours(colours)?);

        match self.mode {
            RenderMode::SingleFrame => Ok(RenderJob::single_frame(viewport, grid, palette)),
            RenderMode::BatchVideo => {
                let path = self
                    .path
                    .unwrap_or_default()
                    .into_iter()
                    .map(Viewport::try_from)
                    .collect::<Result<Vec<_>, _>>()?;

                RenderJob::batch_video(path, grid, palette)
            }
        }
    }
}

/// Dimensions outside `u32` map to 0, which `GridSize` rejects.
fn grid_dimension(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
