use crate::controllers::render::coordinator::RenderCoordinator;
use crate::controllers::render::data::render_job::RenderJob;
use crate::controllers::render::errors::RenderError;
use crate::core::actions::render_frame::{FrameRenderer, RenderStrategy};
use crate::core::animation::interpolate::interpolate;
use crate::core::animation::keyframes::KeyframeSequence;
use crate::core::animation::playback::{FramePresenter, PlaybackEngine};
use crate::core::data::frame::Frame;
use crate::core::data::grid_size::GridSize;
use crate::core::palette::gradient_palette::GradientPalette;
use crate::presenters::file::frame_sequence::{write_frame_sequence, FrameFormat};
use crate::storage::errors::ExportError;
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Turns a keyframe path into a rendered zoom video.
pub struct CliAnimateController {
    coordinator: RenderCoordinator,
    steps_per_span: u32,
    frames: Vec<Frame>,
}

impl CliAnimateController {
    pub fn new(strategy: RenderStrategy, steps_per_span: u32) -> Result<Self, RenderError> {
        Ok(Self {
            coordinator: RenderCoordinator::new(FrameRenderer::new(strategy))?,
            steps_per_span,
            frames: Vec::new(),
        })
    }

    /// Interpolates `keyframes` and renders every viewport of the path in
    /// order, logging progress as frames complete.
    pub fn generate(
        &mut self,
        keyframes: &KeyframeSequence,
        grid: GridSize,
        palette: Arc<GradientPalette>,
    ) -> Result<&[Frame], RenderError> {
        let path = interpolate(keyframes.as_slice(), self.steps_per_span)?;

        info!(
            "Interpolated {} keyframes into {} viewports",
            keyframes.len(),
            path.len()
        );

        let ticket = self
            .coordinator
            .submit(RenderJob::batch_video(path, grid, palette)?);

        let output = ticket.wait_with_progress(|completed, total| {
            info!("Rendered frame {}/{}", completed, total);
        })?;

        self.frames = output.into_frames();
        Ok(self.frames.as_slice())
    }

    pub fn write(&self, dir: &Path, format: FrameFormat) -> Result<Vec<PathBuf>, ExportError> {
        write_frame_sequence(&self.frames, dir, format)
    }

    /// Plays the rendered frames back at `engine`'s cadence.
    pub fn play<P: FramePresenter + ?Sized>(&self, engine: &PlaybackEngine, presenter: &mut P) {
        engine.play(&self.frames, presenter);
    }
}
