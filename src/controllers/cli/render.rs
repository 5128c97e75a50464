use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::render::coordinator::RenderCoordinator;
use crate::controllers::render::data::render_job::RenderJob;
use crate::controllers::render::errors::RenderError;
use crate::controllers::render::latest_frame::LatestFrameSlot;
use crate::core::actions::render_frame::{FrameRenderer, RenderStrategy};
use crate::core::data::frame::Frame;
use crate::core::data::grid_size::GridSize;
use crate::core::data::viewport::Viewport;
use crate::core::palette::gradient_palette::GradientPalette;
use crate::storage::errors::ExportError;
use log::{debug, info};
use std::path::Path;
use std::sync::Arc;

/// Renders one viewport in the background and writes it out through a file
/// presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    coordinator: RenderCoordinator,
    latest: LatestFrameSlot,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, strategy: RenderStrategy) -> Result<Self, RenderError> {
        Ok(Self {
            presenter,
            coordinator: RenderCoordinator::new(FrameRenderer::new(strategy))?,
            latest: LatestFrameSlot::new(),
        })
    }

    pub fn generate(
        &mut self,
        viewport: Viewport,
        grid: GridSize,
        palette: Arc<GradientPalette>,
    ) -> Result<&Frame, RenderError> {
        info!(
            "Rendering {} at {}x{}",
            viewport,
            grid.width(),
            grid.height()
        );

        let ticket = self
            .coordinator
            .submit(RenderJob::single_frame(viewport, grid, palette));
        let job_id = ticket.job_id();

        let frame = ticket.wait()?.into_frames().pop().ok_or_else(|| {
            RenderError::WorkerCommunicationFailure {
                job_id,
                reason: "job finished without a frame".to_string(),
            }
        })?;

        info!("Rendered in {} ms", frame.elapsed_millis());

        if !self.latest.offer(job_id, frame) {
            debug!("Dropped stale frame from job {}", job_id);
        }

        self.latest
            .frame()
            .ok_or_else(|| RenderError::WorkerCommunicationFailure {
                job_id,
                reason: "no frame to present".to_string(),
            })
    }

    /// Writes the last generated frame. Does nothing if none was generated.
    pub fn write(&self, filepath: &Path) -> Result<(), ExportError> {
        if let Some(frame) = self.latest.frame() {
            self.presenter.present(frame, filepath)?;
            info!("Saved to {}", filepath.display());
        }

        Ok(())
    }

    #[must_use]
    pub fn frame(&self) -> Option<&Frame> {
        self.latest.frame()
    }

    /// Job id of the frame currently held, or 0 before the first render.
    #[must_use]
    pub fn frame_job_id(&self) -> u64 {
        self.latest.job_id()
    }
}
