use crate::controllers::render::errors::RenderError;
use crate::core::data::grid_size::GridSize;
use crate::core::data::viewport::Viewport;
use crate::core::palette::gradient_palette::GradientPalette;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    SingleFrame,
    BatchVideo,
}

#[derive(Debug, Clone, PartialEq)]
enum JobTarget {
    Frame(Viewport),
    Path(Vec<Viewport>),
}

/// A validated unit of work for the render worker. Created per request and
/// consumed when the worker picks it up.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderJob {
    target: JobTarget,
    grid: GridSize,
    palette: Arc<GradientPalette>,
}

impl RenderJob {
    #[must_use]
    pub fn single_frame(viewport: Viewport, grid: GridSize, palette: Arc<GradientPalette>) -> Self {
        Self {
            target: JobTarget::Frame(viewport),
            grid,
            palette,
        }
    }

    /// A job rendering every viewport of `path` in order. The path must not
    /// be empty.
    pub fn batch_video(
        path: Vec<Viewport>,
        grid: GridSize,
        palette: Arc<GradientPalette>,
    ) -> Result<Self, RenderError> {
        if path.is_empty() {
            return Err(RenderError::EmptyPath);
        }

        Ok(Self {
            target: JobTarget::Path(path),
            grid,
            palette,
        })
    }

    #[must_use]
    pub fn mode(&self) -> RenderMode {
        match self.target {
            JobTarget::Frame(_) => RenderMode::SingleFrame,
            JobTarget::Path(_) => RenderMode::BatchVideo,
        }
    }

    /// The viewports this job renders, in order.
    #[must_use]
    pub fn viewports(&self) -> &[Viewport] {
        match &self.target {
            JobTarget::Frame(viewport) => std::slice::from_ref(viewport),
            JobTarget::Path(path) => path,
        }
    }

    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.viewports().len()
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn palette(&self) -> &GradientPalette {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_frame_job_has_one_viewport() {
        let job = RenderJob::single_frame(
            Viewport::default(),
            GridSize::DEFAULT_CANVAS,
            Arc::new(GradientPalette::grayscale()),
        );

        assert_eq!(job.mode(), RenderMode::SingleFrame);
        assert_eq!(job.viewports(), &[Viewport::default()]);
    }

    #[test]
    fn test_batch_job_keeps_path_order() {
        let path = vec![
            Viewport::default(),
            Viewport::new(-1.0, 0.5, -0.5, 0.25).unwrap(),
        ];

        let job = RenderJob::batch_video(
            path.clone(),
            GridSize::DEFAULT_CANVAS,
            Arc::new(GradientPalette::grayscale()),
        )
        .unwrap();

        assert_eq!(job.mode(), RenderMode::BatchVideo);
        assert_eq!(job.viewports(), path.as_slice());
        assert_eq!(job.frame_count(), 2);
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        let result = RenderJob::batch_video(
            Vec::new(),
            GridSize::DEFAULT_CANVAS,
            Arc::new(GradientPalette::grayscale()),
        );

        assert!(matches!(result, Err(RenderError::EmptyPath)));
    }
}
