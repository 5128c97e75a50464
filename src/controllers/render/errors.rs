use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::animation::interpolate::InterpolateError;
use crate::core::data::grid_size::GridSizeError;
use crate::core::data::viewport::ViewportError;
use crate::core::palette::errors::PaletteError;
use std::error::Error;
use std::fmt;
use std::io;

/// Everything that can go wrong between submitting a render and receiving
/// its frames.
#[derive(Debug)]
pub enum RenderError {
    InvalidViewport(ViewportError),
    InvalidGridDimensions(GridSizeError),
    GradientIndexOutOfRange { len: usize, required: usize },
    Palette(PaletteError),
    /// A batch job was submitted without any viewports to render.
    EmptyPath,
    InvalidStepsPerSpan,
    Render(GeneratePixelBufferError),
    /// The worker died or dropped the job before delivering its result.
    WorkerCommunicationFailure { job_id: u64, reason: String },
    WorkerSpawn(io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport(err) => write!(f, "{}", err),
            Self::InvalidGridDimensions(err) => write!(f, "{}", err),
            Self::GradientIndexOutOfRange { len, required } => write!(
                f,
                "gradient has {} colours but at least {} are required",
                len, required
            ),
            Self::Palette(err) => write!(f, "{}", err),
            Self::EmptyPath => write!(f, "batch render needs at least one viewport"),
            Self::InvalidStepsPerSpan => write!(f, "steps per span must be at least 1"),
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::WorkerCommunicationFailure { job_id, reason } => {
                write!(f, "render job {} was lost by the worker: {}", job_id, reason)
            }
            Self::WorkerSpawn(err) => write!(f, "failed to start render worker: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidViewport(err) => Some(err),
            Self::InvalidGridDimensions(err) => Some(err),
            Self::Palette(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::WorkerSpawn(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ViewportError> for RenderError {
    fn from(err: ViewportError) -> Self {
        Self::InvalidViewport(err)
    }
}

impl From<GridSizeError> for RenderError {
    fn from(err: GridSizeError) -> Self {
        Self::InvalidGridDimensions(err)
    }
}

impl From<PaletteError> for RenderError {
    fn from(err: PaletteError) -> Self {
        match err {
            PaletteError::GradientIndexOutOfRange { len, required } => {
                Self::GradientIndexOutOfRange { len, required }
            }
            other => Self::Palette(other),
        }
    }
}

impl From<InterpolateError> for RenderError {
    fn from(err: InterpolateError) -> Self {
        match err {
            InterpolateError::InvalidStepsPerSpan => Self::InvalidStepsPerSpan,
            InterpolateError::Viewport(err) => Self::InvalidViewport(err),
        }
    }
}

impl From<GeneratePixelBufferError> for RenderError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::Render(err)
    }
}
