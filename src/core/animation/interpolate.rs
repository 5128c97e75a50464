//! Linear interpolation of a keyframe path into evenly spaced viewports.

use crate::core::data::viewport::{Viewport, ViewportError};
use std::error::Error;
use std::fmt;

pub const DEFAULT_STEPS_PER_SPAN: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpolateError {
    InvalidStepsPerSpan,
    Viewport(ViewportError),
}

impl fmt::Display for InterpolateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStepsPerSpan => write!(f, "steps per span must be at least 1"),
            Self::Viewport(err) => write!(f, "interpolated viewport is invalid: {}", err),
        }
    }
}

impl Error for InterpolateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidStepsPerSpan => None,
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<ViewportError> for InterpolateError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

/// Expands `keyframes` into a dense path.
///
/// The first keyframe is emitted as is. Every following keyframe contributes
/// `steps_per_span` viewports; step `j` moves each of the four bounds
/// independently by `j / steps_per_span` of the way from the previous
/// keyframe, so the last step of a span lands on the keyframe itself. The
/// result holds `1 + steps_per_span * (k - 1)` viewports for `k` keyframes,
/// or none when there are no keyframes.
pub fn interpolate(
    keyframes: &[Viewport],
    steps_per_span: u32,
) -> Result<Vec<Viewport>, InterpolateError> {
    if steps_per_span == 0 {
        return Err(InterpolateError::InvalidStepsPerSpan);
    }

    let Some(first) = keyframes.first() else {
        return Ok(Vec::new());
    };

    let mut path = Vec::with_capacity(1 + steps_per_span as usize * (keyframes.len() - 1));
    path.push(*first);

    for span in keyframes.windows(2) {
        let (prev, next) = (&span[0], &span[1]);

        for step in 1..=steps_per_span {
            path.push(interpolate_step(prev, next, steps_per_span, step)?);
        }
    }

    Ok(path)
}

fn interpolate_step(
    prev: &Viewport,
    next: &Viewport,
    steps: u32,
    step: u32,
) -> Result<Viewport, ViewportError> {
    let lerp = |from: f64, to: f64| from + (to - from) / f64::from(steps) * f64::from(step);

    Viewport::new(
        lerp(prev.x_min(), next.x_min()),
        lerp(prev.x_max(), next.x_max()),
        lerp(prev.y_min(), next.y_min()),
        lerp(prev.y_max(), next.y_max()),
    )
}
