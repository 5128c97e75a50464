use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

pub const DEFAULT_X_MIN: f64 = -2.0;
pub const DEFAULT_X_MAX: f64 = 1.0;
pub const DEFAULT_Y_MIN: f64 = -1.0;
pub const DEFAULT_Y_MAX: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidViewport {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport {
                x_min,
                x_max,
                y_min,
                y_max,
            } => {
                write!(
                    f,
                    "viewport bounds must be finite with min < max: x [{}, {}], y [{}, {}]",
                    x_min, x_max, y_min, y_max
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Unvalidated viewport bounds, the shape viewports take on the wire and in
/// keyframe files.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// A rectangle on the complex plane. Always satisfies `x_min < x_max` and
/// `y_min < y_max`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ViewportBounds", into = "ViewportBounds")]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ViewportError> {
        let all_finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());

        if !all_finite || x_min >= x_max || y_min >= y_max {
            return Err(ViewportError::InvalidViewport {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// The classic full view of the Mandelbrot set, `[-2, 1] x [-1, 1]`.
    #[must_use]
    pub fn default_view() -> Self {
        Self {
            x_min: DEFAULT_X_MIN,
            x_max: DEFAULT_X_MAX,
            y_min: DEFAULT_Y_MIN,
            y_max: DEFAULT_Y_MAX,
        }
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn bounds(&self) -> ViewportBounds {
        ViewportBounds {
            x_min: self.x_min,
            x_max: self.x_max,
            y_min: self.y_min,
            y_max: self.y_max,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::default_view()
    }
}

impl TryFrom<ViewportBounds> for Viewport {
    type Error = ViewportError;

    fn try_from(bounds: ViewportBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max)
    }
}

impl From<Viewport> for ViewportBounds {
    fn from(viewport: Viewport) -> Self {
        viewport.bounds()
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} - {}] x [{} - {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}
