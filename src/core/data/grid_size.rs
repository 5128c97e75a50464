use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridSizeError {
    InvalidGridDimensions { width: u32, height: u32 },
}

impl fmt::Display for GridSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridDimensions { width, height } => {
                write!(f, "grid dimensions must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for GridSizeError {}

/// Pixel dimensions of a render target. Both sides are at least one pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    /// The 500x400 canvas the explorer renders into unless told otherwise.
    pub const DEFAULT_CANVAS: Self = Self {
        width: 500,
        height: 400,
    };

    pub fn new(width: u32, height: u32) -> Result<Self, GridSizeError> {
        if width == 0 || height == 0 {
            return Err(GridSizeError::InvalidGridDimensions { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn buffer_len(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Byte offset of `point` in a row-major RGBA buffer of this size.
    #[must_use]
    pub fn byte_offset(&self, point: Point) -> usize {
        (point.y as usize * self.width as usize + point.x as usize) * BYTES_PER_PIXEL
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT_CANVAS
    }
}
