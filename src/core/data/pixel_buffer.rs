use crate::core::data::colour::Colour;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        grid: GridSize,
    },
    BoundsMismatch {
        grid_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                grid_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "grid size {} does not match buffer size {}",
                    grid_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, grid } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} grid",
                    pixel.x,
                    pixel.y,
                    grid.width(),
                    grid.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA pixels, four bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    grid: GridSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            buffer: vec![0; grid.buffer_len()],
        }
    }

    pub fn from_data(grid: GridSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let grid_size = grid.buffer_len();

        if grid_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                grid_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { grid, buffer })
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.grid.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                grid: self.grid,
            });
        }

        let index = self.grid.byte_offset(pixel);
        self.buffer[index..index + 4].copy_from_slice(&colour.to_array());

        Ok(())
    }

    pub fn get_pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        if !self.grid.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                grid: self.grid,
            });
        }

        let index = self.grid.byte_offset(pixel);
        let rgba = &self.buffer[index..index + 4];

        Ok(Colour {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3],
        })
    }
}
