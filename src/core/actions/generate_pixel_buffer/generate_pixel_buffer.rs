use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::grid_size::GridSize;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ColourMap(ColourMapError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err.as_ref()),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Generates a pixel buffer by mapping row-major input values to colours.
///
/// Streams RGBA bytes into a buffer preallocated to `grid.buffer_len()`.
/// The input must hold exactly one value per pixel.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T> + ?Sized>(
    input: Vec<T>,
    mapper: &CMap,
    grid: GridSize,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(grid.buffer_len());

    for value in input {
        let Colour { r, g, b, a } = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.extend_from_slice(&[r, g, b, a]);
    }

    Ok(PixelBuffer::from_data(grid, buffer)?)
}
