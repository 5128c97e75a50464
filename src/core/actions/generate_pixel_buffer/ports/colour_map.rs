use crate::core::data::colour::Colour;
use std::error::Error;

pub type ColourMapError = Box<dyn Error + Send + Sync>;

/// Turns a per-pixel fractal value into the colour it is drawn with.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, ColourMapError>;
}
