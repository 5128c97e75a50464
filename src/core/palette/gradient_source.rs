use crate::core::data::colour::Colour;
use image::RgbaImage;

/// Anything a gradient palette can be sampled from: a row of RGBA pixels
/// with a known width.
pub trait GradientSource {
    fn width(&self) -> u32;

    /// Colour of column `x` in the first row. Only called for `x < width()`.
    fn first_row_pixel(&self, x: u32) -> Colour;
}

impl GradientSource for RgbaImage {
    fn width(&self) -> u32 {
        if self.height() == 0 {
            0
        } else {
            self.dimensions().0
        }
    }

    fn first_row_pixel(&self, x: u32) -> Colour {
        Colour::from(self.get_pixel(x, 0).0)
    }
}
