use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::escape_time::{normalize_escape_count, MAX_PALETTE_INDEX};
use crate::core::palette::errors::PaletteError;
use crate::core::palette::gradient_source::GradientSource;
use std::path::Path;

/// Minimum number of colours a palette needs so that every normalized
/// escape count has a colour.
pub const MIN_PALETTE_LEN: usize = MAX_PALETTE_INDEX + 1;

/// An ordered colour table indexed by normalized escape counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientPalette {
    colours: Vec<Colour>,
}

impl GradientPalette {
    /// Builds a palette from the colours in order. Fails with
    /// [`PaletteError::GradientIndexOutOfRange`] if there are fewer than
    /// [`MIN_PALETTE_LEN`] of them.
    pub fn from_colours(colours: Vec<Colour>) -> Result<Self, PaletteError> {
        if colours.len() < MIN_PALETTE_LEN {
            return Err(PaletteError::GradientIndexOutOfRange {
                len: colours.len(),
                required: MIN_PALETTE_LEN,
            });
        }

        Ok(Self { colours })
    }

    /// Samples every column of the source's first row, left to right.
    pub fn from_source<S: GradientSource + ?Sized>(source: &S) -> Result<Self, PaletteError> {
        let colours = (0..source.width())
            .map(|x| source.first_row_pixel(x))
            .collect();

        Self::from_colours(colours)
    }

    /// Loads a gradient image from disk and samples its first row.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let image = image::open(path)?.to_rgba8();

        Self::from_source(&image)
    }

    /// A black-to-white ramp with exactly [`MIN_PALETTE_LEN`] steps.
    #[must_use]
    pub fn grayscale() -> Self {
        Self {
            colours: (0..MIN_PALETTE_LEN).map(|i| Colour::grey(i as u8)).collect(),
        }
    }

    pub fn colour_at(&self, index: usize) -> Result<Colour, PaletteError> {
        self.colours
            .get(index)
            .copied()
            .ok_or(PaletteError::IndexOutOfRange {
                index,
                len: self.colours.len(),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

impl Default for GradientPalette {
    fn default() -> Self {
        Self::grayscale()
    }
}

impl ColourMap<u32> for GradientPalette {
    fn map(&self, escape_count: u32) -> Result<Colour, ColourMapError> {
        Ok(self.colour_at(normalize_escape_count(escape_count))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::escape_time::MAX_ITERATIONS;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_grayscale_covers_every_palette_index() {
        let palette = GradientPalette::grayscale();

        assert_eq!(palette.len(), 255);
        assert_eq!(palette.colour_at(0).unwrap(), Colour::grey(0));
        assert_eq!(palette.colour_at(254).unwrap(), Colour::grey(254));
    }

    #[test]
    fn test_short_gradient_is_rejected_at_build_time() {
        let result = GradientPalette::from_colours(vec![Colour::BLACK; 254]);

        assert!(matches!(
            result,
            Err(PaletteError::GradientIndexOutOfRange {
                len: 254,
                required: 255
            })
        ));
    }

    #[test]
    fn test_from_source_samples_first_row_in_column_order() {
        let image = RgbaImage::from_fn(300, 2, |x, y| {
            if y == 0 {
                Rgba([(x % 256) as u8, 0, 0, 255])
            } else {
                Rgba([0, 255, 0, 255])
            }
        });

        let palette = GradientPalette::from_source(&image).unwrap();

        assert_eq!(palette.len(), 300);
        assert_eq!(palette.colour_at(0).unwrap(), Colour::opaque(0, 0, 0));
        assert_eq!(palette.colour_at(42).unwrap(), Colour::opaque(42, 0, 0));
        assert_eq!(palette.colour_at(299).unwrap(), Colour::opaque(43, 0, 0));
    }

    #[test]
    fn test_from_narrow_image_is_rejected() {
        let image = RgbaImage::new(100, 10);

        assert!(matches!(
            GradientPalette::from_source(&image),
            Err(PaletteError::GradientIndexOutOfRange { len: 100, .. })
        ));
    }

    #[test]
    fn test_colour_at_past_end_is_an_error() {
        let palette = GradientPalette::grayscale();

        assert!(matches!(
            palette.colour_at(255),
            Err(PaletteError::IndexOutOfRange { index: 255, len: 255 })
        ));
    }

    #[test]
    fn test_map_normalizes_escape_counts() {
        let palette = GradientPalette::grayscale();

        assert_eq!(palette.map(0).unwrap(), Colour::grey(0));
        assert_eq!(palette.map(250).unwrap(), Colour::grey(127));
        assert_eq!(palette.map(MAX_ITERATIONS).unwrap(), Colour::grey(254));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let result = GradientPalette::load("/definitely/not/a/gradient.png");

        assert!(matches!(result, Err(PaletteError::Load(_))));
    }
}
