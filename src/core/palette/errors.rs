use std::{error::Error, fmt};

#[derive(Debug)]
pub enum PaletteError {
    /// The gradient has fewer colours than normalized escape counts can index.
    GradientIndexOutOfRange { len: usize, required: usize },
    /// A lookup past the end of the palette.
    IndexOutOfRange { index: usize, len: usize },
    /// The gradient image could not be read or decoded.
    Load(image::ImageError),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GradientIndexOutOfRange { len, required } => {
                write!(
                    f,
                    "gradient has {} colours but at least {} are required",
                    len, required
                )
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "palette index {} out of range for {} colours", index, len)
            }
            Self::Load(err) => write!(f, "failed to load gradient image: {}", err),
        }
    }
}

impl Error for PaletteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load(err) => Some(err),
            _ => None,
        }
    }
}

impl From<image::ImageError> for PaletteError {
    fn from(err: image::ImageError) -> Self {
        Self::Load(err)
    }
}
