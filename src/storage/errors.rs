use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures writing frames or reading and writing keyframe files.
#[derive(Debug)]
pub enum ExportError {
    Io { path: PathBuf, source: io::Error },
    Image { path: PathBuf, source: image::ImageError },
    Json { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Self::Image { path, source } => {
                write!(f, "{}: image encoding failed: {}", path.display(), source)
            }
            Self::Json { path, source } => {
                write!(f, "{}: invalid keyframe file: {}", path.display(), source)
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Image { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}
