//! Render settings shared by the command line entry points.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. Command line flags are applied on top of whatever was loaded.

use crate::core::actions::render_frame::RenderStrategy;
use crate::core::animation::interpolate::DEFAULT_STEPS_PER_SPAN;
use crate::core::animation::playback::DEFAULT_PLAYBACK_INTERVAL;
use crate::core::data::grid_size::{GridSize, GridSizeError};
use crate::core::data::viewport::Viewport;
use crate::core::palette::errors::PaletteError;
use crate::core::palette::gradient_palette::GradientPalette;
use crate::presenters::file::frame_sequence::FrameFormat;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub viewport: Viewport,
    /// Interpolated viewports between two keyframes.
    pub steps_per_span: u32,
    pub playback_interval_ms: u64,
    /// Gradient image whose first row becomes the palette. The built-in
    /// grayscale ramp is used when unset.
    pub gradient: Option<PathBuf>,
    pub strategy: RenderStrategy,
    pub format: FrameFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: GridSize::DEFAULT_CANVAS.width(),
            height: GridSize::DEFAULT_CANVAS.height(),
            viewport: Viewport::default_view(),
            steps_per_span: DEFAULT_STEPS_PER_SPAN,
            playback_interval_ms: DEFAULT_PLAYBACK_INTERVAL.as_millis() as u64,
            gradient: None,
            strategy: RenderStrategy::default(),
            format: FrameFormat::default(),
        }
    }
}

impl RenderConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn grid(&self) -> Result<GridSize, GridSizeError> {
        GridSize::new(self.width, self.height)
    }

    /// Loads the configured gradient, or the grayscale ramp if there is none.
    pub fn palette(&self) -> Result<GradientPalette, PaletteError> {
        match &self.gradient {
            Some(path) => GradientPalette::load(path),
            None => Ok(GradientPalette::grayscale()),
        }
    }

    #[must_use]
    pub fn playback_interval(&self) -> Duration {
        Duration::from_millis(self.playback_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_explorer_canvas() {
        let config = RenderConfig::default();

        assert_eq!(config.grid().unwrap(), GridSize::new(500, 400).unwrap());
        assert_eq!(config.viewport, Viewport::default());
        assert_eq!(config.steps_per_span, 30);
        assert_eq!(config.strategy, RenderStrategy::Parallel);
        assert_eq!(config.palette().unwrap(), GradientPalette::grayscale());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("render.json");
        fs::write(&path, r#"{ "width": 64, "strategy": "serial", "format": "ppm" }"#).unwrap();

        let config = RenderConfig::load(&path).unwrap();

        assert_eq!(config.width, 64);
        assert_eq!(config.height, 400);
        assert_eq!(config.strategy, RenderStrategy::Serial);
        assert_eq!(config.format, FrameFormat::Ppm);
        assert_eq!(config.steps_per_span, 30);
    }

    #[test]
    fn test_invalid_viewport_in_file_fails_to_parse() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("render.json");
        fs::write(
            &path,
            r#"{ "viewport": { "x_min": 0.0, "x_max": 0.0, "y_min": -1.0, "y_max": 1.0 } }"#,
        )
        .unwrap();

        assert!(matches!(
            RenderConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_zero_height_is_rejected_when_building_grid() {
        let config = RenderConfig {
            height: 0,
            ..RenderConfig::default()
        };

        assert!(config.grid().is_err());
    }
}
