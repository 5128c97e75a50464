use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame::Frame;
use crate::presenters::file::png::PngFilePresenter;
use crate::presenters::file::ppm::PpmFilePresenter;
use crate::storage::errors::ExportError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Image format for exported frames.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FrameFormat {
    #[default]
    Png,
    Ppm,
}

impl FrameFormat {
    #[must_use]
    pub fn presenter(self) -> Box<dyn FilePresenterPort> {
        match self {
            Self::Png => Box::new(PngFilePresenter::new()),
            Self::Ppm => Box::new(PpmFilePresenter::new()),
        }
    }
}

/// Name of the `index`th file of a frame sequence, e.g. `frame_00007.png`.
#[must_use]
pub fn frame_file_name(index: usize, extension: &str) -> String {
    format!("frame_{:05}.{}", index, extension)
}

/// Writes `frames` into `dir` as numbered files in order, creating the
/// directory if needed. Returns the paths written.
pub fn write_frame_sequence(
    frames: &[Frame],
    dir: &Path,
    format: FrameFormat,
) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let presenter = format.presenter();
    let mut written = Vec::with_capacity(frames.len());

    for (index, frame) in frames.iter().enumerate() {
        let path = dir.join(frame_file_name(index, presenter.extension()));
        presenter.present(frame, &path)?;
        debug!("Wrote {}", path.display());
        written.push(path);
    }

    info!("Wrote {} frames to {}", written.len(), dir.display());
    Ok(written)
}
