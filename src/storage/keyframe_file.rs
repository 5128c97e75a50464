//! Keyframe paths on disk, stored as a JSON array of viewport records.

use crate::core::animation::keyframes::KeyframeSequence;
use crate::storage::errors::ExportError;
use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub fn save_keyframes(keyframes: &KeyframeSequence, path: &Path) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);

    serde_json::to_writer_pretty(&mut writer, keyframes).map_err(|source| ExportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_err)?;

    info!("Saved {} keyframes to {}", keyframes.len(), path.display());
    Ok(())
}

/// Reads a keyframe file. Every viewport is validated on the way in.
pub fn load_keyframes(path: &Path) -> Result<KeyframeSequence, ExportError> {
    let file = File::open(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let keyframes: KeyframeSequence = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| ExportError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Loaded {} keyframes from {}", keyframes.len(), path.display());
    Ok(keyframes)
}
