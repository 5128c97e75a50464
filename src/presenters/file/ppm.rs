use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame::Frame;
use crate::storage::errors::ExportError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Binary PPM (P6) writer. PPM has no alpha channel, so alpha is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &Frame, filepath: &Path) -> Result<(), ExportError> {
        write_ppm(frame, filepath).map_err(|source| ExportError::Io {
            path: filepath.to_path_buf(),
            source,
        })
    }

    fn extension(&self) -> &'static str {
        "ppm"
    }
}

fn write_ppm(frame: &Frame, filepath: &Path) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filepath)?);
    let buffer = &frame.pixel_buffer;

    writeln!(file, "P6")?;
    writeln!(file, "{} {}", buffer.width(), buffer.height())?;
    writeln!(file, "255")?;

    for rgba in buffer.buffer().chunks_exact(4) {
        file.write_all(&rgba[..3])?;
    }

    file.flush()
}
