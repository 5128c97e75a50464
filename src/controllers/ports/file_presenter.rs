use crate::core::data::frame::Frame;
use crate::storage::errors::ExportError;
use std::path::Path;

/// Writes one rendered frame to a file.
pub trait FilePresenterPort {
    fn present(&self, frame: &Frame, filepath: &Path) -> Result<(), ExportError>;

    /// File extension, without the dot, that this presenter writes.
    fn extension(&self) -> &'static str;
}

impl<P: FilePresenterPort + ?Sized> FilePresenterPort for Box<P> {
    fn present(&self, frame: &Frame, filepath: &Path) -> Result<(), ExportError> {
        (**self).present(frame, filepath)
    }

    fn extension(&self) -> &'static str {
        (**self).extension()
    }
}
