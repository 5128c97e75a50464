use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame::Frame;
use crate::storage::errors::ExportError;
use image::{ColorType, ImageFormat};
use std::path::Path;

/// RGBA PNG writer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngFilePresenter {}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, frame: &Frame, filepath: &Path) -> Result<(), ExportError> {
        let buffer = &frame.pixel_buffer;

        image::save_buffer_with_format(
            filepath,
            buffer.buffer(),
            buffer.width(),
            buffer.height(),
            ColorType::Rgba8,
            ImageFormat::Png,
        )
        .map_err(|source| ExportError::Image {
            path: filepath.to_path_buf(),
            source,
        })
    }

    fn extension(&self) -> &'static str {
        "png"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_frame::FrameRenderer;
    use crate::core::data::grid_size::GridSize;
    use crate::core::data::viewport::Viewport;
    use crate::core::palette::gradient_palette::GradientPalette;
    use tempfile::tempdir;

    #[test]
    fn test_png_decodes_to_same_pixels() {
        let frame = FrameRenderer::default()
            .render(
                Viewport::default(),
                GridSize::new(30, 20).unwrap(),
                &GradientPalette::grayscale(),
            )
            .unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame.png");

        PngFilePresenter::new().present(&frame, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (30, 20));
        assert_eq!(decoded.as_raw(), frame.pixel_buffer.buffer());
    }
}
