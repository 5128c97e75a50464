use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use std::time::Duration;

/// A rendered image together with the viewport it shows and how long it took.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub pixel_buffer: PixelBuffer,
    pub viewport: Viewport,
    pub render_duration: Duration,
}

impl Frame {
    #[must_use]
    pub fn elapsed_millis(&self) -> u128 {
        self.render_duration.as_millis()
    }
}
