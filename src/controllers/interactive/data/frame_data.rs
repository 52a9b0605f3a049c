use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    /// The snapshot this frame was rendered from.
    pub viewport: Viewport,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
