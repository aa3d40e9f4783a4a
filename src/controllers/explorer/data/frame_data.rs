use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;

/// One finished frame, borrowed from the session for the duration of a
/// `present` call.
#[derive(Debug, Clone, Copy)]
pub struct FrameData<'a> {
    pub generation: u64,
    pub pixel_buffer: &'a PixelBuffer,
    pub status: &'a str,
    pub render_duration: Duration,
}
