//! Pixel format conversion for presentation surfaces.

use thiserror::Error;

use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;

const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    #[error("rgb length {0} is not a whole number of pixels")]
    PartialPixel(usize),
    #[error("rgba length {rgba_len} does not hold {pixels} pixels")]
    SizeMismatch { pixels: usize, rgba_len: usize },
}

/// Expands packed RGB into an RGBA frame with opaque alpha.
pub fn copy_rgb_to_rgba(rgb: &[u8], rgba: &mut [u8]) -> Result<(), PixelFormatError> {
    if rgb.len() % BYTES_PER_PIXEL != 0 {
        return Err(PixelFormatError::PartialPixel(rgb.len()));
    }

    let pixels = rgb.len() / BYTES_PER_PIXEL;

    if rgba.len() != pixels * RGBA_BYTES_PER_PIXEL {
        return Err(PixelFormatError::SizeMismatch {
            pixels,
            rgba_len: rgba.len(),
        });
    }

    for (src, dst) in rgb
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(rgba.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        dst[..BYTES_PER_PIXEL].copy_from_slice(src);
        dst[3] = u8::MAX;
    }

    Ok(())
}
