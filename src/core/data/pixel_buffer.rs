use crate::core::data::colour::Colour;
use crate::core::data::resolution::Resolution;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 3;

fn resolution_to_buffer_size(resolution: Resolution) -> usize {
    resolution.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{x}, y:{y} outside of {resolution} buffer")]
    PixelOutsideBounds {
        x: u32,
        y: u32,
        resolution: Resolution,
    },
    #[error("resolution size {resolution_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        resolution_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB grid, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    resolution: Resolution,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            buffer: vec![0; resolution_to_buffer_size(resolution)],
        }
    }

    pub fn from_data(
        resolution: Resolution,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let resolution_size = resolution_to_buffer_size(resolution);

        if resolution_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                resolution_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { resolution, buffer })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.resolution.width() as usize * BYTES_PER_PIXEL
    }

    /// Mutable view of the raw bytes, for splitting into disjoint rows.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    fn index_of(&self, x: u32, y: u32) -> Result<usize, PixelBufferError> {
        if x >= self.resolution.width() || y >= self.resolution.height() {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                resolution: self.resolution,
            });
        }

        Ok(y as usize * self.row_stride() + x as usize * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(x, y)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(x, y)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(width: u32, height: u32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(resolution(10, 10));

        assert_eq!(buffer.resolution(), resolution(10, 10));
        assert_eq!(buffer.buffer_size(), 300); // 10 * 10 * 3
        assert_eq!(buffer.row_stride(), 30);
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(resolution(2, 2), data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
        assert_eq!(buffer.pixel(0, 1).unwrap(), Colour::new(0, 0, 255));
        assert_eq!(buffer.into_data(), data);
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let too_small = PixelBuffer::from_data(resolution(2, 2), vec![255, 0, 0]);
        let too_large = PixelBuffer::from_data(resolution(2, 2), vec![0; 24]);

        assert_eq!(
            too_small.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                resolution_size: 12,
                buffer_size: 3
            }
        );
        assert_eq!(
            too_large.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                resolution_size: 12,
                buffer_size: 24
            }
        );
    }

    #[test]
    fn test_set_pixel_writes_row_major() {
        let mut buffer = PixelBuffer::new(resolution(3, 3));
        let red = Colour::new(255, 0, 0);

        buffer.set_pixel(1, 1, red).unwrap();

        assert_eq!(&buffer.buffer()[12..15], &[255, 0, 0]);
        assert_eq!(buffer.pixel(1, 1).unwrap(), red);
    }

    #[test]
    fn test_set_pixel_bottom_right_corner() {
        let mut buffer = PixelBuffer::new(resolution(3, 2));

        buffer.set_pixel(2, 1, Colour::new(0, 0, 255)).unwrap();

        assert_eq!(&buffer.buffer()[15..18], &[0, 0, 255]);
    }

    #[test]
    fn test_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(resolution(3, 3));

        assert_eq!(
            buffer.set_pixel(3, 0, Colour::default()),
            Err(PixelBufferError::PixelOutsideBounds {
                x: 3,
                y: 0,
                resolution: resolution(3, 3)
            })
        );
        assert!(buffer.pixel(0, 5).is_err());
    }
}
