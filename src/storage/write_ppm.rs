use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes `buffer` as a binary (P6) PPM image.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> std::io::Result<()> {
    let resolution = buffer.resolution();

    // P6 header: magic, width height, max channel value
    write!(
        writer,
        "P6\n{} {}\n255\n",
        resolution.width(),
        resolution.height()
    )?;
    writer.write_all(buffer.buffer())?;
    writer.flush()
}

/// Writes a PPM file, creating missing parent directories.
pub fn write_ppm_file(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let filepath = filepath.as_ref();

    if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    write_ppm(buffer, BufWriter::new(File::create(filepath)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::data::colour::Colour;
    use crate::core::data::resolution::Resolution;

    #[test]
    fn test_write_ppm_header_and_body() {
        let mut buffer = PixelBuffer::new(Resolution::new(2, 1).unwrap());
        buffer.set_pixel(1, 0, Colour::new(9, 8, 7)).unwrap();
        let mut out = Vec::new();

        write_ppm(&buffer, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[0, 0, 0, 9, 8, 7]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_write_ppm_file_creates_directories() {
        let dir = std::env::temp_dir().join(format!("mandelbrot_ppm_{}", std::process::id()));
        let path = dir.join("nested").join("frame.ppm");
        let buffer = PixelBuffer::new(Resolution::new(3, 2).unwrap());

        write_ppm_file(&buffer, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), "P6\n3 2\n255\n".len() + 18);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
