use std::path::{Path, PathBuf};

use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::ports::frame_presenter::FramePresenterPort;
use crate::core::data::resolution::Resolution;
use crate::storage::write_ppm::write_ppm_file;

/// Writes every presented frame to the same PPM file.
#[derive(Debug, Clone)]
pub struct PpmFilePresenter {
    filepath: PathBuf,
    frames_written: u64,
}

impl PpmFilePresenter {
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
            frames_written: 0,
        }
    }

    #[must_use]
    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    #[must_use]
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }
}

impl FramePresenterPort for PpmFilePresenter {
    type Error = std::io::Error;

    fn resize(&mut self, _resolution: Resolution) -> std::io::Result<()> {
        Ok(())
    }

    fn present(&mut self, frame: &FrameData<'_>) -> std::io::Result<()> {
        write_ppm_file(frame.pixel_buffer, &self.filepath)?;
        self.frames_written += 1;

        log::info!(
            "wrote frame {} ({}) to {}",
            frame.generation,
            frame.pixel_buffer.resolution(),
            self.filepath.display()
        );

        Ok(())
    }
}
