use thiserror::Error;

pub const MIN_WIDTH: u32 = 800;
pub const MIN_HEIGHT: u32 = 600;
pub const WIDTH_STEP: u32 = 100;
pub const HEIGHT_STEP: u32 = 50;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("resolution must be at least 1x1: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Size of the pixel grid a frame is rendered into.
///
/// The 800x600 floor only applies when shrinking through [`Resolution::decreased`];
/// smaller grids can still be constructed directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self, ResolutionError> {
        if width == 0 || height == 0 {
            return Err(ResolutionError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn increased(&self) -> Self {
        Self {
            width: self.width.saturating_add(WIDTH_STEP),
            height: self.height.saturating_add(HEIGHT_STEP),
        }
    }

    #[must_use]
    pub fn decreased(&self) -> Self {
        Self {
            width: self.width.saturating_sub(WIDTH_STEP).max(MIN_WIDTH),
            height: self.height.saturating_sub(HEIGHT_STEP).max(MIN_HEIGHT),
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
