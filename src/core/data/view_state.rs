use crate::core::data::complex::Complex;
use thiserror::Error;

pub const DEFAULT_MIN_RE: f64 = -2.5;
pub const DEFAULT_MAX_RE: f64 = 1.0;
pub const DEFAULT_MIN_IM: f64 = -1.0;
pub const DEFAULT_MAX_IM: f64 = 1.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 128;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewStateError {
    #[error("degenerate view bounds: re [{min_re}, {max_re}], im [{min_im}, {max_im}]")]
    InvalidBounds {
        min_re: f64,
        max_re: f64,
        min_im: f64,
        max_im: f64,
    },
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("zoom factor must be positive and finite: {0}")]
    InvalidZoomFactor(f64),
}

/// The viewport onto the complex plane plus the iteration depth used to
/// render it.
///
/// Bounds always form a non-degenerate rectangle and `max_iterations` is
/// never zero; every constructor and setter checks this.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
    max_iterations: u32,
    zoom_factor: f64,
}

fn check_bounds(min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Result<(), ViewStateError> {
    let finite =
        min_re.is_finite() && max_re.is_finite() && min_im.is_finite() && max_im.is_finite();

    if !finite || max_re - min_re <= 0.0 || max_im - min_im <= 0.0 {
        return Err(ViewStateError::InvalidBounds {
            min_re,
            max_re,
            min_im,
            max_im,
        });
    }

    Ok(())
}

impl ViewState {
    pub fn new(
        min_re: f64,
        max_re: f64,
        min_im: f64,
        max_im: f64,
        max_iterations: u32,
    ) -> Result<Self, ViewStateError> {
        check_bounds(min_re, max_re, min_im, max_im)?;

        if max_iterations == 0 {
            return Err(ViewStateError::ZeroMaxIterations);
        }

        Ok(Self {
            min_re,
            max_re,
            min_im,
            max_im,
            max_iterations,
            zoom_factor: 1.0,
        })
    }

    #[must_use]
    pub fn min_re(&self) -> f64 {
        self.min_re
    }

    #[must_use]
    pub fn max_re(&self) -> f64 {
        self.max_re
    }

    #[must_use]
    pub fn min_im(&self) -> f64 {
        self.min_im
    }

    #[must_use]
    pub fn max_im(&self) -> f64 {
        self.max_im
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn re_span(&self) -> f64 {
        self.max_re - self.min_re
    }

    #[must_use]
    pub fn im_span(&self) -> f64 {
        self.max_im - self.min_im
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex {
            real: self.min_re + self.re_span() / 2.0,
            imag: self.min_im + self.im_span() / 2.0,
        }
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.min_re <= point.real
            && point.real <= self.max_re
            && self.min_im <= point.imag
            && point.imag <= self.max_im
    }

    /// Returns a copy with new bounds, keeping iterations and zoom factor.
    pub fn with_bounds(
        &self,
        min_re: f64,
        max_re: f64,
        min_im: f64,
        max_im: f64,
    ) -> Result<Self, ViewStateError> {
        check_bounds(min_re, max_re, min_im, max_im)?;

        Ok(Self {
            min_re,
            max_re,
            min_im,
            max_im,
            ..*self
        })
    }

    pub fn with_max_iterations(&self, max_iterations: u32) -> Result<Self, ViewStateError> {
        if max_iterations == 0 {
            return Err(ViewStateError::ZeroMaxIterations);
        }

        Ok(Self {
            max_iterations,
            ..*self
        })
    }

    pub fn with_zoom_factor(&self, zoom_factor: f64) -> Result<Self, ViewStateError> {
        if !zoom_factor.is_finite() || zoom_factor <= 0.0 {
            return Err(ViewStateError::InvalidZoomFactor(zoom_factor));
        }

        Ok(Self {
            zoom_factor,
            ..*self
        })
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            min_re: DEFAULT_MIN_RE,
            max_re: DEFAULT_MAX_RE,
            min_im: DEFAULT_MIN_IM,
            max_im: DEFAULT_MAX_IM,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom_factor: 1.0,
        }
    }
}
