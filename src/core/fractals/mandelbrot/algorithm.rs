use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::view_state::ViewState;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Outcome of iterating `z ← z² + c` for one point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeResult {
    /// Steps completed before the step in which `|z|² > 4` was first seen,
    /// or the iteration cap if it never was.
    pub iterations: u32,
    /// Value of `z` when the loop stopped.
    pub z: Complex,
}

/// Runs the escape-time loop for `c`, starting from `z = 0`.
///
/// Step `n` (counting from zero) applies the update and then tests the
/// bound, so a point escaping in the very first step reports `0`.
#[must_use]
pub fn compute_escape(c: Complex, max_iterations: u32) -> EscapeResult {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z * z + c;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return EscapeResult {
                iterations: iteration,
                z,
            };
        }
    }

    EscapeResult {
        iterations: max_iterations,
        z,
    }
}

/// Fractional iteration count in `[0, max_iterations]` for smooth colouring.
///
/// Interior points return `max_iterations`. The normalised count is only
/// defined for `|z|² > 1`; anything else, or any non-finite intermediate,
/// is treated as interior.
#[must_use]
pub fn smooth_iteration(result: EscapeResult, max_iterations: u32) -> f64 {
    let interior = f64::from(max_iterations);

    if result.iterations >= max_iterations || !result.z.is_finite() {
        return interior;
    }

    let magnitude_squared = result.z.magnitude_squared();

    if magnitude_squared.is_nan() || magnitude_squared <= 1.0 {
        return interior;
    }

    let log_zn = magnitude_squared.ln() / 2.0;
    let nu = (log_zn / std::f64::consts::LN_2).log2();
    let smooth = f64::from(result.iterations) + 1.0 - nu;

    if !smooth.is_finite() {
        return interior;
    }

    smooth.clamp(0.0, interior)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn from_view(view: &ViewState) -> Self {
        Self {
            max_iterations: view.max_iterations(),
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = f64;

    fn compute(&self, point: Complex) -> f64 {
        smooth_iteration(compute_escape(point, self.max_iterations), self.max_iterations)
    }
}
