use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;

/// White for points that escape at once, fading to black inside the set.
#[derive(Debug)]
pub struct MandelbrotGrayscale {
    max_iterations: u32,
}

impl ColourMap<f64> for MandelbrotGrayscale {
    fn map(&self, smooth_iterations: f64) -> Colour {
        if self.max_iterations == 0 || !smooth_iterations.is_finite() {
            return Colour::new(0, 0, 0);
        }

        let max = f64::from(self.max_iterations);
        let t = ((max - smooth_iterations) / max).clamp(0.0, 1.0);
        let level = (t * 255.0) as u8;

        Colour::new(level, level, level)
    }

    fn display_name(&self) -> &str {
        MandelbrotColourMapKinds::Grayscale.display_name()
    }
}

impl MandelbrotColourMap for MandelbrotGrayscale {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::Grayscale
    }
}

impl MandelbrotGrayscale {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
