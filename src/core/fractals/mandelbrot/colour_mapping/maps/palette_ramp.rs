use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::palette::{DEFAULT_PALETTE, Palette, colour_for};

#[derive(Debug)]
pub struct MandelbrotPaletteRamp {
    max_iterations: u32,
    palette: Palette,
}

impl ColourMap<f64> for MandelbrotPaletteRamp {
    fn map(&self, smooth_iterations: f64) -> Colour {
        colour_for(smooth_iterations, self.max_iterations, &self.palette)
    }

    fn display_name(&self) -> &str {
        MandelbrotColourMapKinds::PaletteRamp.display_name()
    }
}

impl MandelbrotColourMap for MandelbrotPaletteRamp {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::PaletteRamp
    }
}

impl MandelbrotPaletteRamp {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self::with_palette(max_iterations, DEFAULT_PALETTE)
    }

    #[must_use]
    pub fn with_palette(max_iterations: u32, palette: Palette) -> Self {
        Self {
            max_iterations,
            palette,
        }
    }
}
