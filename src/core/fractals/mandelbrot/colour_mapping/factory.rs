use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourMap,
    maps::{grayscale::MandelbrotGrayscale, palette_ramp::MandelbrotPaletteRamp},
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    max_iterations: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::PaletteRamp => {
            Box::new(MandelbrotPaletteRamp::new(max_iterations))
        }
        MandelbrotColourMapKinds::Grayscale => Box::new(MandelbrotGrayscale::new(max_iterations)),
    }
}
