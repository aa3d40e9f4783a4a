use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

pub trait MandelbrotColourMap: ColourMap<f64> + Send + Sync {
    fn kind(&self) -> MandelbrotColourMapKinds;
}

impl ColourMap<f64> for Box<dyn MandelbrotColourMap> {
    fn map(&self, value: f64) -> Colour {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
