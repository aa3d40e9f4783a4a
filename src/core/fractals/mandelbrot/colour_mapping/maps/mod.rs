pub mod grayscale;
pub mod palette_ramp;
