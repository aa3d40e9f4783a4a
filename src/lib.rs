mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use adapters::pixel_format::{PixelFormatError, copy_rgb_to_rgba};
pub use controllers::cli::args::{CliArgs, ColourMapArg, ConfigError, ExplorerArgs};
pub use controllers::cli::render_cli::{CliError, CliOutcome, run_cli};
pub use controllers::explorer::ExplorerSession;
pub use controllers::explorer::data::explorer_config::ExplorerConfig;
pub use controllers::explorer::data::frame_data::FrameData;
pub use controllers::explorer::errors::ExplorerError;
pub use controllers::explorer::ports::frame_presenter::FramePresenterPort;
pub use crate::core::actions::render_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_frame::render_frame::{
    FrameRenderer, RenderError, render_frame_serial,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::resolution::{Resolution, ResolutionError};
pub use crate::core::data::view_state::{ViewState, ViewStateError};
pub use crate::core::fractals::mandelbrot::algorithm::{
    EscapeResult, MandelbrotAlgorithm, compute_escape, smooth_iteration,
};
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
pub use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
pub use crate::core::fractals::mandelbrot::colour_mapping::maps::{
    grayscale::MandelbrotGrayscale, palette_ramp::MandelbrotPaletteRamp,
};
pub use crate::core::fractals::mandelbrot::palette::{DEFAULT_PALETTE, Palette, colour_for};
pub use crate::core::navigation::command::{NavCommand, ParseCommandError};
pub use crate::core::navigation::controller::{NavigationController, NavigationState, Transition};
pub use crate::core::navigation::status::status_text;
pub use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
pub use presenters::file::ppm::PpmFilePresenter;
pub use storage::write_ppm::{write_ppm, write_ppm_file};

#[cfg(feature = "gui")]
pub use input::gui::{errors::GuiError, run_gui};
