use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use thiserror::Error;

use crate::controllers::explorer::data::explorer_config::ExplorerConfig;
use crate::core::data::resolution::{Resolution, ResolutionError};
use crate::core::data::view_state::{DEFAULT_MAX_ITERATIONS, ViewState, ViewStateError};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::navigation::command::NavCommand;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    View(#[from] ViewStateError),
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColourMapArg {
    Palette,
    Grayscale,
}

impl From<ColourMapArg> for MandelbrotColourMapKinds {
    fn from(arg: ColourMapArg) -> Self {
        match arg {
            ColourMapArg::Palette => Self::PaletteRamp,
            ColourMapArg::Grayscale => Self::Grayscale,
        }
    }
}

/// Settings shared by every front end.
#[derive(Debug, Clone, Args)]
pub struct ExplorerArgs {
    /// Frame width in pixels
    #[arg(long, default_value_t = 1920)]
    pub width: u32,

    /// Frame height in pixels
    #[arg(long, default_value_t = 1080)]
    pub height: u32,

    /// Starting iteration cap
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Render threads (defaults to the available parallelism)
    #[arg(long)]
    pub threads: Option<NonZeroUsize>,

    #[arg(long, value_enum, default_value_t = ColourMapArg::Palette)]
    pub colour_map: ColourMapArg,
}

impl ExplorerArgs {
    pub fn to_config(&self) -> Result<ExplorerConfig, ConfigError> {
        Ok(ExplorerConfig {
            view: ViewState::default().with_max_iterations(self.max_iterations)?,
            resolution: Resolution::new(self.width, self.height)?,
            colour_map: self.colour_map.into(),
            threads: self.threads,
        })
    }
}

/// Render one Mandelbrot frame to a PPM file.
///
/// Example:
///   mandelbrot_explorer --command zoom-in:960,540 --command more-iterations
#[derive(Debug, Clone, Parser)]
#[command(name = "mandelbrot_explorer", version, about)]
pub struct CliArgs {
    #[command(flatten)]
    pub explorer: ExplorerArgs,

    /// Navigation command applied before rendering, in order (repeatable):
    /// pan-left, pan-right, pan-up, pan-down, zoom-in:X,Y, zoom-out:X,Y,
    /// more-iterations, fewer-iterations, increase-resolution,
    /// decrease-resolution, reset, quit
    #[arg(long = "command", value_name = "COMMAND")]
    pub commands: Vec<NavCommand>,

    /// Output PPM path
    #[arg(long, default_value = "output/mandelbrot.ppm")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["mandelbrot_explorer"]).unwrap();
        let config = args.explorer.to_config().unwrap();

        assert_eq!(config, ExplorerConfig::default());
        assert!(args.commands.is_empty());
        assert_eq!(args.output, PathBuf::from("output/mandelbrot.ppm"));
    }

    #[test]
    fn test_overrides() {
        let args = CliArgs::try_parse_from([
            "mandelbrot_explorer",
            "--width",
            "800",
            "--height",
            "600",
            "--max-iterations",
            "512",
            "--threads",
            "3",
            "--colour-map",
            "grayscale",
            "--output",
            "frame.ppm",
        ])
        .unwrap();
        let config = args.explorer.to_config().unwrap();

        assert_eq!(config.resolution, Resolution::new(800, 600).unwrap());
        assert_eq!(config.view.max_iterations(), 512);
        assert_eq!(config.threads, NonZeroUsize::new(3));
        assert_eq!(config.colour_map, MandelbrotColourMapKinds::Grayscale);
        assert_eq!(args.output, PathBuf::from("frame.ppm"));
    }

    #[test]
    fn test_commands_keep_order() {
        let args = CliArgs::try_parse_from([
            "mandelbrot_explorer",
            "--command",
            "zoom-in:960,540",
            "--command",
            "pan-left",
            "--command",
            "more-iterations",
        ])
        .unwrap();

        assert_eq!(
            args.commands,
            vec![
                NavCommand::ZoomIn { x: 960, y: 540 },
                NavCommand::PanLeft,
                NavCommand::IncreaseIterations,
            ]
        );
    }

    #[test]
    fn test_bad_command_is_rejected() {
        assert!(CliArgs::try_parse_from(["mandelbrot_explorer", "--command", "spin"]).is_err());
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(CliArgs::try_parse_from(["mandelbrot_explorer", "--threads", "0"]).is_err());
    }

    #[test]
    fn test_invalid_config_values() {
        let zero_iterations =
            CliArgs::try_parse_from(["mandelbrot_explorer", "--max-iterations", "0"]).unwrap();
        let zero_width = CliArgs::try_parse_from(["mandelbrot_explorer", "--width", "0"]).unwrap();

        assert!(matches!(
            zero_iterations.explorer.to_config(),
            Err(ConfigError::View(ViewStateError::ZeroMaxIterations))
        ));
        assert!(matches!(
            zero_width.explorer.to_config(),
            Err(ConfigError::Resolution(_))
        ));
    }
}
