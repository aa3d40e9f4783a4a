use thiserror::Error;

use crate::controllers::cli::args::{CliArgs, ConfigError};
use crate::controllers::explorer::ExplorerSession;
use crate::controllers::explorer::errors::ExplorerError;
use crate::presenters::file::ppm::PpmFilePresenter;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Explorer(#[from] ExplorerError),
}

/// What a CLI run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CliOutcome {
    /// Status text of the final view.
    pub status: String,
    /// Number of frames written; zero when the script quit first.
    pub frames_written: u64,
}

/// Applies the scripted commands, then renders and writes one frame.
pub fn run_cli(args: &CliArgs) -> Result<CliOutcome, CliError> {
    let config = args.explorer.to_config()?;
    let presenter = PpmFilePresenter::new(&args.output);
    log::debug!("frame will be written to {}", presenter.filepath().display());
    let mut session = ExplorerSession::new(config, presenter)?;

    log::info!("applying {} scripted commands", args.commands.len());

    let rendered = session.run_script(args.commands.iter().copied())?;

    if !rendered {
        log::info!("script quit before rendering, nothing written");
    } else if let Some(duration) = session.last_render_duration() {
        log::info!("frame rendered in {duration:?}");
    }

    Ok(CliOutcome {
        status: session.status(),
        frames_written: session.presenter().frames_written(),
    })
}
