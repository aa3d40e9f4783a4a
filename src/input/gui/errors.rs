use thiserror::Error;

use crate::controllers::explorer::errors::ExplorerError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error(transparent)]
    Explorer(#[from] ExplorerError),
    #[error("failed to draw frame: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("failed to resize surface: {0}")]
    Surface(#[from] pixels::TextureError),
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
}
