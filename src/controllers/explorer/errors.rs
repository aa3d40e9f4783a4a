use thiserror::Error;

use crate::core::actions::render_frame::render_frame::RenderError;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("presenter failed: {0}")]
    Presenter(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ExplorerError {
    pub(crate) fn presenter<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Presenter(Box::new(err))
    }
}
