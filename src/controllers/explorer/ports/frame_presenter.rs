use crate::controllers::explorer::data::frame_data::FrameData;
use crate::core::data::resolution::Resolution;

/// Where finished frames go.
pub trait FramePresenterPort {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once before the first frame and again whenever the resolution
    /// changes, so the presenter can reallocate its surface.
    fn resize(&mut self, resolution: Resolution) -> Result<(), Self::Error>;

    fn present(&mut self, frame: &FrameData<'_>) -> Result<(), Self::Error>;
}
