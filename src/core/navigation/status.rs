use crate::core::data::resolution::Resolution;
use crate::core::data::view_state::ViewState;

#[must_use]
pub fn status_text(view: &ViewState, resolution: Resolution) -> String {
    format!(
        "Max iterations: {}\nZoom: x{:.2}\nResolution: {}x{}",
        view.max_iterations(),
        view.zoom_factor(),
        resolution.width(),
        resolution.height()
    )
}
