use std::num::NonZeroUsize;

use crate::core::data::resolution::Resolution;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

/// Starting point of a session.
///
/// `view` is also where `ResetView` returns to. `threads: None` sizes the
/// render pool from the available hardware parallelism.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExplorerConfig {
    pub view: ViewState,
    pub resolution: Resolution,
    pub colour_map: MandelbrotColourMapKinds,
    pub threads: Option<NonZeroUsize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExplorerConfig::default();

        assert_eq!(config.view, ViewState::default());
        assert_eq!(config.resolution, Resolution::new(1920, 1080).unwrap());
        assert_eq!(config.colour_map, MandelbrotColourMapKinds::PaletteRamp);
        assert_eq!(config.threads, None);
    }
}
