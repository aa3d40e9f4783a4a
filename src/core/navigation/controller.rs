use crate::core::data::resolution::Resolution;
use crate::core::data::view_state::ViewState;
use crate::core::navigation::command::NavCommand;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Share of the current span moved by one pan step.
pub const PAN_FRACTION: f64 = 0.3;
/// Span divisor applied by one zoom-in step.
pub const ZOOM_STEP: f64 = 5.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Everything a command may change.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NavigationState {
    pub view: ViewState,
    pub resolution: Resolution,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transition {
    pub state: NavigationState,
    /// The pixel buffer no longer matches `state.resolution`.
    pub resolution_changed: bool,
    pub quit: bool,
}

impl Transition {
    fn unchanged(state: NavigationState) -> Self {
        Self {
            state,
            resolution_changed: false,
            quit: false,
        }
    }
}

/// Shifts the view by [`PAN_FRACTION`] of its span.
///
/// Up lowers the imaginary bounds: row 0 of the pixel grid maps to `min_im`,
/// so the picture moves the way the arrow points.
#[must_use]
pub fn pan(view: &ViewState, direction: PanDirection) -> ViewState {
    let w = view.re_span() * PAN_FRACTION;
    let h = view.im_span() * PAN_FRACTION;

    let (d_re, d_im) = match direction {
        PanDirection::Left => (-w, 0.0),
        PanDirection::Right => (w, 0.0),
        PanDirection::Up => (0.0, -h),
        PanDirection::Down => (0.0, h),
    };

    let moved = view.with_bounds(
        view.min_re() + d_re,
        view.max_re() + d_re,
        view.min_im() + d_im,
        view.max_im() + d_im,
    );

    match moved {
        Ok(moved) => moved,
        Err(err) => {
            log::warn!("pan {direction:?} refused: {err}");
            *view
        }
    }
}

/// Recentres the view on the pivot pixel and scales both spans by [`ZOOM_STEP`].
///
/// A pivot outside the frame is clamped to the nearest edge pixel.
#[must_use]
pub fn zoom_at(
    view: &ViewState,
    resolution: Resolution,
    x: u32,
    y: u32,
    direction: ZoomDirection,
) -> ViewState {
    let x = x.min(resolution.width().saturating_sub(1));
    let y = y.min(resolution.height().saturating_sub(1));
    let pivot = pixel_to_complex_coords(x, y, resolution, view);

    let (half_re, half_im, zoom_factor) = match direction {
        ZoomDirection::In => (
            view.re_span() / 2.0 / ZOOM_STEP,
            view.im_span() / 2.0 / ZOOM_STEP,
            view.zoom_factor() * ZOOM_STEP,
        ),
        ZoomDirection::Out => (
            view.re_span() / 2.0 * ZOOM_STEP,
            view.im_span() / 2.0 * ZOOM_STEP,
            view.zoom_factor() / ZOOM_STEP,
        ),
    };

    let zoomed = view
        .with_bounds(
            pivot.real - half_re,
            pivot.real + half_re,
            pivot.imag - half_im,
            pivot.imag + half_im,
        )
        .and_then(|zoomed| zoomed.with_zoom_factor(zoom_factor));

    match zoomed {
        Ok(zoomed) => zoomed,
        Err(err) => {
            log::warn!("zoom {direction:?} at ({x}, {y}) refused: {err}");
            *view
        }
    }
}

#[must_use]
pub fn more_iterations(view: &ViewState) -> ViewState {
    view.with_max_iterations(view.max_iterations().saturating_mul(2))
        .unwrap_or(*view)
}

#[must_use]
pub fn fewer_iterations(view: &ViewState) -> ViewState {
    view.with_max_iterations((view.max_iterations() / 2).max(1))
        .unwrap_or(*view)
}

/// Turns commands into new navigation states.
///
/// Holds the view that `ResetView` returns to; every other command is a
/// pure function of the incoming state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NavigationController {
    home: ViewState,
}

impl NavigationController {
    #[must_use]
    pub fn new(home: ViewState) -> Self {
        Self { home }
    }

    #[must_use]
    pub fn apply(&self, state: NavigationState, command: NavCommand) -> Transition {
        let NavigationState { view, resolution } = state;
        let with_view = |view| Transition::unchanged(NavigationState { view, resolution });
        let with_resolution = |new_resolution: Resolution| Transition {
            state: NavigationState {
                view,
                resolution: new_resolution,
            },
            resolution_changed: new_resolution != resolution,
            quit: false,
        };

        match command {
            NavCommand::PanLeft => with_view(pan(&view, PanDirection::Left)),
            NavCommand::PanRight => with_view(pan(&view, PanDirection::Right)),
            NavCommand::PanUp => with_view(pan(&view, PanDirection::Up)),
            NavCommand::PanDown => with_view(pan(&view, PanDirection::Down)),
            NavCommand::ZoomIn { x, y } => {
                with_view(zoom_at(&view, resolution, x, y, ZoomDirection::In))
            }
            NavCommand::ZoomOut { x, y } => {
                with_view(zoom_at(&view, resolution, x, y, ZoomDirection::Out))
            }
            NavCommand::IncreaseIterations => with_view(more_iterations(&view)),
            NavCommand::DecreaseIterations => with_view(fewer_iterations(&view)),
            NavCommand::IncreaseResolution => with_resolution(resolution.increased()),
            NavCommand::DecreaseResolution => with_resolution(resolution.decreased()),
            NavCommand::ResetView => with_view(self.home),
            NavCommand::Quit => Transition {
                quit: true,
                ..Transition::unchanged(state)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_state() -> NavigationState {
        NavigationState {
            view: ViewState::default(),
            resolution: Resolution::new(800, 600).unwrap(),
        }
    }

    fn controller() -> NavigationController {
        NavigationController::new(ViewState::default())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-12, "{actual} != {expected}");
    }

    #[test]
    fn test_pan_moves_by_thirty_percent_of_span() {
        let view = ViewState::default();

        let left = pan(&view, PanDirection::Left);
        assert_close(left.min_re(), -2.5 - 1.05);
        assert_close(left.max_re(), 1.0 - 1.05);
        assert_eq!(left.min_im(), -1.0);

        let up = pan(&view, PanDirection::Up);
        assert_close(up.min_im(), -1.6);
        assert_close(up.max_im(), 0.4);
        assert_eq!(up.min_re(), -2.5);

        let down = pan(&view, PanDirection::Down);
        assert_close(down.min_im(), -0.4);
        assert_close(down.max_im(), 1.6);
    }

    #[test]
    fn test_pan_left_then_right_restores_default_exactly() {
        let controller = controller();
        let start = default_state();

        let left = controller.apply(start, NavCommand::PanLeft).state;
        let back = controller.apply(left, NavCommand::PanRight).state;

        assert_eq!(back, start);
    }

    #[test]
    fn test_pan_round_trips_on_arbitrary_views() {
        // exact only where the shifted bounds are representable, e.g. the default view
        let views = [
            ViewState::new(-1.77, -1.76, -0.01, 0.013, 128).unwrap(),
            ViewState::new(0.1, 0.3, -0.7, 0.2, 128).unwrap(),
        ];

        for view in views {
            let horizontal = pan(&pan(&view, PanDirection::Left), PanDirection::Right);
            let vertical = pan(&pan(&view, PanDirection::Up), PanDirection::Down);

            for restored in [horizontal, vertical] {
                assert_close(restored.min_re(), view.min_re());
                assert_close(restored.max_re(), view.max_re());
                assert_close(restored.min_im(), view.min_im());
                assert_close(restored.max_im(), view.max_im());
            }
        }
    }

    #[test]
    fn test_pan_keeps_iterations_and_zoom() {
        let view = ViewState::default().with_zoom_factor(25.0).unwrap();
        let moved = pan(&view, PanDirection::Right);

        assert_eq!(moved.zoom_factor(), 25.0);
        assert_eq!(moved.max_iterations(), view.max_iterations());
    }

    #[test]
    fn test_zoom_in_recentres_on_pivot() {
        let view = ViewState::default();
        let resolution = Resolution::new(800, 600).unwrap();

        // pixel (0, 0) is the top-left corner of the view
        let zoomed = zoom_at(&view, resolution, 0, 0, ZoomDirection::In);

        assert_close(zoomed.centre().real, -2.5);
        assert_close(zoomed.centre().imag, -1.0);
        assert_close(zoomed.re_span(), 0.7);
        assert_close(zoomed.im_span(), 0.4);
        assert_eq!(zoomed.zoom_factor(), 5.0);
    }

    #[test]
    fn test_zoom_in_then_out_at_centre_restores_bounds() {
        let controller = controller();
        let start = default_state();
        let pivot = NavCommand::ZoomIn { x: 400, y: 300 };

        let zoomed = controller.apply(start, pivot).state;
        let restored = controller.apply(zoomed, NavCommand::ZoomOut { x: 400, y: 300 }).state;

        assert_close(restored.view.min_re(), -2.5);
        assert_close(restored.view.max_re(), 1.0);
        assert_close(restored.view.min_im(), -1.0);
        assert_close(restored.view.max_im(), 1.0);
        assert_eq!(restored.view.zoom_factor(), 1.0);
    }

    #[test]
    fn test_zoom_out_widens_span() {
        let view = ViewState::default();
        let resolution = Resolution::new(800, 600).unwrap();

        let zoomed = zoom_at(&view, resolution, 400, 300, ZoomDirection::Out);

        assert_close(zoomed.re_span(), 17.5);
        assert_close(zoomed.im_span(), 10.0);
        assert_close(zoomed.zoom_factor(), 0.2);
    }

    #[test]
    fn test_out_of_frame_pivot_zooms_at_edge_pixel() {
        let controller = controller();
        let start = default_state();

        let outside = controller.apply(start, NavCommand::ZoomIn { x: 5000, y: 5000 }).state;
        let corner = controller.apply(start, NavCommand::ZoomIn { x: 799, y: 599 }).state;

        assert_eq!(outside, corner);
        assert!(start.view.contains_point(outside.view.centre()));
    }

    #[test]
    fn test_collapsing_zoom_is_refused() {
        // a span of one ulp around 1.0 cannot be divided any further
        let view = ViewState::new(1.0, 1.0 + f64::EPSILON, -1.0, 1.0, 64).unwrap();
        let resolution = Resolution::new(800, 600).unwrap();

        let zoomed = zoom_at(&view, resolution, 0, 0, ZoomDirection::In);

        assert_eq!(zoomed, view);
    }

    #[test]
    fn test_overflowing_pan_is_refused() {
        let view = ViewState::new(0.0, f64::MAX, -1.0, 1.0, 64).unwrap();

        assert_eq!(pan(&view, PanDirection::Right), view);
    }

    #[test]
    fn test_iterations_double_and_halve() {
        let controller = controller();
        let start = default_state();

        let more = controller.apply(start, NavCommand::IncreaseIterations).state;
        assert_eq!(more.view.max_iterations(), 256);

        let fewer = controller.apply(start, NavCommand::DecreaseIterations).state;
        assert_eq!(fewer.view.max_iterations(), 64);
    }

    #[test]
    fn test_iterations_stay_in_range() {
        let one = ViewState::default().with_max_iterations(1).unwrap();
        assert_eq!(fewer_iterations(&one).max_iterations(), 1);

        let three = ViewState::default().with_max_iterations(3).unwrap();
        assert_eq!(fewer_iterations(&three).max_iterations(), 1);

        let huge = ViewState::default().with_max_iterations(u32::MAX - 1).unwrap();
        assert_eq!(more_iterations(&huge).max_iterations(), u32::MAX);
    }

    #[test]
    fn test_resolution_commands_signal_reallocation() {
        let controller = controller();
        let start = default_state();

        let bigger = controller.apply(start, NavCommand::IncreaseResolution);
        assert!(bigger.resolution_changed);
        assert_eq!(bigger.state.resolution, Resolution::new(900, 650).unwrap());
        assert_eq!(bigger.state.view, start.view);

        let smaller = controller.apply(bigger.state, NavCommand::DecreaseResolution);
        assert!(smaller.resolution_changed);
        assert_eq!(smaller.state.resolution, start.resolution);
    }

    #[test]
    fn test_decrease_at_minimum_is_not_a_change() {
        let transition = controller().apply(default_state(), NavCommand::DecreaseResolution);

        assert!(!transition.resolution_changed);
        assert_eq!(transition.state, default_state());
    }

    #[test]
    fn test_repeated_decrease_converges_to_minimum() {
        let controller = controller();
        let mut state = NavigationState {
            view: ViewState::default(),
            resolution: Resolution::new(1920, 1080).unwrap(),
        };

        for _ in 0..30 {
            state = controller.apply(state, NavCommand::DecreaseResolution).state;
            assert!(state.resolution.width() >= 800);
            assert!(state.resolution.height() >= 600);
        }

        assert_eq!(state.resolution, Resolution::new(800, 600).unwrap());
    }

    #[test]
    fn test_reset_restores_home_view() {
        let home = ViewState::new(-1.0, 1.0, -1.0, 1.0, 32).unwrap();
        let controller = NavigationController::new(home);
        let mut state = NavigationState {
            view: home,
            resolution: Resolution::new(800, 600).unwrap(),
        };

        for command in [
            NavCommand::ZoomIn { x: 10, y: 20 },
            NavCommand::PanLeft,
            NavCommand::IncreaseIterations,
            NavCommand::IncreaseResolution,
        ] {
            state = controller.apply(state, command).state;
        }

        let reset = controller.apply(state, NavCommand::ResetView);

        assert_eq!(reset.state.view, home);
        assert_eq!(reset.state.resolution, Resolution::new(900, 650).unwrap());
        assert!(!reset.resolution_changed);
    }

    #[test]
    fn test_quit_changes_nothing() {
        let transition = controller().apply(default_state(), NavCommand::Quit);

        assert!(transition.quit);
        assert!(!transition.resolution_changed);
        assert_eq!(transition.state, default_state());
    }
}
