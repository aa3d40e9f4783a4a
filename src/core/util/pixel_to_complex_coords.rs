use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::data::view_state::ViewState;

fn axis_offset(span: f64, index: u32, extent: u32) -> f64 {
    if extent == 0 || span == 0.0 {
        return 0.0;
    }

    span * f64::from(index) / f64::from(extent)
}

/// Maps the pixel at `(x, y)` to the complex coordinate under its top-left corner.
///
/// Pixel `(0, 0)` maps to `(min_re, min_im)`; the far edge `(width, height)` is
/// never reached because indices stop at `width - 1` and `height - 1`.
#[must_use]
pub fn pixel_to_complex_coords(
    x: u32,
    y: u32,
    resolution: Resolution,
    view: &ViewState,
) -> Complex {
    Complex {
        real: view.min_re() + axis_offset(view.re_span(), x, resolution.width()),
        imag: view.min_im() + axis_offset(view.im_span(), y, resolution.height()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(width: u32, height: u32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_pixel_to_complex_top_left() {
        let view = ViewState::default();
        let result = pixel_to_complex_coords(0, 0, resolution(800, 600), &view);

        assert_eq!(result.real, -2.5);
        assert_eq!(result.imag, -1.0);
    }

    #[test]
    fn test_pixel_to_complex_centre() {
        let view = ViewState::default();
        let result = pixel_to_complex_coords(400, 300, resolution(800, 600), &view);

        assert_eq!(result.real, -0.75);
        assert_eq!(result.imag, 0.0);
    }

    #[test]
    fn test_pixel_to_complex_last_pixel_stays_inside_view() {
        let view = ViewState::new(-1.0, 1.0, -1.0, 1.0, 10).unwrap();
        let result = pixel_to_complex_coords(3, 3, resolution(4, 4), &view);

        assert_eq!(result.real, 0.5);
        assert_eq!(result.imag, 0.5);
    }

    #[test]
    fn test_every_pixel_maps_inside_view() {
        let view = ViewState::new(-0.8, -0.7, 0.05, 0.15, 10).unwrap();
        let res = resolution(37, 23);

        for y in 0..res.height() {
            for x in 0..res.width() {
                let c = pixel_to_complex_coords(x, y, res, &view);
                assert!(view.contains_point(c), "pixel ({x}, {y}) mapped to {c:?}");
            }
        }
    }

    #[test]
    fn test_mapping_is_strictly_monotone() {
        let view = ViewState::default();
        let res = resolution(800, 600);

        for x in 1..res.width() {
            let prev = pixel_to_complex_coords(x - 1, 0, res, &view);
            let next = pixel_to_complex_coords(x, 0, res, &view);
            assert!(next.real > prev.real);
            assert_eq!(next.imag, prev.imag);
        }

        for y in 1..res.height() {
            let prev = pixel_to_complex_coords(0, y - 1, res, &view);
            let next = pixel_to_complex_coords(0, y, res, &view);
            assert!(next.imag > prev.imag);
            assert_eq!(next.real, prev.real);
        }
    }

    #[test]
    fn test_zero_extent_does_not_divide_by_zero() {
        assert_eq!(axis_offset(2.0, 5, 0), 0.0);
        assert_eq!(axis_offset(0.0, 5, 10), 0.0);
    }
}
