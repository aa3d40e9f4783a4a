use crate::core::data::colour::Colour;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("a palette needs at least one colour stop")]
    Empty,
}

/// An ordered ramp of colour stops, interpolated linearly between neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    stops: &'static [Colour],
}

const DEFAULT_STOPS: [Colour; 5] = [
    Colour::new(60, 0, 85),
    Colour::new(187, 232, 255),
    Colour::new(230, 155, 218),
    Colour::new(240, 240, 255),
    Colour::new(0, 2, 0),
];

/// Ramp used by the explorer: deep purple through pale blue and pink to
/// near-white, ending in the near-black used for points inside the set.
pub const DEFAULT_PALETTE: Palette = Palette {
    stops: &DEFAULT_STOPS,
};

impl Palette {
    pub fn new(stops: &'static [Colour]) -> Result<Self, PaletteError> {
        if stops.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self { stops })
    }

    #[must_use]
    pub fn stops(&self) -> &'static [Colour] {
        self.stops
    }

    #[must_use]
    pub fn first(&self) -> Colour {
        self.stops[0]
    }

    /// Colour given to interior points and to any input that cannot be placed
    /// on the ramp.
    #[must_use]
    pub fn last(&self) -> Colour {
        self.stops[self.stops.len() - 1]
    }

    #[must_use]
    pub fn colour_for(&self, smooth_iterations: f64, max_iterations: u32) -> Colour {
        colour_for(smooth_iterations, max_iterations, self)
    }
}

impl Default for Palette {
    fn default() -> Self {
        DEFAULT_PALETTE
    }
}

/// Places `smooth_iterations / max_iterations` on the palette ramp.
///
/// All three channels are interpolated between the two neighbouring stops.
#[must_use]
pub fn colour_for(smooth_iterations: f64, max_iterations: u32, palette: &Palette) -> Colour {
    if max_iterations == 0 || !smooth_iterations.is_finite() {
        return palette.last();
    }

    let max_stop = palette.stops.len() - 1;
    let mu = (smooth_iterations / f64::from(max_iterations)).clamp(0.0, 1.0) * max_stop as f64;
    let index = (mu.floor() as usize).min(max_stop);
    let from = palette.stops[index];
    let to = palette.stops[(index + 1).min(max_stop)];

    from.lerp(to, mu - index as f64)
}
