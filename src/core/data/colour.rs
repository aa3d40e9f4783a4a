#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend from `self` towards `other`, `t` in `[0, 1]`.
    ///
    /// Each channel is computed as `(1 - t) * self + t * other` and truncated
    /// towards zero, so `t == 0` yields `self` exactly and `t == 1` yields
    /// `other` exactly.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let s = 1.0 - t;
        let channel = |a: u8, b: u8| (s * f64::from(a) + t * f64::from(b)) as u8;

        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}
