#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKinds {
    #[default]
    PaletteRamp,
    Grayscale,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::PaletteRamp, Self::Grayscale];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PaletteRamp => "Palette ramp",
            Self::Grayscale => "Grayscale",
        }
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
