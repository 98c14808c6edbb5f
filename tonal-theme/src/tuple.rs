//! The seed colors a theme is resolved from.

use tonal_color::{Argb, Hct, TonalPalette};

/// Tone used when previewing palettes that are derived rather than given.
const PREVIEW_TONE: u8 = 70;

/// Key colors of a theme.
///
/// Only `primary` is required. A missing `secondary` or `tertiary` is derived
/// from the primary's hue and chroma when the theme is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorTuple {
    /// Main seed color.
    pub primary: Argb,
    /// Optional seed of the secondary palette.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub secondary: Option<Argb>,
    /// Optional seed of the tertiary palette.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub tertiary: Option<Argb>,
}

impl ColorTuple {
    /// A tuple with only a primary color.
    pub const fn new(primary: Argb) -> Self {
        Self {
            primary,
            secondary: None,
            tertiary: None,
        }
    }

    /// A tuple with all three key colors given.
    pub const fn with_accents(primary: Argb, secondary: Argb, tertiary: Argb) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
            tertiary: Some(tertiary),
        }
    }

    /// Palette of the secondary accent: the given secondary color's hue and
    /// chroma, or the primary's hue at a third of its chroma.
    pub fn secondary_palette(&self) -> TonalPalette {
        match self.secondary {
            Some(color) => TonalPalette::from_argb(color),
            None => {
                let hct = Hct::from_argb(self.primary);
                TonalPalette::from_hue_and_chroma(hct.hue(), hct.chroma() / 3.0)
            }
        }
    }

    /// Palette of the tertiary accent: the given tertiary color's hue and
    /// chroma, or the primary rotated by 60° at half its chroma.
    pub fn tertiary_palette(&self) -> TonalPalette {
        match self.tertiary {
            Some(color) => TonalPalette::from_argb(color),
            None => {
                let hct = Hct::from_argb(self.primary);
                TonalPalette::from_hue_and_chroma(hct.hue() + 60.0, hct.chroma() / 2.0)
            }
        }
    }

    /// Three colors summarizing the tuple, for pickers and previews.
    ///
    /// Given colors are returned as-is. Derived accents are shown at tone 70.
    pub fn preview_colors(&self) -> (Argb, Argb, Argb) {
        (
            self.primary,
            self.secondary
                .unwrap_or_else(|| self.secondary_palette().tone(PREVIEW_TONE)),
            self.tertiary
                .unwrap_or_else(|| self.tertiary_palette().tone(PREVIEW_TONE)),
        )
    }
}

impl From<Argb> for ColorTuple {
    fn from(primary: Argb) -> Self {
        Self::new(primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: Argb = Argb(0xFF67_50A4);

    #[test]
    fn test_derived_palettes() {
        let tuple = ColorTuple::new(SEED);
        let hct = Hct::from_argb(SEED);
        let secondary = tuple.secondary_palette();
        assert!((secondary.hue() - hct.hue()).abs() < 1e-9);
        assert!((secondary.chroma() - hct.chroma() / 3.0).abs() < 1e-9);
        let tertiary = tuple.tertiary_palette();
        let expected_hue = (hct.hue() + 60.0) % 360.0;
        assert!((tertiary.hue() - expected_hue).abs() < 1e-9);
        assert!((tertiary.chroma() - hct.chroma() / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_palettes() {
        let green = Argb(0xFF2E_7D32);
        let tuple = ColorTuple::with_accents(SEED, green, green);
        assert_eq!(tuple.secondary_palette(), TonalPalette::from_argb(green));
        assert_eq!(tuple.tertiary_palette(), TonalPalette::from_argb(green));
    }

    #[test]
    fn test_preview_colors() {
        let given = ColorTuple::with_accents(SEED, Argb(0xFF00_FF00), Argb(0xFF00_00FF));
        assert_eq!(
            given.preview_colors(),
            (SEED, Argb(0xFF00_FF00), Argb(0xFF00_00FF))
        );

        let derived = ColorTuple::new(SEED);
        let (primary, secondary, tertiary) = derived.preview_colors();
        assert_eq!(primary, SEED);
        assert_eq!(secondary, derived.secondary_palette().tone(70));
        assert_eq!(tertiary, derived.tertiary_palette().tone(70));
    }
}
