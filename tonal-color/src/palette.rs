//! Tonal palettes and the five-plus-one palette set schemes are built from.

use material_color_utilities::{
    palettes::TonalPalette as MaterialPalette, utils::math::sanitize_degrees,
};

use crate::{Argb, hct::Hct};

/// Hue of the error palette.
pub const ERROR_HUE: f64 = 25.0;
/// Chroma of the error palette.
pub const ERROR_CHROMA: f64 = 84.0;

/// A fixed hue and chroma, sampled at any tone.
///
/// Two palettes with the same hue and chroma always return the same color for
/// the same tone. Sampled tones are cached per palette, so a palette is cheap
/// to query repeatedly but is not `Sync`.
#[derive(Clone, Debug)]
pub struct TonalPalette(MaterialPalette);

impl TonalPalette {
    /// A palette of the given hue (degrees, normalized) and chroma.
    pub fn from_hue_and_chroma(hue: f64, chroma: f64) -> Self {
        Self(MaterialPalette::from_hue_and_chroma(
            sanitize_degrees(hue),
            chroma.max(0.0),
        ))
    }

    /// A palette with the hue and chroma of `argb`. Its tone is discarded.
    pub fn from_argb(argb: Argb) -> Self {
        // `MaterialPalette::from_int` reads the hue as the chroma too.
        let hct = Hct::from_argb(argb);
        Self::from_hue_and_chroma(hct.hue(), hct.chroma())
    }

    /// The color at `tone`, clamped to 0..=100.
    ///
    /// Tone 0 is black and tone 100 is white for every palette.
    pub fn tone(&self, tone: u8) -> Argb {
        Argb(self.0.tone(tone.min(100)))
    }

    /// Hue in degrees.
    #[inline]
    pub fn hue(&self) -> f64 {
        self.0.hue()
    }

    /// Requested chroma. Individual tones may achieve less.
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.0.chroma()
    }
}

impl PartialEq for TonalPalette {
    fn eq(&self, other: &Self) -> bool {
        self.hue() == other.hue() && self.chroma() == other.chroma()
    }
}

/// The accent, neutral and error palettes derived from one seed.
#[derive(Clone, Debug, PartialEq)]
pub struct CorePalette {
    /// Primary accent.
    pub a1: TonalPalette,
    /// Secondary accent.
    pub a2: TonalPalette,
    /// Tertiary accent.
    pub a3: TonalPalette,
    /// Neutral.
    pub n1: TonalPalette,
    /// Neutral variant.
    pub n2: TonalPalette,
    /// Error.
    pub error: TonalPalette,
}

impl CorePalette {
    /// The content-style palettes of a seed: the accent keeps the seed's
    /// chroma, the secondary and tertiary accents are quieter and the tertiary
    /// is rotated by 60°.
    pub fn content_of(seed: Argb) -> Self {
        let hct = Hct::from_argb(seed);
        Self::from_hue_and_chroma(hct.hue(), hct.chroma())
    }

    /// Content-style palettes of an arbitrary hue and chroma.
    pub fn from_hue_and_chroma(hue: f64, chroma: f64) -> Self {
        Self {
            a1: TonalPalette::from_hue_and_chroma(hue, chroma),
            a2: TonalPalette::from_hue_and_chroma(hue, chroma / 3.0),
            a3: TonalPalette::from_hue_and_chroma(hue + 60.0, chroma / 2.0),
            n1: TonalPalette::from_hue_and_chroma(hue, (chroma / 12.0).min(4.0)),
            n2: TonalPalette::from_hue_and_chroma(hue, (chroma / 6.0).min(8.0)),
            error: TonalPalette::from_hue_and_chroma(ERROR_HUE, ERROR_CHROMA),
        }
    }
}
