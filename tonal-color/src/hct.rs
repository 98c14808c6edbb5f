//! HCT: hue, chroma and tone.
//!
//! Hue and chroma come from CAM16, tone is CIE L*. Tone maps directly onto
//! contrast, which is what makes HCT convenient for building accessible
//! schemes: two colors whose tones differ by 40 or more are legible on each
//! other, whatever their hues.
//!
//! The color science lives in `material_color_utilities`; [`Hct`] adapts it to
//! [`Argb`].

use material_color_utilities::hct::Hct as MaterialHct;

use crate::Argb;

/// A color in the HCT color space.
///
/// Every `Hct` is backed by a real sRGB color: constructing one from
/// out-of-gamut coordinates lowers the chroma until the color fits, so
/// [`Hct::chroma`] can be smaller than what was asked for.
#[derive(Clone, Debug, PartialEq)]
pub struct Hct(MaterialHct);

impl Hct {
    /// Creates the color closest to the given coordinates.
    ///
    /// * `hue` - degrees, any value; normalized to `[0, 360)`.
    /// * `chroma` - 0 and up; reduced when out of gamut.
    /// * `tone` - 0..=100.
    pub fn new(hue: f64, chroma: f64, tone: f64) -> Self {
        Self(MaterialHct::from(hue, chroma, tone))
    }

    /// The HCT coordinates of an sRGB color.
    pub fn from_argb(argb: Argb) -> Self {
        Self(MaterialHct::from_int(argb.0))
    }

    /// Hue in degrees, `[0, 360)`.
    #[inline]
    pub fn hue(&self) -> f64 {
        self.0.hue()
    }

    /// Achieved chroma.
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.0.chroma()
    }

    /// Tone (L*), 0..=100.
    #[inline]
    pub fn tone(&self) -> f64 {
        self.0.tone()
    }

    /// The backing sRGB color.
    #[inline]
    pub fn to_argb(&self) -> Argb {
        Argb(self.0.to_int())
    }

    /// Same chroma and tone, new hue.
    pub fn with_hue(&self, hue: f64) -> Self {
        let mut hct = self.0.clone();
        hct.set_hue(hue);
        Self(hct)
    }

    /// Same hue and tone, new chroma.
    pub fn with_chroma(&self, chroma: f64) -> Self {
        let mut hct = self.0.clone();
        hct.set_chroma(chroma);
        Self(hct)
    }

    /// Same hue and chroma, new tone.
    pub fn with_tone(&self, tone: f64) -> Self {
        let mut hct = self.0.clone();
        hct.set_tone(tone);
        Self(hct)
    }
}

impl From<Argb> for Hct {
    fn from(argb: Argb) -> Self {
        Self::from_argb(argb)
    }
}

impl From<Hct> for Argb {
    fn from(hct: Hct) -> Self {
        hct.to_argb()
    }
}
