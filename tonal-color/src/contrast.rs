//! WCAG contrast ratios.
//!
//! Tone is L*, so the ratio of two tones can be computed without knowing their
//! hue or chroma.

use material_color_utilities::utils::color::xyz_from_argb;

pub use material_color_utilities::contrast::{ratio_of_tones, ratio_of_ys};

use crate::Argb;

/// WCAG AA threshold for body text.
pub const MIN_TEXT_RATIO: f64 = 4.5;

/// Contrast ratio of two colors. Alpha is ignored.
pub fn contrast_ratio(a: Argb, b: Argb) -> f64 {
    let y = |argb: Argb| xyz_from_argb::<f64>(argb.0)[1];
    ratio_of_ys(y(a), y(b))
}
