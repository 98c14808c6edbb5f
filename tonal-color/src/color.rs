//! Packed 8-bit ARGB colors.
//!
//! [`Argb`] is the exchange type of the whole workspace: seeds, palette tones,
//! scheme roles and extracted colors are all plain `0xAARRGGBB` words, the same
//! layout Android uses for `@ColorInt`.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// A color in the sRGB color space, packed as `0xAARRGGBB`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Argb(pub u32);

impl Argb {
    // --- Common Colors ---
    /// Fully transparent black.
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);
    /// Opaque black.
    pub const BLACK: Argb = Argb(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    /// Creates an opaque color from red, green and blue components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Creates a color from alpha, red, green and blue components.
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Alpha component.
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red component.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green component.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Returns the `[r, g, b]` components.
    #[inline]
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// Returns a copy of this color with the alpha component replaced.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// Returns `true` when the color is fully opaque.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 255
    }

    /// Formats the color as `#RRGGBB`, or `#AARRGGBB` when not opaque.
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:06X}", self.0 & 0x00FF_FFFF)
        } else {
            format!("#{:08X}", self.0)
        }
    }

    /// Linearly interpolates every ARGB channel towards `other`.
    ///
    /// `ratio` 0.0 returns `self`, 1.0 returns `other`. Channels are truncated,
    /// not rounded, matching Android's `ColorUtils.blendARGB`.
    pub fn blend(self, other: Argb, ratio: f32) -> Argb {
        let ratio = ratio.clamp(0.0, 1.0);
        let inverse = 1.0 - ratio;
        let mix = |a: u8, b: u8| (a as f32 * inverse + b as f32 * ratio) as u8;
        Argb::from_argb(
            mix(self.alpha(), other.alpha()),
            mix(self.red(), other.red()),
            mix(self.green(), other.green()),
            mix(self.blue(), other.blue()),
        )
    }

    /// Draws this color with the given `alpha` over `background`.
    ///
    /// The color's own alpha is replaced by `alpha` before compositing, so
    /// `on_surface.composite_over(0.38, surface)` is the usual disabled-content
    /// recipe.
    pub fn composite_over(self, alpha: f32, background: Argb) -> Argb {
        let fg_a = alpha.clamp(0.0, 1.0);
        let bg_a = background.alpha() as f32 / 255.0;
        let out_a = fg_a + bg_a * (1.0 - fg_a);
        if out_a <= 0.0 {
            return Argb::TRANSPARENT;
        }
        let channel = |fg: u8, bg: u8| {
            let fg = fg as f32 / 255.0;
            let bg = bg as f32 / 255.0;
            to_u8((fg * fg_a + bg * bg_a * (1.0 - fg_a)) / out_a)
        };
        Argb::from_argb(
            to_u8(out_a),
            channel(self.red(), background.red()),
            channel(self.green(), background.green()),
            channel(self.blue(), background.blue()),
        )
    }

    /// Interpolates towards `other` in the Oklab color space.
    ///
    /// Oklab keeps perceived lightness and hue steady across the transition,
    /// which is what animated theme changes are rendered with.
    pub fn lerp_oklab(self, other: Argb, fraction: f32) -> Argb {
        let t = fraction.clamp(0.0, 1.0);
        if t == 0.0 {
            return self;
        }
        if t == 1.0 {
            return other;
        }
        let (l1, a1, b1) = self.to_oklab();
        let (l2, a2, b2) = other.to_oklab();
        let lerp = |x: f32, y: f32| x + (y - x) * t;
        let (r, g, b) = oklab_to_linear_srgb(lerp(l1, l2), lerp(a1, a2), lerp(b1, b2));
        let alpha = lerp(self.alpha() as f32, other.alpha() as f32).round() as u8;
        Argb::from_argb(
            alpha,
            to_u8(linear_to_srgb(r)),
            to_u8(linear_to_srgb(g)),
            to_u8(linear_to_srgb(b)),
        )
    }

    /// Converts to Oklab `(L, a, b)`.
    pub fn to_oklab(self) -> (f32, f32, f32) {
        let r = srgb_to_linear(self.red() as f32 / 255.0);
        let g = srgb_to_linear(self.green() as f32 / 255.0);
        let b = srgb_to_linear(self.blue() as f32 / 255.0);
        linear_srgb_to_oklab(r, g, b)
    }

    /// Converts to HSL: hue in degrees `[0, 360)`, saturation and lightness in
    /// `[0, 1]`.
    pub fn to_hsl(self) -> [f32; 3] {
        let rf = self.red() as f32 / 255.0;
        let gf = self.green() as f32 / 255.0;
        let bf = self.blue() as f32 / 255.0;

        let max = rf.max(gf.max(bf));
        let min = rf.min(gf.min(bf));
        let delta = max - min;
        let l = (max + min) / 2.0;

        let (mut h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let h = if max == rf {
                ((gf - bf) / delta) % 6.0
            } else if max == gf {
                (bf - rf) / delta + 2.0
            } else {
                (rf - gf) / delta + 4.0
            };
            (h, delta / (1.0 - (2.0 * l - 1.0).abs()))
        };

        h = (h * 60.0) % 360.0;
        if h < 0.0 {
            h += 360.0;
        }
        [h, s.clamp(0.0, 1.0), l.clamp(0.0, 1.0)]
    }
}

/// The default color is fully transparent.
impl Default for Argb {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb(#{:08X})", self.0)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Error returned when parsing an [`Argb`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Nothing to parse.
    #[error("color string is empty")]
    Empty,
    /// Neither `RRGGBB` nor `AARRGGBB`.
    #[error("expected 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),
    /// A character outside `0-9a-fA-F`.
    #[error("invalid hex digit in color `{0}`")]
    InvalidDigit(String),
}

impl FromStr for Argb {
    type Err = ParseColorError;

    /// Parses `#RRGGBB`, `#AARRGGBB` or the same without the leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(ParseColorError::Empty);
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(s.to_string()));
        }
        let len = digits.len();
        if len != 6 && len != 8 {
            return Err(ParseColorError::InvalidLength(len));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ParseColorError::InvalidDigit(s.to_string()))?;
        if len == 6 {
            Ok(Argb(0xFF00_0000 | value))
        } else {
            Ok(Argb(value))
        }
    }
}

// --- From Conversions ---

impl From<u32> for Argb {
    #[inline]
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    #[inline]
    fn from(color: Argb) -> Self {
        color.0
    }
}

impl From<[u8; 3]> for Argb {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl From<[u8; 4]> for Argb {
    /// Interprets the array as `[r, g, b, a]`, the pixel order of `image::Rgba`.
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::from_argb(a, r, g, b)
    }
}

impl From<Argb> for [u8; 4] {
    #[inline]
    fn from(color: Argb) -> Self {
        [color.red(), color.green(), color.blue(), color.alpha()]
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Argb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Argb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

fn srgb_to_linear(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(v: f32) -> f32 {
    let v = v.clamp(0.0, 1.0);
    if v <= 0.003_130_8 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

// Oklab matrices from Björn Ottosson's reference implementation.

fn linear_srgb_to_oklab(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let l = 0.412_221_47 * r + 0.536_332_55 * g + 0.051_445_995 * b;
    let m = 0.211_903_5 * r + 0.680_699_5 * g + 0.107_396_96 * b;
    let s = 0.088_302_46 * r + 0.281_718_84 * g + 0.629_978_7 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    (
        0.210_454_26 * l_ + 0.793_617_8 * m_ - 0.004_072_047 * s_,
        1.977_998_5 * l_ - 2.428_592_2 * m_ + 0.450_593_7 * s_,
        0.025_904_037 * l_ + 0.782_771_77 * m_ - 0.808_675_77 * s_,
    )
}

fn oklab_to_linear_srgb(l_ok: f32, a: f32, b: f32) -> (f32, f32, f32) {
    let l_ = l_ok + 0.396_337_78 * a + 0.215_803_76 * b;
    let m_ = l_ok - 0.105_561_346 * a - 0.063_854_17 * b;
    let s_ = l_ok - 0.089_484_18 * a - 1.291_485_5 * b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    (
        4.076_741_7 * l - 3.307_711_6 * m + 0.230_969_94 * s,
        -1.268_438 * l + 2.609_757_4 * m - 0.341_319_38 * s,
        -0.004_196_086_3 * l - 0.703_418_6 * m + 1.707_614_7 * s,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components() {
        let c = Argb(0xFF67_50A4);
        assert_eq!(c.alpha(), 0xFF);
        assert_eq!(c.red(), 0x67);
        assert_eq!(c.green(), 0x50);
        assert_eq!(c.blue(), 0xA4);
        assert_eq!(Argb::from_rgb(0x67, 0x50, 0xA4), c);
        assert_eq!(c.with_alpha(0x33), Argb(0x3367_50A4));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("#6750A4".parse::<Argb>(), Ok(Argb(0xFF67_50A4)));
        assert_eq!("6750a4".parse::<Argb>(), Ok(Argb(0xFF67_50A4)));
        assert_eq!("#806750A4".parse::<Argb>(), Ok(Argb(0x8067_50A4)));
        assert_eq!("".parse::<Argb>(), Err(ParseColorError::Empty));
        assert_eq!("#123".parse::<Argb>(), Err(ParseColorError::InvalidLength(3)));
        assert!(matches!(
            "#12345G".parse::<Argb>(),
            Err(ParseColorError::InvalidDigit(_))
        ));

        assert_eq!(Argb(0xFF12_3456).to_string(), "#123456");
        assert_eq!(Argb(0x8012_3456).to_string(), "#80123456");
    }

    #[test]
    fn test_blend_truncates_like_android() {
        let a = Argb::from_rgb(0, 0, 0);
        let b = Argb::from_rgb(255, 101, 3);
        // 127.5 -> 127, 50.5 -> 50, 1.5 -> 1
        assert_eq!(a.blend(b, 0.5), Argb::from_rgb(127, 50, 1));
        assert_eq!(a.blend(b, 0.0), a);
        assert_eq!(a.blend(b, 1.0), b);

        let same = Argb(0xFF12_3456);
        assert_eq!(same.blend(same, 0.5), same);
    }

    #[test]
    fn test_composite_over_opaque_background() {
        let white = Argb::WHITE;
        let black = Argb::BLACK;
        let half = white.composite_over(0.5, black);
        assert_eq!(half.alpha(), 255);
        assert_eq!(half.red(), 128);
        assert_eq!(white.composite_over(0.0, black), black);
        assert_eq!(white.composite_over(1.0, black), white);
    }

    #[test]
    fn test_lerp_oklab_endpoints_and_midpoint() {
        let a = Argb::from_rgb(255, 0, 0);
        let b = Argb::from_rgb(0, 0, 255);
        assert_eq!(a.lerp_oklab(b, 0.0), a);
        assert_eq!(a.lerp_oklab(b, 1.0), b);

        let gray_a = Argb::from_rgb(40, 40, 40);
        let gray_b = Argb::from_rgb(200, 200, 200);
        let mid = gray_a.lerp_oklab(gray_b, 0.5);
        // Grays stay gray and land between the endpoints.
        assert!(mid.red().abs_diff(mid.green()) <= 1);
        assert!(mid.green().abs_diff(mid.blue()) <= 1);
        assert!(mid.red() > 40 && mid.red() < 200);
    }

    #[test]
    fn test_hsl() {
        let [h, s, l] = Argb::from_rgb(255, 0, 0).to_hsl();
        assert!((h - 0.0).abs() < 1e-3);
        assert!((s - 1.0).abs() < 1e-3);
        assert!((l - 0.5).abs() < 1e-3);

        let [h, _, _] = Argb::from_rgb(0, 0, 255).to_hsl();
        assert!((h - 240.0).abs() < 1e-3);

        let [h, _, _] = Argb::from_rgb(255, 0, 128).to_hsl();
        assert!(h > 300.0 && h < 360.0);

        let [_, s, l] = Argb::from_rgb(128, 128, 128).to_hsl();
        assert_eq!(s, 0.0);
        assert!((l - 0.502).abs() < 1e-2);
    }

    #[test]
    fn test_rgba_array_order() {
        let c: Argb = [1u8, 2, 3, 4].into();
        assert_eq!(c, Argb(0x0401_0203));
        let back: [u8; 4] = c.into();
        assert_eq!(back, [1, 2, 3, 4]);
    }
}
