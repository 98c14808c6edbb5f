//! Model behind the quality / compression-effort control.
//!
//! Lossy formats expose a quality percentage, some lossless formats an effort
//! level, and the rest nothing at all. [`QualityControl`] answers everything
//! a slider-plus-value widget needs to know: visibility, label, range, step
//! count, how to display and how to clamp values.

use std::{fmt, ops::RangeInclusive};

use thiserror::Error;
use tonal_color::Argb;

use crate::theme::ColorScheme;

/// Output formats of the image pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageFormat {
    /// JPEG.
    Jpeg,
    /// PNG.
    Png,
    /// Lossy WebP.
    WebpLossy,
    /// Lossless WebP.
    WebpLossless,
    /// AVIF.
    Avif,
    /// Lossy JPEG XL.
    JxlLossy,
    /// Lossless JPEG XL.
    JxlLossless,
    /// HEIC.
    Heic,
    /// BMP.
    Bmp,
}

/// What the compression value of a format means.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CompressionType {
    /// Quality percentage; higher is better looking.
    Quality(RangeInclusive<i32>),
    /// Encoder effort; higher is smaller and slower.
    Effort(RangeInclusive<i32>),
}

impl CompressionType {
    /// Accepted values.
    pub fn range(&self) -> &RangeInclusive<i32> {
        match self {
            CompressionType::Quality(range) | CompressionType::Effort(range) => range,
        }
    }
}

impl ImageFormat {
    /// Every format.
    pub const ALL: [ImageFormat; 9] = [
        ImageFormat::Jpeg,
        ImageFormat::Png,
        ImageFormat::WebpLossy,
        ImageFormat::WebpLossless,
        ImageFormat::Avif,
        ImageFormat::JxlLossy,
        ImageFormat::JxlLossless,
        ImageFormat::Heic,
        ImageFormat::Bmp,
    ];

    /// The compression setting of the format, if it has one.
    pub fn compression_type(self) -> Option<CompressionType> {
        match self {
            ImageFormat::Jpeg
            | ImageFormat::WebpLossy
            | ImageFormat::Avif
            | ImageFormat::JxlLossy
            | ImageFormat::Heic => Some(CompressionType::Quality(1..=100)),
            ImageFormat::WebpLossless => Some(CompressionType::Effort(0..=100)),
            ImageFormat::JxlLossless => Some(CompressionType::Effort(1..=9)),
            ImageFormat::Png | ImageFormat::Bmp => None,
        }
    }

    /// Whether the format takes a compression value.
    pub fn can_change_compression_value(self) -> bool {
        self.compression_type().is_some()
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Png => "PNG",
            ImageFormat::WebpLossy => "WebP (lossy)",
            ImageFormat::WebpLossless => "WebP (lossless)",
            ImageFormat::Avif => "AVIF",
            ImageFormat::JxlLossy => "JXL (lossy)",
            ImageFormat::JxlLossless => "JXL (lossless)",
            ImageFormat::Heic => "HEIC",
            ImageFormat::Bmp => "BMP",
        };
        f.write_str(name)
    }
}

/// Error returned when a typed-in compression value is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QualityError {
    /// The text is not a number.
    #[error("`{0}` is not a number")]
    NotANumber(String),
    /// The format has no compression setting.
    #[error("{0} has no compression setting")]
    Unsupported(ImageFormat),
}

/// State of the quality control for one format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QualityControl {
    /// Selected output format.
    pub format: ImageFormat,
    /// Whether the user can change the value.
    pub enabled: bool,
}

impl QualityControl {
    /// Control for `format`.
    pub fn new(format: ImageFormat, enabled: bool) -> Self {
        Self { format, enabled }
    }

    /// Whether the control is shown at all.
    pub fn visible(&self) -> bool {
        self.format.can_change_compression_value()
    }

    fn is_effort(&self) -> bool {
        matches!(self.format.compression_type(), Some(CompressionType::Effort(_)))
    }

    /// `"Quality"` or `"Effort"`.
    pub fn label(&self) -> &'static str {
        if self.is_effort() { "Effort" } else { "Quality" }
    }

    /// `"%"` for quality, empty for effort.
    pub fn value_suffix(&self) -> &'static str {
        match self.format.compression_type() {
            Some(CompressionType::Quality(_)) => "%",
            _ => "",
        }
    }

    /// Accepted values; `0..=0` when the format has none.
    pub fn value_range(&self) -> RangeInclusive<i32> {
        self.format
            .compression_type()
            .map_or(0..=0, |kind| kind.range().clone())
    }

    /// Discrete slider steps between the two ends of the range.
    pub fn steps(&self) -> i32 {
        let range = self.value_range();
        (range.end() - range.start() - 1).max(0)
    }

    /// The value shown next to the label: rounded, then clamped.
    pub fn displayed_value(&self, quality: f32) -> i32 {
        let range = self.value_range();
        (quality.round() as i32).clamp(*range.start(), *range.end())
    }

    /// A value the encoder accepts: truncated, then clamped.
    pub fn coerce(&self, value: f32) -> f32 {
        let range = self.value_range();
        (value as i32).clamp(*range.start(), *range.end()) as f32
    }

    /// Parses a value typed by the user and coerces it.
    pub fn parse_value(&self, text: &str) -> Result<f32, QualityError> {
        if !self.visible() {
            return Err(QualityError::Unsupported(self.format));
        }
        let value: f32 = text
            .trim()
            .parse()
            .map_err(|_| QualityError::NotANumber(text.to_string()))?;
        if !value.is_finite() {
            return Err(QualityError::NotANumber(text.to_string()));
        }
        Ok(self.coerce(value))
    }

    /// Explanation shown under effort sliders.
    pub fn effort_hint(&self) -> Option<String> {
        if !self.is_effort() {
            return None;
        }
        let range = self.value_range();
        Some(format!(
            "Effort goes from {} (fastest) to {} (smallest file)",
            range.start(),
            range.end()
        ))
    }

    /// Text color: disabled content color when not enabled, otherwise
    /// `None` to inherit.
    pub fn content_color(&self, scheme: &ColorScheme) -> Option<Argb> {
        (!self.enabled).then(|| scheme.disabled_content_color())
    }
}
