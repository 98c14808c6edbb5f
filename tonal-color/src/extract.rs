//! Picking a seed color out of a bitmap.
//!
//! The image is quantized into a handful of [`Swatch`]es, which are then
//! matched against six lightness/saturation [`Target`]s. The seed is the most
//! common swatch, optionally pulled halfway towards the vibrant one.

use std::path::Path;

use derive_builder::Builder;
use image::{DynamicImage, ImageError, RgbaImage, imageops::FilterType};
use tracing::{debug, instrument};

use crate::{
    Argb,
    quantize::{Swatch, quantize},
};

/// Pixel count images are scaled down to before quantization.
pub const DEFAULT_RESIZE_AREA: u32 = 112 * 112;
/// Maximum number of swatches kept by the quantizer.
pub const DEFAULT_MAX_COLORS: usize = 16;

const WEIGHT_SATURATION: f32 = 0.24;
const WEIGHT_LIGHTNESS: f32 = 0.52;
const WEIGHT_POPULATION: f32 = 0.24;

/// Options for [`Palette::generate`] and [`extract_primary_color`].
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(pattern = "owned", default)]
pub struct ExtractOptions {
    /// Images with more pixels than this are scaled down first.
    pub resize_area: u32,
    /// Upper bound on the number of swatches.
    pub max_colors: usize,
    /// Blend the dominant color 50/50 with the vibrant color.
    pub blend_with_vibrant: bool,
    /// Pixels with a lower alpha are ignored.
    pub min_alpha: u8,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            resize_area: DEFAULT_RESIZE_AREA,
            max_colors: DEFAULT_MAX_COLORS,
            blend_with_vibrant: true,
            min_alpha: 1,
        }
    }
}

/// A lightness/saturation profile a swatch can be picked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Bright and saturated.
    LightVibrant,
    /// Mid-lightness and saturated.
    Vibrant,
    /// Dark and saturated.
    DarkVibrant,
    /// Bright and desaturated.
    LightMuted,
    /// Mid-lightness and desaturated.
    Muted,
    /// Dark and desaturated.
    DarkMuted,
}

impl Target {
    /// Every target, in the order swatches are assigned.
    pub const ALL: [Target; 6] = [
        Target::LightVibrant,
        Target::Vibrant,
        Target::DarkVibrant,
        Target::LightMuted,
        Target::Muted,
        Target::DarkMuted,
    ];

    /// `[min, target, max]` lightness.
    pub const fn lightness(self) -> [f32; 3] {
        match self {
            Target::LightVibrant | Target::LightMuted => [0.55, 0.74, 1.0],
            Target::Vibrant | Target::Muted => [0.3, 0.5, 0.7],
            Target::DarkVibrant | Target::DarkMuted => [0.0, 0.26, 0.45],
        }
    }

    /// `[min, target, max]` saturation.
    pub const fn saturation(self) -> [f32; 3] {
        match self {
            Target::LightVibrant | Target::Vibrant | Target::DarkVibrant => [0.35, 1.0, 1.0],
            Target::LightMuted | Target::Muted | Target::DarkMuted => [0.0, 0.3, 0.4],
        }
    }

    fn accepts(self, swatch: &Swatch) -> bool {
        let [_, s, l] = swatch.hsl();
        let [min_s, _, max_s] = self.saturation();
        let [min_l, _, max_l] = self.lightness();
        (min_s..=max_s).contains(&s) && (min_l..=max_l).contains(&l)
    }

    fn score(self, swatch: &Swatch, max_population: u32) -> f32 {
        let [_, s, l] = swatch.hsl();
        let saturation = WEIGHT_SATURATION * (1.0 - (s - self.saturation()[1]).abs());
        let lightness = WEIGHT_LIGHTNESS * (1.0 - (l - self.lightness()[1]).abs());
        let population = if max_population > 0 {
            WEIGHT_POPULATION * (swatch.population() as f32 / max_population as f32)
        } else {
            0.0
        };
        saturation + lightness + population
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Swatches of one image and the swatch chosen for each [`Target`].
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    swatches: Vec<Swatch>,
    selected: [Option<usize>; 6],
    dominant: Option<usize>,
}

impl Palette {
    /// Quantizes `image` and assigns swatches to targets.
    #[instrument(level = "debug", skip(image, options))]
    pub fn generate(image: &DynamicImage, options: &ExtractOptions) -> Self {
        let pixels = scale_down(image, options.resize_area);
        Self::from_swatches(quantize(&pixels, options.max_colors, options.min_alpha))
    }

    /// Assigns already-quantized swatches to targets.
    ///
    /// Targets are visited in [`Target::ALL`] order and each swatch is given
    /// to at most one target.
    pub fn from_swatches(swatches: Vec<Swatch>) -> Self {
        let dominant = swatches
            .iter()
            .enumerate()
            .fold(None::<(usize, u32)>, |best, (i, swatch)| match best {
                Some((_, population)) if population >= swatch.population() => best,
                _ => Some((i, swatch.population())),
            })
            .map(|(i, _)| i);
        let max_population = dominant.map_or(0, |i| swatches[i].population());

        let mut used: Vec<Argb> = Vec::new();
        let mut selected = [None; 6];
        for target in Target::ALL {
            let mut best: Option<(usize, f32)> = None;
            for (i, swatch) in swatches.iter().enumerate() {
                if !target.accepts(swatch) || used.contains(&swatch.rgb()) {
                    continue;
                }
                let score = target.score(swatch, max_population);
                if best.is_none_or(|(_, best_score)| score > best_score) {
                    best = Some((i, score));
                }
            }
            if let Some((i, _)) = best {
                used.push(swatches[i].rgb());
                selected[target.index()] = Some(i);
            }
        }
        debug!(swatches = swatches.len(), ?selected, ?dominant, "palette generated");

        Self {
            swatches,
            selected,
            dominant,
        }
    }

    /// All swatches, in quantizer order.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// The swatch chosen for `target`, if any fit.
    pub fn swatch(&self, target: Target) -> Option<&Swatch> {
        self.selected[target.index()].map(|i| &self.swatches[i])
    }

    /// Color of the swatch for `target`, or `fallback`.
    pub fn color(&self, target: Target, fallback: Argb) -> Argb {
        self.swatch(target).map_or(fallback, Swatch::rgb)
    }

    /// The most populous swatch.
    pub fn dominant_swatch(&self) -> Option<&Swatch> {
        self.dominant.map(|i| &self.swatches[i])
    }

    /// Color of the most populous swatch, or `fallback`.
    pub fn dominant_color(&self, fallback: Argb) -> Argb {
        self.dominant_swatch().map_or(fallback, Swatch::rgb)
    }

    /// Shorthand for [`Target::Vibrant`].
    pub fn vibrant_color(&self, fallback: Argb) -> Argb {
        self.color(Target::Vibrant, fallback)
    }
}

/// The seed color of `image`.
///
/// Returns `fallback` when no swatch survives quantization, e.g. for empty or
/// fully transparent images.
pub fn extract_primary_color(image: &DynamicImage, fallback: Argb, options: &ExtractOptions) -> Argb {
    let palette = Palette::generate(image, options);
    if palette.swatches().is_empty() {
        debug!(fallback = %fallback, "no usable swatches");
        return fallback;
    }
    let dominant = palette.dominant_color(fallback);
    let color = if options.blend_with_vibrant {
        dominant.blend(palette.vibrant_color(fallback), 0.5)
    } else {
        dominant
    };
    debug!(color = %color, "extracted primary color");
    color
}

/// Decodes the image at `path` and extracts its seed color.
pub fn extract_from_path(
    path: impl AsRef<Path>,
    fallback: Argb,
    options: &ExtractOptions,
) -> Result<Argb, ImageError> {
    let image = image::open(path)?;
    Ok(extract_primary_color(&image, fallback, options))
}

/// Decodes an in-memory encoded image and extracts its seed color.
pub fn extract_from_bytes(
    bytes: &[u8],
    fallback: Argb,
    options: &ExtractOptions,
) -> Result<Argb, ImageError> {
    let image = image::load_from_memory(bytes)?;
    Ok(extract_primary_color(&image, fallback, options))
}

fn scale_down(image: &DynamicImage, resize_area: u32) -> RgbaImage {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let area = width as u64 * height as u64;
    if resize_area == 0 || area <= resize_area as u64 {
        return rgba;
    }
    let ratio = (resize_area as f64 / area as f64).sqrt();
    let new_width = ((width as f64 * ratio).ceil() as u32).max(1);
    let new_height = ((height as f64 * ratio).ceil() as u32).max(1);
    debug!(width, height, new_width, new_height, "scaling image down");
    image::imageops::resize(&rgba, new_width, new_height, FilterType::Triangle)
}

#[cfg(test)]
mod tests {
    use image::{ImageFormat, Rgba};

    use super::*;

    const FALLBACK: Argb = Argb(0xFF12_3456);

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(rgba)))
    }

    #[test]
    fn test_empty_image_returns_fallback() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(0, 0));
        let color = extract_primary_color(&image, FALLBACK, &ExtractOptions::default());
        assert_eq!(color, FALLBACK);
    }

    #[test]
    fn test_transparent_image_returns_fallback() {
        let image = solid(32, 32, [200, 30, 90, 0]);
        let color = extract_primary_color(&image, FALLBACK, &ExtractOptions::default());
        assert_eq!(color, FALLBACK);
    }

    #[test]
    fn test_solid_vibrant_color_is_returned() {
        // Saturated blue: dominant and vibrant are the same swatch.
        let image = solid(40, 40, [0x20, 0x40, 0xE0, 255]);
        let color = extract_primary_color(&image, FALLBACK, &ExtractOptions::default());
        assert_eq!(color, Argb::from_rgb(0x20, 0x40, 0xE0));
    }

    #[test]
    fn test_muted_dominant_is_blended_with_fallback_vibrant() {
        // Only a muted gray-blue: no vibrant swatch, so the fallback is blended in.
        let image = solid(10, 10, [0x68, 0x70, 0x80, 255]);
        let options = ExtractOptions::default();
        let palette = Palette::generate(&image, &options);
        assert!(palette.swatch(Target::Vibrant).is_none());
        let dominant = palette.dominant_color(FALLBACK);

        let blended = extract_primary_color(&image, FALLBACK, &options);
        assert_eq!(blended, dominant.blend(FALLBACK, 0.5));

        let options = ExtractOptionsBuilder::default()
            .blend_with_vibrant(false)
            .build()
            .unwrap();
        assert_eq!(extract_primary_color(&image, FALLBACK, &options), dominant);
    }

    #[test]
    fn test_targets_are_exclusive() {
        let swatches = vec![
            Swatch::new(Argb::from_rgb(0x20, 0x40, 0xE0), 100),
            Swatch::new(Argb::from_rgb(0x80, 0xA0, 0xF8), 40),
            Swatch::new(Argb::from_rgb(0x60, 0x68, 0x70), 10),
        ];
        let palette = Palette::from_swatches(swatches);
        assert_eq!(palette.dominant_color(FALLBACK), Argb::from_rgb(0x20, 0x40, 0xE0));
        let picked: Vec<Argb> = Target::ALL
            .iter()
            .filter_map(|&t| palette.swatch(t).map(Swatch::rgb))
            .collect();
        let mut unique = picked.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(picked.len(), unique.len());
        assert_eq!(palette.vibrant_color(FALLBACK), Argb::from_rgb(0x20, 0x40, 0xE0));
    }

    #[test]
    fn test_large_images_are_scaled_down() {
        let image = solid(400, 300, [0x20, 0x40, 0xE0, 255]);
        let scaled = scale_down(&image, DEFAULT_RESIZE_AREA);
        let area = scaled.width() * scaled.height();
        assert!(area <= DEFAULT_RESIZE_AREA + scaled.width() + scaled.height() + 1);
        let small = scale_down(&solid(50, 50, [0, 0, 0, 255]), DEFAULT_RESIZE_AREA);
        assert_eq!(small.dimensions(), (50, 50));
    }

    #[test]
    fn test_extract_from_bytes() {
        let image = solid(16, 16, [0x20, 0x40, 0xE0, 255]);
        let mut bytes = std::io::Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageFormat::Png).unwrap();
        let color =
            extract_from_bytes(bytes.get_ref(), FALLBACK, &ExtractOptions::default()).unwrap();
        assert_eq!(color, Argb::from_rgb(0x20, 0x40, 0xE0));
        assert!(extract_from_bytes(b"not an image", FALLBACK, &ExtractOptions::default()).is_err());
    }
}
