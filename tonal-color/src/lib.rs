//! Color science for tonal.
//!
//! Converts between sRGB and the HCT perceptual color space, builds tonal
//! palettes and fixed-tone Material schemes, and extracts seed colors from
//! bitmaps.
//!
//! # Example
//!
//! ```
//! use tonal_color::{Argb, Scheme, SchemeRole};
//!
//! let seed: Argb = "#6750A4".parse().unwrap();
//! let light = Scheme::light_content(seed);
//! let dark = Scheme::dark_content(seed);
//!
//! assert_eq!(light.get(SchemeRole::SurfaceTint), light.get(SchemeRole::Primary));
//! assert_eq!(dark.get(SchemeRole::Shadow), Argb::BLACK);
//! ```
//!
//! Extracting a seed from an image:
//!
//! ```
//! use image::{DynamicImage, Rgba, RgbaImage};
//! use tonal_color::{Argb, extract::{ExtractOptions, extract_primary_color}};
//!
//! let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([0x20, 0x40, 0xE0, 255])));
//! let seed = extract_primary_color(&image, Argb(0xFF12_3456), &ExtractOptions::default());
//! assert_eq!(seed, Argb::from_rgb(0x20, 0x40, 0xE0));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod color;

pub mod contrast;
pub mod extract;
pub mod hct;
pub mod palette;
pub mod quantize;
pub mod scheme;

pub use color::{Argb, ParseColorError};
pub use hct::Hct;
pub use palette::{CorePalette, TonalPalette};
pub use scheme::{Appearance, PaletteSource, Scheme, SchemeRole};
