//! Dynamic Material theming for tonal.
//!
//! A theme is described by a [`ColorTuple`] of key colors, resolved into a
//! [`ColorScheme`] for the current appearance and held by a
//! [`ThemeController`] that callers share explicitly.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use tonal_color::{Appearance, Argb};
//! use tonal_theme::{ColorTuple, ThemeController};
//!
//! let controller = Arc::new(ThemeController::new(ColorTuple::new(Argb(0xFF67_50A4))));
//! let light = controller.scheme(Appearance::Light, false);
//! assert_eq!(light.surface_tint, light.primary);
//!
//! controller.update_color(Argb(0xFF00_6A6A));
//! let amoled = controller.scheme(Appearance::Dark, true);
//! assert_eq!(amoled.background, Argb::BLACK);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod controller;
pub mod options;
pub mod quality;
pub mod save_location;
pub mod source;
pub mod theme;
pub mod transition;
pub mod tuple;

use tonal_color::Argb;

pub use controller::ThemeController;
pub use options::{ThemeOptions, ThemeOptionsBuilder};
pub use source::{PlatformColors, select_color_tuple};
pub use theme::{ColorScheme, resolve};
pub use transition::SchemeTransition;
pub use tuple::ColorTuple;

/// Seed of the built-in theme, `#6750A4`.
pub const DEFAULT_COLOR: Argb = Argb(0xFF67_50A4);

/// Tuple used when nothing else is configured.
pub const DEFAULT_COLOR_TUPLE: ColorTuple = ColorTuple::new(DEFAULT_COLOR);
