//! Where the application's color tuple comes from.

use image::DynamicImage;
use tonal_color::extract::{ExtractOptions, extract_primary_color};
use tracing::debug;

use crate::{options::ThemeOptions, tuple::ColorTuple};

/// Platform color sources, queried in priority order by
/// [`select_color_tuple`].
///
/// Every method defaults to "not available".
pub trait PlatformColors {
    /// The system's own dynamic scheme for the given appearance.
    fn system_scheme(&self, dark: bool) -> Option<ColorTuple> {
        let _ = dark;
        None
    }

    /// Colors the platform reports for the current wallpaper.
    fn wallpaper_colors(&self) -> Option<ColorTuple> {
        None
    }

    /// The wallpaper bitmap, when readable.
    fn wallpaper_image(&self) -> Option<DynamicImage> {
        None
    }
}

/// A platform without any dynamic color source.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPlatformColors;

impl PlatformColors for NoPlatformColors {}

/// Picks the tuple the theme should use.
///
/// With dynamic color off the default tuple is used. Otherwise the first
/// available of the system scheme, the wallpaper colors and a color extracted
/// from the wallpaper image wins, falling back to the default tuple.
pub fn select_color_tuple(options: &ThemeOptions, platform: &impl PlatformColors) -> ColorTuple {
    let default = options.default_color_tuple;
    if !options.dynamic_color {
        return default;
    }
    if let Some(tuple) = platform.system_scheme(options.dark_theme) {
        debug!("using system color scheme");
        return tuple;
    }
    if let Some(tuple) = platform.wallpaper_colors() {
        debug!("using wallpaper colors");
        return tuple;
    }
    if let Some(image) = platform.wallpaper_image() {
        debug!("extracting color from wallpaper");
        let primary = extract_primary_color(&image, default.primary, &ExtractOptions::default());
        return ColorTuple::new(primary);
    }
    default
}
