//! Theme configuration.

use std::time::Duration;

use derive_builder::Builder;
use tonal_color::Appearance;

use crate::{DEFAULT_COLOR_TUPLE, transition::DEFAULT_TRANSITION, tuple::ColorTuple};

/// How the application theme is picked and rendered.
///
/// # Example
///
/// ```
/// use tonal_theme::options::ThemeOptionsBuilder;
///
/// let options = ThemeOptionsBuilder::default()
///     .dark_theme(true)
///     .amoled_mode(true)
///     .build()
///     .unwrap();
/// assert!(options.dynamic_color);
/// ```
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(pattern = "owned", default)]
pub struct ThemeOptions {
    /// Tuple used when no dynamic color source is available or wanted.
    pub default_color_tuple: ColorTuple,
    /// Follow the platform's colors instead of `default_color_tuple`.
    pub dynamic_color: bool,
    /// Pure black background and surface in the dark appearance.
    pub amoled_mode: bool,
    /// Use the dark appearance.
    pub dark_theme: bool,
    /// Duration of animated scheme changes.
    pub transition: Duration,
}

impl ThemeOptions {
    /// The appearance selected by `dark_theme`.
    pub fn appearance(&self) -> Appearance {
        Appearance::from_dark(self.dark_theme)
    }
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            default_color_tuple: DEFAULT_COLOR_TUPLE,
            dynamic_color: true,
            amoled_mode: false,
            dark_theme: false,
            transition: DEFAULT_TRANSITION,
        }
    }
}
