//! Shared, mutable theme state.

use std::sync::atomic::{AtomicU64, Ordering};

use image::DynamicImage;
use parking_lot::RwLock;
use tonal_color::{
    Appearance, Argb,
    extract::{ExtractOptions, extract_primary_color},
};
use tracing::debug;

use crate::{
    options::ThemeOptions,
    source::{PlatformColors, select_color_tuple},
    theme::{ColorScheme, resolve},
    tuple::ColorTuple,
};

/// Holds the current [`ColorTuple`].
///
/// Share it as `Arc<ThemeController>` between whoever changes the theme and
/// whoever renders it. Every update replaces the whole tuple, and
/// [`revision`](Self::revision) increases whenever the tuple actually changes,
/// so readers can cheaply tell whether to re-resolve.
#[derive(Debug)]
pub struct ThemeController {
    tuple: RwLock<ColorTuple>,
    revision: AtomicU64,
}

impl ThemeController {
    /// Creates a controller starting at `initial`.
    pub fn new(initial: ColorTuple) -> Self {
        Self {
            tuple: RwLock::new(initial),
            revision: AtomicU64::new(0),
        }
    }

    /// The current tuple.
    pub fn color_tuple(&self) -> ColorTuple {
        *self.tuple.read()
    }

    /// Number of changes applied so far.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    /// Switches to a single seed color; secondary and tertiary are derived.
    pub fn update_color(&self, color: Argb) {
        self.update_color_tuple(ColorTuple::new(color));
    }

    /// Replaces the tuple.
    pub fn update_color_tuple(&self, tuple: ColorTuple) {
        let mut current = self.tuple.write();
        if *current == tuple {
            return;
        }
        *current = tuple;
        let revision = self.revision.fetch_add(1, Ordering::AcqRel) + 1;
        debug!(primary = %tuple.primary, revision, "color tuple updated");
    }

    /// Seeds the theme from `image`.
    ///
    /// When nothing usable is found in the image the current primary color is
    /// kept.
    pub fn update_color_by_image(&self, image: &DynamicImage) {
        let fallback = self.color_tuple().primary;
        let color = extract_primary_color(image, fallback, &ExtractOptions::default());
        self.update_color(color);
    }

    /// Resolves the current tuple.
    pub fn scheme(&self, appearance: Appearance, amoled: bool) -> ColorScheme {
        resolve(&self.color_tuple(), appearance, amoled)
    }

    /// Resolves the current tuple with the appearance and amoled setting of
    /// `options`.
    pub fn scheme_for(&self, options: &ThemeOptions) -> ColorScheme {
        self.scheme(options.appearance(), options.amoled_mode)
    }

    /// Re-reads the color source and applies it.
    pub fn refresh(&self, options: &ThemeOptions, platform: &impl PlatformColors) {
        self.update_color_tuple(select_color_tuple(options, platform));
    }
}

impl Default for ThemeController {
    fn default() -> Self {
        Self::new(crate::DEFAULT_COLOR_TUPLE)
    }
}
