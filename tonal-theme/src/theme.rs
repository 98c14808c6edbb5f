//! Resolved Material color schemes.
//!
//! [`resolve`] turns a [`ColorTuple`] into a [`ColorScheme`]: the fixed-tone
//! content scheme of the primary color, with the secondary and tertiary roles
//! re-sampled from the tuple's accent palettes and the pure-black and outline
//! adjustments applied on top.

use tonal_color::{Appearance, Argb, PaletteSource, Scheme, SchemeRole};
use tracing::instrument;

use crate::tuple::ColorTuple;

/// Elevation, in dp, of the surface `outline_variant` is composited over.
const OUTLINE_VARIANT_ELEVATION: f32 = 6.0;
/// Alpha of `on_secondary_container` in `outline_variant`.
const OUTLINE_VARIANT_ALPHA: f32 = 0.2;

/// Standard Material alpha values.
pub struct MaterialAlpha;

impl MaterialAlpha {
    /// Alpha for disabled containers.
    pub const DISABLED_CONTAINER: f32 = 0.12;
    /// Alpha for disabled content (text/icons).
    pub const DISABLED_CONTENT: f32 = 0.38;
}

macro_rules! color_scheme {
    ($(
        $(#[$doc:meta])*
        $field:ident => $role:ident,
    )*) => {
        /// A Material color scheme, light or dark.
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
        pub struct ColorScheme {
            /// Whether the scheme is light or dark.
            pub appearance: Appearance,
            $(
                $(#[$doc])*
                pub $field: Argb,
            )*
        }

        impl ColorScheme {
            /// Copies every role out of a generated [`Scheme`].
            pub fn from_scheme(scheme: &Scheme) -> Self {
                Self {
                    appearance: scheme.appearance(),
                    $($field: scheme.get(SchemeRole::$role),)*
                }
            }

            /// Color of `role`.
            pub fn get(&self, role: SchemeRole) -> Argb {
                match role {
                    $(SchemeRole::$role => self.$field,)*
                }
            }

            /// Mutable access to the color of `role`.
            pub fn get_mut(&mut self, role: SchemeRole) -> &mut Argb {
                match role {
                    $(SchemeRole::$role => &mut self.$field,)*
                }
            }
        }
    };
}

color_scheme! {
    /// The primary color of the scheme.
    primary => Primary,
    /// Color used for content on top of `primary`.
    on_primary => OnPrimary,
    /// A container color for `primary`.
    primary_container => PrimaryContainer,
    /// Color used for content on top of `primary_container`.
    on_primary_container => OnPrimaryContainer,
    /// The secondary color of the scheme.
    secondary => Secondary,
    /// Color used for content on top of `secondary`.
    on_secondary => OnSecondary,
    /// A container color for `secondary`.
    secondary_container => SecondaryContainer,
    /// Color used for content on top of `secondary_container`.
    on_secondary_container => OnSecondaryContainer,
    /// The tertiary color of the scheme.
    tertiary => Tertiary,
    /// Color used for content on top of `tertiary`.
    on_tertiary => OnTertiary,
    /// A container color for `tertiary`.
    tertiary_container => TertiaryContainer,
    /// Color used for content on top of `tertiary_container`.
    on_tertiary_container => OnTertiaryContainer,
    /// The error color of the scheme.
    error => Error,
    /// Color used for content on top of `error`.
    on_error => OnError,
    /// A container color for `error`.
    error_container => ErrorContainer,
    /// Color used for content on top of `error_container`.
    on_error_container => OnErrorContainer,
    /// The background color of the scheme.
    background => Background,
    /// Color used for content on top of `background`.
    on_background => OnBackground,
    /// The surface color of the scheme.
    surface => Surface,
    /// Color used for content on top of `surface`.
    on_surface => OnSurface,
    /// A variant of the surface color.
    surface_variant => SurfaceVariant,
    /// Color used for content on top of `surface_variant`.
    on_surface_variant => OnSurfaceVariant,
    /// The outline color of the scheme.
    outline => Outline,
    /// A variant of the outline color.
    outline_variant => OutlineVariant,
    /// The shadow color of the scheme.
    shadow => Shadow,
    /// The scrim color of the scheme.
    scrim => Scrim,
    /// The inverse surface color.
    inverse_surface => InverseSurface,
    /// Color used for content on top of `inverse_surface`.
    inverse_on_surface => InverseOnSurface,
    /// The inverse primary color.
    inverse_primary => InversePrimary,
    /// Tint applied to elevated surfaces.
    surface_tint => SurfaceTint,
}

impl ColorScheme {
    /// Resolves `tuple`, see [`resolve`].
    pub fn resolve(tuple: &ColorTuple, appearance: Appearance, amoled: bool) -> Self {
        resolve(tuple, appearance, amoled)
    }

    /// Whether this is a dark scheme.
    pub fn is_dark(&self) -> bool {
        self.appearance.is_dark()
    }

    /// `(role, color)` pairs in [`SchemeRole::ALL`] order.
    pub fn roles(&self) -> impl Iterator<Item = (SchemeRole, Argb)> + '_ {
        SchemeRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    /// Returns the matching content color for a background color in the scheme.
    ///
    /// When the background color does not match a known scheme color, this
    /// returns `None`.
    pub fn content_color_for(&self, background: Argb) -> Option<Argb> {
        if background == self.primary {
            Some(self.on_primary)
        } else if background == self.secondary {
            Some(self.on_secondary)
        } else if background == self.tertiary {
            Some(self.on_tertiary)
        } else if background == self.background {
            Some(self.on_background)
        } else if background == self.error {
            Some(self.on_error)
        } else if background == self.primary_container {
            Some(self.on_primary_container)
        } else if background == self.secondary_container {
            Some(self.on_secondary_container)
        } else if background == self.tertiary_container {
            Some(self.on_tertiary_container)
        } else if background == self.error_container {
            Some(self.on_error_container)
        } else if background == self.inverse_surface {
            Some(self.inverse_on_surface)
        } else if background == self.surface {
            Some(self.on_surface)
        } else if background == self.surface_variant {
            Some(self.on_surface_variant)
        } else {
            None
        }
    }

    /// Computes the surface tonal color at an elevation given in dp.
    pub fn surface_color_at_elevation(&self, elevation: f32) -> Argb {
        surface_at_elevation(self.surface, self.surface_tint, elevation)
    }

    /// Content color for disabled text and icons.
    pub fn disabled_content_color(&self) -> Argb {
        self.on_surface
            .composite_over(MaterialAlpha::DISABLED_CONTENT, self.surface)
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        resolve(&crate::DEFAULT_COLOR_TUPLE, Appearance::Light, false)
    }
}

/// Builds the final scheme for `tuple`.
///
/// 1. Content scheme of `tuple.primary`.
/// 2. Every secondary- and tertiary-sourced role re-sampled, at its table
///    tone, from [`ColorTuple::secondary_palette`] and
///    [`ColorTuple::tertiary_palette`].
/// 3. With `amoled` in the dark appearance, `background` and `surface` become
///    pure black.
/// 4. `outline_variant` = `on_secondary_container` at 20% over the surface at
///    6 dp elevation. Runs last, so a pure-black surface darkens it too.
#[instrument(level = "debug", skip(tuple), fields(primary = %tuple.primary))]
pub fn resolve(tuple: &ColorTuple, appearance: Appearance, amoled: bool) -> ColorScheme {
    let mut scheme = Scheme::generate(tuple.primary, appearance);

    let secondary = tuple.secondary_palette();
    let tertiary = tuple.tertiary_palette();
    for role in SchemeRole::ALL {
        let (source, tone) = role.tone_source(appearance);
        let palette = match source {
            PaletteSource::Secondary => &secondary,
            PaletteSource::Tertiary => &tertiary,
            _ => continue,
        };
        scheme.set(role, palette.tone(tone));
    }

    let mut colors = ColorScheme::from_scheme(&scheme);
    if amoled && appearance.is_dark() {
        colors.background = Argb::BLACK;
        colors.surface = Argb::BLACK;
    }

    let elevated = colors.surface_color_at_elevation(OUTLINE_VARIANT_ELEVATION);
    colors.outline_variant = colors
        .on_secondary_container
        .composite_over(OUTLINE_VARIANT_ALPHA, elevated);
    colors
}

fn surface_at_elevation(surface: Argb, tint: Argb, elevation: f32) -> Argb {
    if elevation == 0.0 {
        return surface;
    }
    let alpha = ((4.5 * (elevation + 1.0).ln()) + 2.0) / 100.0;
    tint.composite_over(alpha, surface)
}

#[cfg(test)]
mod tests {
    use tonal_color::contrast::{MIN_TEXT_RATIO, contrast_ratio};

    use super::*;

    const SEED: Argb = Argb(0xFF67_50A4);
    const SEEDS: [Argb; 5] = [
        SEED,
        Argb(0xFF00_6A6A),
        Argb(0xFFB3_261E),
        Argb(0xFF80_8080),
        Argb(0xFFFF_D600),
    ];

    #[test]
    fn test_resolve_is_deterministic() {
        let tuple = ColorTuple::new(SEED);
        for appearance in [Appearance::Light, Appearance::Dark] {
            assert_eq!(
                resolve(&tuple, appearance, false),
                resolve(&tuple, appearance, false)
            );
        }
    }

    #[test]
    fn test_surface_tint_is_primary() {
        for seed in SEEDS {
            for appearance in [Appearance::Light, Appearance::Dark] {
                let scheme = resolve(&ColorTuple::new(seed), appearance, false);
                assert_eq!(scheme.surface_tint, scheme.primary);
            }
        }
    }

    #[test]
    fn test_amoled_only_blackens_background_and_surface() {
        for seed in SEEDS {
            let tuple = ColorTuple::new(seed);
            let dark = resolve(&tuple, Appearance::Dark, false);
            let amoled = resolve(&tuple, Appearance::Dark, true);
            assert_eq!(amoled.background, Argb::BLACK);
            assert_eq!(amoled.surface, Argb::BLACK);
            for (role, color) in amoled.roles() {
                if !matches!(
                    role,
                    SchemeRole::Background | SchemeRole::Surface | SchemeRole::OutlineVariant
                ) {
                    assert_eq!(color, dark.get(role), "{role}");
                }
            }
        }
    }

    #[test]
    fn test_amoled_outline_variant_uses_black_surface() {
        let tuple = ColorTuple::new(SEED);
        let dark = resolve(&tuple, Appearance::Dark, false);
        let amoled = resolve(&tuple, Appearance::Dark, true);

        let elevated_black = surface_at_elevation(Argb::BLACK, amoled.surface_tint, 6.0);
        assert_eq!(amoled.surface_color_at_elevation(6.0), elevated_black);
        assert_eq!(
            amoled.outline_variant,
            amoled.on_secondary_container.composite_over(0.2, elevated_black)
        );
        assert_ne!(amoled.outline_variant, dark.outline_variant);
        assert!(amoled.outline_variant.red() <= dark.outline_variant.red());
        assert!(amoled.outline_variant.green() <= dark.outline_variant.green());
        assert!(amoled.outline_variant.blue() <= dark.outline_variant.blue());
    }

    #[test]
    fn test_amoled_is_ignored_in_light() {
        let tuple = ColorTuple::new(SEED);
        assert_eq!(
            resolve(&tuple, Appearance::Light, true),
            resolve(&tuple, Appearance::Light, false)
        );
    }

    #[test]
    fn test_explicit_secondary_changes_only_secondary_roles() {
        let plain = resolve(&ColorTuple::new(SEED), Appearance::Light, false);
        let tuple = ColorTuple {
            primary: SEED,
            secondary: Some(Argb(0xFF00_8000)),
            tertiary: None,
        };
        let custom = resolve(&tuple, Appearance::Light, false);

        for (role, color) in custom.roles() {
            let (source, _) = role.tone_source(Appearance::Light);
            if source == PaletteSource::Secondary || role == SchemeRole::OutlineVariant {
                continue;
            }
            assert_eq!(color, plain.get(role), "{role}");
        }
        assert_ne!(custom.secondary, plain.secondary);
        assert_ne!(custom.on_secondary_container, plain.on_secondary_container);
    }

    #[test]
    fn test_explicit_tertiary_changes_only_tertiary_roles() {
        for appearance in [Appearance::Light, Appearance::Dark] {
            let plain = resolve(&ColorTuple::new(SEED), appearance, false);
            let tuple = ColorTuple {
                primary: SEED,
                secondary: None,
                tertiary: Some(Argb(0xFF00_8000)),
            };
            let custom = resolve(&tuple, appearance, false);

            for (role, color) in custom.roles() {
                let (source, _) = role.tone_source(appearance);
                if source != PaletteSource::Tertiary {
                    assert_eq!(color, plain.get(role), "{role}");
                }
            }
            assert_ne!(custom.tertiary, plain.tertiary);
            assert_ne!(custom.tertiary_container, plain.tertiary_container);
        }
    }

    #[test]
    fn test_missing_accents_match_generated_scheme() {
        for appearance in [Appearance::Light, Appearance::Dark] {
            let generated = Scheme::generate(SEED, appearance);
            let resolved = resolve(&ColorTuple::new(SEED), appearance, false);
            for role in SchemeRole::ALL {
                if role != SchemeRole::OutlineVariant {
                    assert_eq!(resolved.get(role), generated.get(role), "{role}");
                }
            }
        }
    }

    #[test]
    fn test_outline_variant_is_composited() {
        let scheme = resolve(&ColorTuple::new(SEED), Appearance::Light, false);
        let elevated = scheme.surface_color_at_elevation(6.0);
        assert_eq!(
            scheme.outline_variant,
            scheme.on_secondary_container.composite_over(0.2, elevated)
        );
        assert!(scheme.outline_variant.is_opaque());
    }

    #[test]
    fn test_on_pairs_are_readable() {
        let pairs = [
            (SchemeRole::Primary, SchemeRole::OnPrimary),
            (SchemeRole::PrimaryContainer, SchemeRole::OnPrimaryContainer),
            (SchemeRole::Secondary, SchemeRole::OnSecondary),
            (SchemeRole::SecondaryContainer, SchemeRole::OnSecondaryContainer),
            (SchemeRole::Tertiary, SchemeRole::OnTertiary),
            (SchemeRole::TertiaryContainer, SchemeRole::OnTertiaryContainer),
            (SchemeRole::Error, SchemeRole::OnError),
            (SchemeRole::ErrorContainer, SchemeRole::OnErrorContainer),
            (SchemeRole::Background, SchemeRole::OnBackground),
            (SchemeRole::Surface, SchemeRole::OnSurface),
            (SchemeRole::SurfaceVariant, SchemeRole::OnSurfaceVariant),
            (SchemeRole::InverseSurface, SchemeRole::InverseOnSurface),
        ];
        let tuples = [
            ColorTuple::new(SEED),
            ColorTuple::with_accents(SEED, Argb(0xFFFF_D600), Argb(0xFF00_20FF)),
        ];
        for tuple in tuples {
            for appearance in [Appearance::Light, Appearance::Dark] {
                for amoled in [false, true] {
                    let scheme = resolve(&tuple, appearance, amoled);
                    for (bg, fg) in pairs {
                        let ratio = contrast_ratio(scheme.get(bg), scheme.get(fg));
                        assert!(ratio >= MIN_TEXT_RATIO, "{bg}/{fg}: {ratio}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_content_color_for() {
        let scheme = ColorScheme::default();
        assert_eq!(scheme.content_color_for(scheme.primary), Some(scheme.on_primary));
        assert_eq!(scheme.content_color_for(scheme.surface), Some(scheme.on_surface));
        assert_eq!(scheme.content_color_for(Argb(0x0102_0304)), None);
    }

    #[test]
    fn test_surface_at_zero_elevation_is_surface() {
        let scheme = ColorScheme::default();
        assert_eq!(scheme.surface_color_at_elevation(0.0), scheme.surface);
        assert_ne!(scheme.surface_color_at_elevation(6.0), scheme.surface);
    }

    #[test]
    fn test_disabled_content_color() {
        let scheme = ColorScheme::default();
        let disabled = scheme.disabled_content_color();
        assert!(disabled.is_opaque());
        assert_eq!(disabled, scheme.on_surface.composite_over(0.38, scheme.surface));
        assert_ne!(disabled, scheme.on_surface);
    }

    #[test]
    fn test_get_mut() {
        let mut scheme = ColorScheme::default();
        *scheme.get_mut(SchemeRole::Scrim) = Argb::WHITE;
        assert_eq!(scheme.scrim, Argb::WHITE);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_roles_use_material_names() {
        let scheme = ColorScheme::default();
        let value = serde_json::to_value(scheme).unwrap();
        assert_eq!(value["appearance"], "light");
        assert_eq!(value["onPrimaryContainer"], scheme.on_primary_container.to_hex());
        assert_eq!(serde_json::from_value::<ColorScheme>(value).unwrap(), scheme);
    }
}
