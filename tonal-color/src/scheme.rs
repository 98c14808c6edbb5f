//! Fixed-tone Material schemes.
//!
//! Every role of a scheme is one tone of one palette of a [`CorePalette`]. The
//! role → (palette, tone) mapping is a table, kept as data in
//! [`SchemeRole::tone_source`].

use std::fmt;

use tracing::trace;

use crate::{Argb, palette::CorePalette, palette::TonalPalette};

/// Light or dark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Appearance {
    /// Light surfaces, dark content.
    #[default]
    Light,
    /// Dark surfaces, light content.
    Dark,
}

impl Appearance {
    /// `Dark` when `is_dark`, `Light` otherwise.
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    /// Whether this is the dark appearance.
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Which palette of a [`CorePalette`] a role samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteSource {
    /// `a1`.
    Primary,
    /// `a2`.
    Secondary,
    /// `a3`.
    Tertiary,
    /// `n1`.
    Neutral,
    /// `n2`.
    NeutralVariant,
    /// `error`.
    Error,
}

impl PaletteSource {
    /// Selects the palette out of `core`.
    pub fn palette(self, core: &CorePalette) -> &TonalPalette {
        match self {
            Self::Primary => &core.a1,
            Self::Secondary => &core.a2,
            Self::Tertiary => &core.a3,
            Self::Neutral => &core.n1,
            Self::NeutralVariant => &core.n2,
            Self::Error => &core.error,
        }
    }
}

macro_rules! scheme_roles {
    ($(
        $(#[$doc:meta])*
        $variant:ident => $name:literal, $source:ident, $light:literal, $dark:literal;
    )*) => {
        /// A named color slot of a Material scheme.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum SchemeRole {
            $(
                $(#[$doc])*
                $variant,
            )*
        }

        impl SchemeRole {
            /// Every role, in declaration order.
            pub const ALL: [SchemeRole; SchemeRole::COUNT] = [$(SchemeRole::$variant),*];

            /// The Material name of the role, e.g. `onPrimaryContainer`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(SchemeRole::$variant => $name,)*
                }
            }

            /// The palette and tone this role samples in `appearance`.
            pub const fn tone_source(self, appearance: Appearance) -> (PaletteSource, u8) {
                match (self, appearance) {
                    $(
                        (SchemeRole::$variant, Appearance::Light) => (PaletteSource::$source, $light),
                        (SchemeRole::$variant, Appearance::Dark) => (PaletteSource::$source, $dark),
                    )*
                }
            }
        }
    };
}

scheme_roles! {
    /// Main accent.
    Primary => "primary", Primary, 40, 80;
    /// Content on `primary`.
    OnPrimary => "onPrimary", Primary, 100, 20;
    /// Low-emphasis accent container.
    PrimaryContainer => "primaryContainer", Primary, 90, 30;
    /// Content on `primaryContainer`.
    OnPrimaryContainer => "onPrimaryContainer", Primary, 10, 90;
    /// Secondary accent.
    Secondary => "secondary", Secondary, 40, 80;
    /// Content on `secondary`.
    OnSecondary => "onSecondary", Secondary, 100, 20;
    /// Secondary container.
    SecondaryContainer => "secondaryContainer", Secondary, 90, 30;
    /// Content on `secondaryContainer`.
    OnSecondaryContainer => "onSecondaryContainer", Secondary, 10, 90;
    /// Tertiary accent.
    Tertiary => "tertiary", Tertiary, 40, 80;
    /// Content on `tertiary`.
    OnTertiary => "onTertiary", Tertiary, 100, 20;
    /// Tertiary container.
    TertiaryContainer => "tertiaryContainer", Tertiary, 90, 30;
    /// Content on `tertiaryContainer`.
    OnTertiaryContainer => "onTertiaryContainer", Tertiary, 10, 90;
    /// Error accent.
    Error => "error", Error, 40, 80;
    /// Content on `error`.
    OnError => "onError", Error, 100, 20;
    /// Error container.
    ErrorContainer => "errorContainer", Error, 90, 30;
    /// Content on `errorContainer`.
    OnErrorContainer => "onErrorContainer", Error, 10, 80;
    /// Window background.
    Background => "background", Neutral, 99, 10;
    /// Content on `background`.
    OnBackground => "onBackground", Neutral, 10, 90;
    /// Default surface.
    Surface => "surface", Neutral, 99, 10;
    /// Content on `surface`.
    OnSurface => "onSurface", Neutral, 10, 90;
    /// Alternative surface.
    SurfaceVariant => "surfaceVariant", NeutralVariant, 90, 30;
    /// Content on `surfaceVariant`.
    OnSurfaceVariant => "onSurfaceVariant", NeutralVariant, 30, 80;
    /// Borders.
    Outline => "outline", NeutralVariant, 50, 60;
    /// Decorative borders and dividers.
    OutlineVariant => "outlineVariant", NeutralVariant, 80, 30;
    /// Elevation shadows.
    Shadow => "shadow", Neutral, 0, 0;
    /// Modal scrims.
    Scrim => "scrim", Neutral, 0, 0;
    /// Surface with the opposite appearance.
    InverseSurface => "inverseSurface", Neutral, 20, 90;
    /// Content on `inverseSurface`.
    InverseOnSurface => "inverseOnSurface", Neutral, 95, 20;
    /// Accent on `inverseSurface`.
    InversePrimary => "inversePrimary", Primary, 80, 40;
    /// Tint applied to elevated surfaces. Always equal to `primary`.
    SurfaceTint => "surfaceTint", Primary, 40, 80;
}

impl SchemeRole {
    /// Number of roles.
    pub const COUNT: usize = 30;

    /// Position of the role in [`SchemeRole::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks a role up by its Material name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }
}

impl fmt::Display for SchemeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A Material scheme sampled from a [`CorePalette`].
#[derive(Clone, Debug, PartialEq)]
pub struct Scheme {
    appearance: Appearance,
    palettes: CorePalette,
    colors: [Argb; SchemeRole::COUNT],
}

impl Scheme {
    /// The content scheme of `seed` in the given appearance.
    pub fn generate(seed: Argb, appearance: Appearance) -> Self {
        trace!(seed = %seed, ?appearance, "generating scheme");
        Self::from_core_palette(&CorePalette::content_of(seed), appearance)
    }

    /// Light content scheme of `seed`.
    pub fn light_content(seed: Argb) -> Self {
        Self::generate(seed, Appearance::Light)
    }

    /// Dark content scheme of `seed`.
    pub fn dark_content(seed: Argb) -> Self {
        Self::generate(seed, Appearance::Dark)
    }

    /// Samples every role out of `core`.
    pub fn from_core_palette(core: &CorePalette, appearance: Appearance) -> Self {
        let colors = SchemeRole::ALL.map(|role| {
            let (source, tone) = role.tone_source(appearance);
            source.palette(core).tone(tone)
        });
        Self {
            appearance,
            palettes: core.clone(),
            colors,
        }
    }

    /// Color of `role`.
    #[inline]
    pub fn get(&self, role: SchemeRole) -> Argb {
        self.colors[role.index()]
    }

    /// Overrides the color of one role.
    pub fn set(&mut self, role: SchemeRole, color: Argb) {
        self.colors[role.index()] = color;
    }

    /// Appearance the scheme was sampled for.
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Palettes the scheme was sampled from.
    pub fn palettes(&self) -> &CorePalette {
        &self.palettes
    }

    /// `(role, color)` pairs in [`SchemeRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (SchemeRole, Argb)> + '_ {
        SchemeRole::ALL.into_iter().zip(self.colors.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hct::Hct;

    const SEED: Argb = Argb(0xFF67_50A4);

    #[test]
    fn test_role_table_is_complete() {
        assert_eq!(SchemeRole::ALL.len(), SchemeRole::COUNT);
        for (i, role) in SchemeRole::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
            assert_eq!(SchemeRole::from_name(role.name()), Some(*role));
        }
        assert_eq!(SchemeRole::from_name("nope"), None);
    }

    #[test]
    fn test_table_tones() {
        use Appearance::*;
        assert_eq!(SchemeRole::Primary.tone_source(Light), (PaletteSource::Primary, 40));
        assert_eq!(SchemeRole::Primary.tone_source(Dark), (PaletteSource::Primary, 80));
        assert_eq!(SchemeRole::OnErrorContainer.tone_source(Dark), (PaletteSource::Error, 80));
        assert_eq!(SchemeRole::OnSecondaryContainer.tone_source(Dark).1, 90);
        assert_eq!(SchemeRole::Outline.tone_source(Dark), (PaletteSource::NeutralVariant, 60));
        assert_eq!(SchemeRole::InversePrimary.tone_source(Light).1, 80);
        assert_eq!(SchemeRole::InverseOnSurface.tone_source(Dark).1, 20);
    }

    #[test]
    fn test_surface_tint_is_primary() {
        for seed in [SEED, Argb(0xFF00_FF00), Argb(0xFF80_8080), Argb(0xFFE9_1E63)] {
            for scheme in [Scheme::light_content(seed), Scheme::dark_content(seed)] {
                assert_eq!(scheme.get(SchemeRole::SurfaceTint), scheme.get(SchemeRole::Primary));
            }
        }
    }

    #[test]
    fn test_roles_have_table_tones() {
        let scheme = Scheme::light_content(SEED);
        for (role, color) in scheme.iter() {
            let (_, tone) = role.tone_source(Appearance::Light);
            let actual = Hct::from_argb(color).tone();
            assert!((actual - tone as f64).abs() < 1.0, "{role}: {actual}");
        }
        assert_eq!(scheme.get(SchemeRole::Shadow), Argb::BLACK);
        assert_eq!(scheme.get(SchemeRole::OnPrimary), Argb::WHITE);
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(Scheme::dark_content(SEED), Scheme::dark_content(SEED));
        assert_eq!(
            Scheme::generate(SEED, Appearance::Dark),
            Scheme::from_core_palette(&CorePalette::content_of(SEED), Appearance::Dark)
        );
    }

    #[test]
    fn test_set_overrides_one_role() {
        let mut scheme = Scheme::light_content(SEED);
        let before = scheme.clone();
        scheme.set(SchemeRole::Background, Argb::BLACK);
        for (role, color) in scheme.iter() {
            if role == SchemeRole::Background {
                assert_eq!(color, Argb::BLACK);
            } else {
                assert_eq!(color, before.get(role));
            }
        }
    }
}
