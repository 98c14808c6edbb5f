use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tonal_color::{
    Appearance, Argb,
    extract::{ExtractOptionsBuilder, extract_from_path},
};
use tonal_theme::{ColorScheme, ColorTuple, resolve};

use crate::output;

#[derive(Serialize)]
struct ExtractOutput {
    color: Argb,
    #[serde(skip_serializing_if = "Option::is_none")]
    light: Option<ColorScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dark: Option<ColorScheme>,
}

pub fn execute(
    image: &Path,
    fallback: Argb,
    blend_with_vibrant: bool,
    with_scheme: bool,
    json: bool,
) -> Result<()> {
    let options = ExtractOptionsBuilder::default()
        .blend_with_vibrant(blend_with_vibrant)
        .build()?;
    let color = extract_from_path(image, fallback, &options)
        .with_context(|| format!("failed to read image {}", image.display()))?;

    let tuple = ColorTuple::new(color);
    let schemes = with_scheme.then(|| {
        (
            resolve(&tuple, Appearance::Light, false),
            resolve(&tuple, Appearance::Dark, false),
        )
    });

    if json {
        return output::json(&ExtractOutput {
            color,
            light: schemes.map(|(light, _)| light),
            dark: schemes.map(|(_, dark)| dark),
        });
    }
    output::swatch("extracted", color);
    if let Some((light, dark)) = schemes {
        output::scheme("Light scheme", &light);
        output::scheme("Dark scheme", &dark);
    }
    Ok(())
}
