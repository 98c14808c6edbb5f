use std::collections::BTreeMap;

use anyhow::{Result, bail};
use serde::Serialize;
use tonal_color::{Argb, TonalPalette};

use crate::output;

pub const DEFAULT_TONES: [u8; 13] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 99, 100];

#[derive(Serialize)]
struct PaletteOutput {
    hue: f64,
    chroma: f64,
    tones: BTreeMap<u8, Argb>,
}

pub fn execute(color: Argb, tones: &[u8], json: bool) -> Result<()> {
    if let Some(tone) = tones.iter().find(|&&tone| tone > 100) {
        bail!("tone {tone} is out of range, expected 0..=100");
    }
    let palette = TonalPalette::from_argb(color);

    if json {
        return output::json(&PaletteOutput {
            hue: palette.hue(),
            chroma: palette.chroma(),
            tones: tones.iter().map(|&tone| (tone, palette.tone(tone))).collect(),
        });
    }
    output::heading(&format!(
        "Palette of {color} (hue {:.1}, chroma {:.1})",
        palette.hue(),
        palette.chroma()
    ));
    for &tone in tones {
        output::swatch(&format!("tone {tone}"), palette.tone(tone));
    }
    Ok(())
}
