use owo_colors::OwoColorize;
use tonal_color::{Argb, contrast::contrast_ratio};
use tonal_theme::ColorScheme;

const LABEL_WIDTH: usize = 22;

/// Prints `color` as a filled block followed by its hex code.
pub fn swatch(label: &str, color: Argb) {
    let [r, g, b] = color.to_rgb();
    let text = if contrast_ratio(color, Argb::WHITE) >= contrast_ratio(color, Argb::BLACK) {
        (255, 255, 255)
    } else {
        (0, 0, 0)
    };
    println!(
        "{:>width$} {} {}",
        label.bold(),
        format!(" {:<9}", color.to_hex())
            .on_truecolor(r, g, b)
            .truecolor(text.0, text.1, text.2),
        color.to_hex().dimmed(),
        width = LABEL_WIDTH
    );
}

pub fn heading(text: &str) {
    println!("{}", text.green().bold());
}

pub fn scheme(title: &str, scheme: &ColorScheme) {
    heading(title);
    for (role, color) in scheme.roles() {
        swatch(role.name(), color);
    }
}

pub fn json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
