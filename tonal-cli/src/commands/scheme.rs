use anyhow::Result;
use tonal_color::{Appearance, Argb};
use tonal_theme::{ColorTuple, resolve};
use tracing::debug;

use crate::output;

pub struct SchemeOptions {
    pub seed: Argb,
    pub secondary: Option<Argb>,
    pub tertiary: Option<Argb>,
    pub dark: bool,
    pub amoled: bool,
    pub json: bool,
}

pub fn execute(options: SchemeOptions) -> Result<()> {
    let tuple = ColorTuple {
        primary: options.seed,
        secondary: options.secondary,
        tertiary: options.tertiary,
    };
    let appearance = Appearance::from_dark(options.dark);
    debug!(?tuple, ?appearance, amoled = options.amoled, "resolving scheme");
    let scheme = resolve(&tuple, appearance, options.amoled);

    if options.json {
        return output::json(&scheme);
    }
    let title = match (appearance, options.amoled && options.dark) {
        (Appearance::Dark, true) => "Dark scheme (amoled)",
        (Appearance::Dark, false) => "Dark scheme",
        (Appearance::Light, _) => "Light scheme",
    };
    output::scheme(title, &scheme);
    Ok(())
}
