use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tonal_color::Argb;

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "tonal")]
#[command(version, about = "Material color schemes from seed colors and images", long_about = None)]
struct Cli {
    /// Log debug output from the color pipeline
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the scheme resolved from a color tuple
    Scheme {
        /// Primary seed color, e.g. "#6750A4"
        seed: Argb,
        /// Secondary key color
        #[arg(long)]
        secondary: Option<Argb>,
        /// Tertiary key color
        #[arg(long)]
        tertiary: Option<Argb>,
        /// Dark appearance
        #[arg(long)]
        dark: bool,
        /// Pure black background and surface (dark only)
        #[arg(long)]
        amoled: bool,
        /// Print JSON instead of swatches
        #[arg(long)]
        json: bool,
    },
    /// Print tones of the tonal palette of a color
    Palette {
        /// Color whose hue and chroma define the palette
        color: Argb,
        /// Tones to print
        #[arg(long, value_delimiter = ',', default_values_t = commands::palette::DEFAULT_TONES)]
        tones: Vec<u8>,
        /// Print JSON instead of swatches
        #[arg(long)]
        json: bool,
    },
    /// Extract a seed color from an image file
    Extract {
        /// Image to read
        image: PathBuf,
        /// Color used when the image has no usable colors
        #[arg(long, default_value = "#6750A4")]
        fallback: Argb,
        /// Use the dominant color as-is instead of blending it with the vibrant one
        #[arg(long)]
        no_vibrant: bool,
        /// Also print the light and dark schemes of the extracted color
        #[arg(long)]
        scheme: bool,
        /// Print JSON instead of swatches
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let Cli { verbose, command } = Cli::parse();
    init_tracing(verbose);

    match command {
        Commands::Scheme {
            seed,
            secondary,
            tertiary,
            dark,
            amoled,
            json,
        } => {
            commands::scheme::execute(commands::scheme::SchemeOptions {
                seed,
                secondary,
                tertiary,
                dark,
                amoled,
                json,
            })?;
        }
        Commands::Palette { color, tones, json } => {
            commands::palette::execute(color, &tones, json)?;
        }
        Commands::Extract {
            image,
            fallback,
            no_vibrant,
            scheme,
            json,
        } => {
            commands::extract::execute(&image, fallback, !no_vibrant, scheme, json)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "error,tonal_color=debug,tonal_theme=debug"
    } else {
        "error,tonal_color=info,tonal_theme=info"
    };
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(fallback) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
