//! Print the palette and contrast grid for the colors given on the command
//! line, e.g., `cargo run --example palette -- '#3b82f6' 9b40ea`.
//!
//! Settings come from the `SHADESCALE_*` environment variables and
//! `RUST_LOG=debug` shows how each scale was derived.

use shadescale::{ContrastGrid, ContrastSettings, GeneratorSettings, Palette};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let generator = GeneratorSettings::from_environment();
    let contrast = ContrastSettings::from_environment();

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs.push("#3b82f6".to_string());
    }

    for input in inputs {
        let palette = Palette::generate_with_thread_rng(&input, &generator);
        println!("{}", palette);

        let grid = ContrastGrid::new(palette.scale(), &contrast);
        println!("{}", grid);
    }
}
