//! Python functions wrapping the Rust-only parts of the API.
//!
//! Python code works with colors as hashed hexadecimal strings and with
//! shade scales as lists of step, color pairs.

use pyo3::prelude::*;

use crate::{
    classify, contrast_between, Color, ContrastMethod, Float, GeneratorSettings, Palette,
    PercentageMapping, Score, ShadeScale, Strategy, ThresholdScheme,
};

/// Derive the shade scale for the base color.
///
/// The base color is normalized leniently. The result is the list of steps
/// and colors from lightest to darkest, followed by the base level.
#[pyfunction]
#[pyo3(signature = (color, tailwind = true, pin_to_500 = false))]
pub fn derive_shades(color: &str, tailwind: bool, pin_to_500: bool) -> (Vec<(u16, String)>, u16) {
    let settings = GeneratorSettings {
        strategy: if tailwind {
            Strategy::Tailwind
        } else {
            Strategy::Linear
        },
        pin_to_500,
    };
    let scale = ShadeScale::derive(Color::lenient(color), &settings);
    let shades = scale
        .iter()
        .map(|(step, color)| (step.value(), color.to_string()))
        .collect();
    (shades, scale.base_level().value())
}

/// Generate the palette for the base color and return its name, Tailwind-style
/// name, and shades.
#[pyfunction]
#[pyo3(signature = (color, tailwind = true, pin_to_500 = false))]
pub fn generate_palette(
    color: &str,
    tailwind: bool,
    pin_to_500: bool,
) -> (String, String, Vec<(u16, String)>) {
    let settings = GeneratorSettings {
        strategy: if tailwind {
            Strategy::Tailwind
        } else {
            Strategy::Linear
        },
        pin_to_500,
    };
    let palette = Palette::generate_with_thread_rng(color, &settings);
    let shades = palette
        .scale()
        .iter()
        .map(|(step, color)| (step.value(), color.to_string()))
        .collect();
    (
        palette.name().to_string(),
        palette.color_name().to_string(),
        shades,
    )
}

/// Compute the contrast between two colors in strict hashed hexadecimal format.
#[pyfunction]
#[pyo3(signature = (color1, color2, method = ContrastMethod::Wcag2))]
pub fn contrast(color1: &str, color2: &str, method: ContrastMethod) -> PyResult<Float> {
    let color1: Color = color1.parse()?;
    let color2: Color = color2.parse()?;
    Ok(contrast_between(color1, color2, method))
}

/// Determine whether the contrast passes the score, e.g., `"AA"` with scheme
/// `ThresholdScheme.Ratio` or `"60"` with scheme `ThresholdScheme.Percentage`.
#[pyfunction]
#[pyo3(signature = (contrast, score, scheme = ThresholdScheme::Percentage, mapping = PercentageMapping::Extended))]
pub fn passes(
    contrast: Float,
    score: &str,
    scheme: ThresholdScheme,
    mapping: PercentageMapping,
) -> PyResult<bool> {
    let score = Score::parse(scheme, score)?;
    Ok(classify(contrast, score, mapping))
}

/// Name the color in Tailwind style, e.g., `blue-500`.
#[pyfunction]
#[pyo3(name = "tailwind_name")]
pub fn py_tailwind_name(hue: Float, saturation: Float, lightness: Float) -> String {
    crate::tailwind_name(hue, saturation, lightness)
}

/// Name the color with a random decorative prefix, e.g., `Cosmic Violet`.
#[pyfunction]
#[pyo3(name = "name_color")]
pub fn py_name_color(hue: Float, saturation: Float, lightness: Float) -> String {
    crate::name_color(hue, saturation, lightness)
}
