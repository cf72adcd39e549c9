//! # Shadescale
//!
//! Shadescale derives complete Tailwind-style shade scales from a single base
//! color, names them, and reports the contrast between their shades.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature for a version that also covers Python
integration."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Shadescale's main abstractions are:
//!
//!   * [`Color`] is a **24-bit RGB color** with conversions to and from HSV
//!     and HSL as well as the hashed hexadecimal format `#rrggbb`. Colors
//!     parse strictly with [`Color as FromStr`](struct.Color.html#impl-FromStr-for-Color)
//!     or leniently with [`Color::lenient`].
//!   * [`ShadeScale`] holds **eleven shades** for the [`ShadeStep`]s 50, 100,
//!     200, ..., 900, 950. [`derive_shade_scale`] computes them with one of two
//!     [`Strategy`]s, while [`base_level`] determines where the base color
//!     sits.
//!   * [`ColorName`], [`tailwind_name`], and [`name_color`] produce
//!     **human-readable names** such as `violet-700` and `Cosmic Violet`.
//!   * [`contrast_ratio`] and [`classify`] implement **contrast scoring**
//!     configured by [`ContrastSettings`], and [`ContrastGrid`] applies them to
//!     every pair of shades in a scale plus white and black.
//!   * [`Palette`] bundles all of the above into **one call** that accepts
//!     arbitrary user input.
//!
//!
//! ## 2. Example
//!
//! ```
//! # use shadescale::{Color, ContrastGrid, ContrastSettings, GeneratorSettings, ShadeScale, ShadeStep};
//! let base = "#3b82f6".parse::<Color>()?;
//! let scale = ShadeScale::derive(base, &GeneratorSettings::default());
//! assert_eq!(scale.base_level(), ShadeStep::Step500);
//! assert_eq!(scale[ShadeStep::Step500], base);
//!
//! let grid = ContrastGrid::new(&scale, &ContrastSettings::default());
//! assert!(grid.cell(12, 0).passes());
//! # Ok::<(), shadescale::error::ColorFormatError>(())
//! ```
//!
//!
//! ## 3. Configuration
//!
//! [`GeneratorSettings`] and [`ContrastSettings`] default to the Tailwind
//! strategy and WCAG 2 contrast scored as 60% of the extended percentage range.
//! Their `from_environment` constructors override the defaults with the
//! `SHADESCALE_STRATEGY`, `SHADESCALE_PIN_500`, `SHADESCALE_METHOD`,
//! `SHADESCALE_SCHEME`, `SHADESCALE_SCORE`, `SHADESCALE_PERCENTAGE`, and
//! `SHADESCALE_AUTO_TEXT` environment variables.
//!
//! Shadescale logs through [tracing](https://docs.rs/tracing) but never
//! installs a subscriber.
//!
//!
//! ## 4. Optional Features
//!
//! Shadescale supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls shadescale's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod contrast;
mod core;
pub mod error;
mod grid;
mod name;
mod object;
mod palette;
#[cfg(feature = "pyffi")]
mod pyffi;
mod shade;
mod util;

pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use contrast::{
    classify, contrast_between, contrast_ratio, percentage_of, ContrastMethod, ContrastSettings,
    PercentScore, PercentageMapping, RatioScore, Score, ThresholdScheme,
};
pub use grid::{ContrastGrid, GridCell, Swatch};
pub use name::{name_color, name_color_with, tailwind_name, BaseHue, ColorName, PREFIXES};
pub use object::Color;
pub use palette::Palette;
pub use shade::{
    base_level, darken, derive_shade_scale, lighten, GeneratorSettings, ShadeScale, ShadeStep,
    Strategy,
};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn shadescale(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::derive_shades, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::generate_palette, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::contrast, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::passes, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::py_tailwind_name, m)?)?;
    m.add_function(wrap_pyfunction!(pyffi::py_name_color, m)?)?;

    m.add_class::<BaseHue>()?;
    m.add_class::<Color>()?;
    m.add_class::<ContrastMethod>()?;
    m.add_class::<PercentageMapping>()?;
    m.add_class::<ShadeStep>()?;
    m.add_class::<Strategy>()?;
    m.add_class::<ThresholdScheme>()?;

    Ok(())
}
