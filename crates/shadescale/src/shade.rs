//! Deriving shade scales from a single base color.
//!
//! A [`ShadeScale`] has one color for each of the eleven [`ShadeStep`]s, from
//! the very light 50 to the very dark 950. The base color always appears
//! verbatim at its [`ShadeScale::base_level`], which either is pinned to 500
//! or follows from the base color's brightness. The other steps are computed
//! by one of two [`Strategy`]s:
//!
//!   * [`Strategy::Tailwind`] lightens and darkens the base color in HSV,
//!     shifting hues towards cyan, magenta, and yellow when lightening and
//!     towards red, green, and blue when darkening. That mimics the visual
//!     character of Tailwind CSS's color scales.
//!   * [`Strategy::Linear`] distributes HSL lightness linearly across the
//!     steps, desaturating the extremes.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use tracing::{debug, trace};

use crate::core::round_half_up;
use crate::error::{ShadeStepError, UnknownVariantError};
use crate::util::{Env, Environment};
use crate::{Color, Float};

// ====================================================================================================================
// Shade Step
// ====================================================================================================================

/// The eleven steps of a shade scale.
///
/// Steps are ordered from lightest to darkest. Rust code converts between
/// steps and their numeric values with [`ShadeStep as
/// TryFrom<u16>`](enum.ShadeStep.html#impl-TryFrom%3Cu16%3E-for-ShadeStep) and
/// [`ShadeStep::value`].
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "shadescale")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShadeStep {
    Step50,
    Step100,
    Step200,
    Step300,
    Step400,
    Step500,
    Step600,
    Step700,
    Step800,
    Step900,
    Step950,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ShadeStep {
    /// Get this step's numeric value, e.g., 50 or 950.
    pub fn value(&self) -> u16 {
        Self::VALUES[*self as usize]
    }

    /// Get this step's position in the scale, from 0 for step 50 to 10 for
    /// step 950.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Get the fixed intensity for lightening or darkening towards this step.
    ///
    /// Intensities grow with the distance from 500, but the table is not
    /// symmetric: 50 uses 0.92 whereas 950 uses 0.9.
    pub fn intensity(&self) -> Float {
        Self::INTENSITIES[*self as usize]
    }
}

impl ShadeStep {
    /// All shade steps in order.
    pub const ALL: [ShadeStep; 11] = [
        Self::Step50,
        Self::Step100,
        Self::Step200,
        Self::Step300,
        Self::Step400,
        Self::Step500,
        Self::Step600,
        Self::Step700,
        Self::Step800,
        Self::Step900,
        Self::Step950,
    ];

    const VALUES: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

    const INTENSITIES: [Float; 11] = [0.92, 0.8, 0.6, 0.4, 0.25, 0.0, 0.2, 0.4, 0.6, 0.8, 0.9];

    /// Get the step at the given index into [`ShadeStep::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl TryFrom<u16> for ShadeStep {
    type Error = ShadeStepError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::VALUES
            .iter()
            .position(|v| *v == value)
            .and_then(Self::from_index)
            .ok_or(ShadeStepError::new(value))
    }
}

impl From<ShadeStep> for u16 {
    fn from(value: ShadeStep) -> u16 {
        value.value()
    }
}

impl std::fmt::Display for ShadeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ====================================================================================================================
// Strategy and Settings
// ====================================================================================================================

/// The strategy for deriving shades.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "shadescale")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Lighten and darken in HSV with hue shifts, mimicking Tailwind CSS.
    #[default]
    Tailwind,
    /// Interpolate HSL lightness linearly.
    Linear,
}

impl Strategy {
    const NAMES: &'static [&'static str] = &["tailwind", "linear"];

    /// Get this strategy's name.
    pub const fn name(&self) -> &'static str {
        Self::NAMES[*self as usize]
    }
}

impl std::str::FromStr for Strategy {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tailwind" => Ok(Self::Tailwind),
            "linear" => Ok(Self::Linear),
            _ => Err(UnknownVariantError::new(s, Self::NAMES)),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The settings for deriving shade scales.
///
/// The defaults use the [`Strategy::Tailwind`] and let the base color's
/// brightness determine its step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// The derivation strategy.
    pub strategy: Strategy,
    /// The flag for always placing the base color at step 500.
    pub pin_to_500: bool,
}

impl GeneratorSettings {
    /// Determine generator settings from the environment.
    ///
    /// `SHADESCALE_STRATEGY` selects the strategy by name and a truthy
    /// `SHADESCALE_PIN_500` pins the base color to step 500. Missing or
    /// malformed variables leave the defaults in place.
    pub fn from_environment() -> Self {
        generator_settings_from_environment(&Env::default())
    }
}

pub(crate) fn generator_settings_from_environment<E: Environment>(env: &E) -> GeneratorSettings {
    let defaults = GeneratorSettings::default();
    GeneratorSettings {
        strategy: env
            .read_setting("SHADESCALE_STRATEGY")
            .unwrap_or(defaults.strategy),
        pin_to_500: env.is_enabled("SHADESCALE_PIN_500"),
    }
}

// ====================================================================================================================
// Shade Scale
// ====================================================================================================================

/// A shade scale.
///
/// A shade scale has exactly one color per [`ShadeStep`]. The color at the
/// scale's [`ShadeScale::base_level`] is the base color the scale was derived
/// from, not an approximation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShadeScale {
    shades: [Color; 11],
    base_level: ShadeStep,
}

impl ShadeScale {
    /// Derive a shade scale with the given settings.
    pub fn derive(color: Color, settings: &GeneratorSettings) -> Self {
        derive_shade_scale(color, settings.strategy, settings.pin_to_500)
    }

    /// Get the step holding the base color.
    pub const fn base_level(&self) -> ShadeStep {
        self.base_level
    }

    /// Get the base color.
    pub const fn base_color(&self) -> Color {
        self.shades[self.base_level as usize]
    }

    /// Get the color for the given step.
    pub const fn get(&self, step: ShadeStep) -> Color {
        self.shades[step as usize]
    }

    /// Get the colors in step order.
    pub const fn colors(&self) -> &[Color; 11] {
        &self.shades
    }

    /// Get an iterator over steps and their colors, from lightest to darkest.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeStep, Color)> + '_ {
        ShadeStep::ALL.into_iter().zip(self.shades.iter().copied())
    }

    /// Get the number of shades, which always is 11.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.shades.len()
    }
}

impl std::ops::Index<ShadeStep> for ShadeScale {
    type Output = Color;

    fn index(&self, index: ShadeStep) -> &Self::Output {
        &self.shades[index as usize]
    }
}

// ====================================================================================================================
// Derivation
// ====================================================================================================================

/// The hues that lightening drifts towards: cyan, magenta, yellow.
const CMY_HUES: [Float; 3] = [180.0, 300.0, 60.0];

/// The hues that darkening drifts towards: red (twice, at both ends of the
/// circle), blue, green.
const RGB_HUES: [Float; 4] = [360.0, 240.0, 120.0, 0.0];

/// Determine the step for the given base color.
///
/// If pinned, the step is 500. Otherwise, it follows from the color's
/// [brightness](Color::brightness) with a deliberately coarse classification:
/// above 200 is 100, above 150 is 300, below 90 is 900, below 100 is 700, and
/// everything else is 500.
pub fn base_level(color: Color, pin_to_500: bool) -> ShadeStep {
    if pin_to_500 {
        return ShadeStep::Step500;
    }

    let brightness = color.brightness();
    if 200.0 < brightness {
        ShadeStep::Step100
    } else if 150.0 < brightness {
        ShadeStep::Step300
    } else if brightness < 90.0 {
        ShadeStep::Step900
    } else if brightness < 100.0 {
        ShadeStep::Step700
    } else {
        ShadeStep::Step500
    }
}

/// Compute the shift towards the closest of the target hues, scaled by half
/// the intensity and rounded to whole degrees. The first target wins ties.
fn hue_shift(targets: &[Float], hue: Float, intensity: Float) -> Float {
    let closest = targets
        .iter()
        .copied()
        .reduce(|a, b| if (b - hue).abs() < (a - hue).abs() { b } else { a })
        .unwrap_or(hue);

    round_half_up(intensity * (closest - hue) * 0.5)
}

/// Lighten the color with the given intensity in `0..=1`.
///
/// In HSV, this function shifts the hue towards the closest of cyan, magenta,
/// and yellow, reduces saturation, and increases value. Coordinates are
/// rounded to whole units throughout.
pub fn lighten(color: Color, intensity: Float) -> Color {
    let [h, s, v] = color.to_rounded_hsv();

    let hue = h + hue_shift(&CMY_HUES, h, intensity);
    let saturation = (s - round_half_up(s * intensity * 0.75)).max(0.0);
    let value = (v + round_half_up((100.0 - v) * intensity * 0.85)).min(100.0);

    Color::from_hsv(&[hue, saturation, value])
}

/// Darken the color with the given intensity in `0..=1`.
///
/// In HSV, this function shifts the hue towards the closest of red, green,
/// and blue, with the shift *decreasing* as intensity grows, increases
/// saturation, and reduces value. Coordinates are rounded to whole units
/// throughout.
pub fn darken(color: Color, intensity: Float) -> Color {
    let [h, s, v] = color.to_rounded_hsv();

    let hue = h + hue_shift(&RGB_HUES, h, 1.0 - intensity);
    let saturation = (s + round_half_up((100.0 - s) * intensity * 0.5)).min(100.0);
    let value = (v - round_half_up(v * intensity * 0.85)).max(0.0);

    Color::from_hsv(&[hue, saturation, value])
}

fn derive_tailwind(color: Color, level: ShadeStep) -> [Color; 11] {
    ShadeStep::ALL.map(|step| match step.cmp(&level) {
        std::cmp::Ordering::Less => lighten(color, step.intensity()),
        std::cmp::Ordering::Equal => color,
        std::cmp::Ordering::Greater => darken(color, step.intensity()),
    })
}

fn derive_linear(color: Color, level: ShadeStep) -> [Color; 11] {
    let [h, s, l] = color.to_rounded_hsl();
    let fraction = level.value() as Float / 1000.0;

    let max_lightness = (l + (100.0 - l) * (1.0 - fraction)).min(100.0);
    let min_lightness = (l - l * fraction).max(0.0);
    let range = max_lightness - min_lightness;

    let mut shades = ShadeStep::ALL.map(|step| {
        let position = (step.value() - 50) as Float / 900.0;
        let lightness = (max_lightness - position * range).clamp(0.0, 100.0);

        let saturation = if 90.0 < lightness {
            (s - 15.0).max(0.0)
        } else if lightness < 10.0 {
            (s - 20.0).max(0.0)
        } else {
            s
        };

        Color::from_hsl(&[h, saturation, round_half_up(lightness)])
    });

    // Interpolation only approximates the base color
    shades[level as usize] = color;
    shades
}

/// Derive a shade scale from the base color.
///
/// The result always has eleven shades, holds the base color verbatim at its
/// base level, and is the same for the same arguments.
///
/// ```
/// # use shadescale::{derive_shade_scale, Color, ShadeStep, Strategy};
/// let red = Color::new(255, 0, 0);
/// let scale = derive_shade_scale(red, Strategy::Linear, true);
/// assert_eq!(scale.base_level(), ShadeStep::Step500);
/// assert_eq!(scale[ShadeStep::Step500], red);
/// assert_eq!(scale[ShadeStep::Step950].to_string(), "#800000");
/// ```
pub fn derive_shade_scale(color: Color, strategy: Strategy, pin_to_500: bool) -> ShadeScale {
    let level = base_level(color, pin_to_500);
    debug!(
        %color,
        %strategy,
        base_level = level.value(),
        brightness = color.brightness(),
        "deriving shade scale"
    );

    let shades = match strategy {
        Strategy::Tailwind => derive_tailwind(color, level),
        Strategy::Linear => derive_linear(color, level),
    };

    for (step, shade) in ShadeStep::ALL.iter().zip(shades.iter()) {
        trace!(step = step.value(), %shade, "derived shade");
    }

    ShadeScale {
        shades,
        base_level: level,
    }
}
