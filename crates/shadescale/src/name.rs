//! Human-readable names for colors.
//!
//! Names combine one of twelve [`BaseHue`]s with either a random decorative
//! prefix, as in "Cosmic Violet", or a shade number, as in "violet-700". The
//! prefix is the only source of non-determinism in this crate, and it is drawn
//! from a caller-provided [`Rng`] for reproducible names.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use rand::Rng;

use crate::core::{normalize_hue, round_half_up};
use crate::{Float, ShadeStep};

/// The twelve named hues, 30° apart.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "shadescale")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BaseHue {
    Red,
    Orange,
    Yellow,
    Lime,
    Green,
    Teal,
    Cyan,
    Blue,
    Indigo,
    Violet,
    Purple,
    Pink,
}

impl BaseHue {
    /// All base hues in order of increasing hue.
    pub const ALL: [BaseHue; 12] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Lime,
        Self::Green,
        Self::Teal,
        Self::Cyan,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
        Self::Purple,
        Self::Pink,
    ];

    const NAMES: [&'static str; 12] = [
        "red", "orange", "yellow", "lime", "green", "teal", "cyan", "blue", "indigo", "violet",
        "purple", "pink",
    ];

    const TITLES: [&'static str; 12] = [
        "Red", "Orange", "Yellow", "Lime", "Green", "Teal", "Cyan", "Blue", "Indigo", "Violet",
        "Purple", "Pink",
    ];

    /// Get this base hue's angle in degrees.
    pub fn hue(&self) -> Float {
        30.0 * (*self as usize) as Float
    }

    /// Get this base hue's lowercase name.
    pub const fn name(&self) -> &'static str {
        Self::NAMES[*self as usize]
    }

    /// Get this base hue's capitalized name.
    pub const fn title(&self) -> &'static str {
        Self::TITLES[*self as usize]
    }

    /// Find the base hue nearest to the given hue in degrees.
    ///
    /// The distance is `min(|h - base|, |h - base + 360|)`, which only wraps
    /// around for hues below the base hue. As a result, hues just below 360°
    /// resolve to pink, not red. The first base hue wins ties.
    pub fn nearest(hue: Float) -> Self {
        let hue = normalize_hue(hue);

        let mut closest = Self::Red;
        let mut closest_distance = 360.0;
        for candidate in Self::ALL {
            let base = candidate.hue();
            let distance = (hue - base).abs().min((hue - base + 360.0).abs());
            if distance < closest_distance {
                closest = candidate;
                closest_distance = distance;
            }
        }

        closest
    }
}

impl std::fmt::Display for BaseHue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The decorative prefixes for color names.
pub const PREFIXES: [&str; 8] = [
    "Electric", "Royal", "Deep", "Bright", "Vivid", "Cosmic", "Crystal", "Mystic",
];

// --------------------------------------------------------------------------------------------------------------------

/// A Tailwind-style color name, e.g., `violet-700`.
///
/// The shade number estimates a step from lightness and then moves two steps
/// lighter for desaturated and two steps darker for saturated colors. Those
/// moves use plain arithmetic, so the number need not be a [`ShadeStep`], e.g.,
/// 750.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorName {
    base: BaseHue,
    shade: u16,
}

impl ColorName {
    /// Create the name for the given hue in degrees and saturation and
    /// lightness in `0..=1`.
    pub fn new(hue: Float, saturation: Float, lightness: Float) -> Self {
        let base = BaseHue::nearest(hue);

        let index = round_half_up((1.0 - lightness.clamp(0.0, 1.0)) * 10.0) as usize;
        let mut shade = ShadeStep::from_index(index)
            .unwrap_or(ShadeStep::Step950)
            .value();

        if saturation < 0.3 {
            shade = shade.saturating_sub(200).max(50);
        } else if 0.7 < saturation {
            shade = (shade + 200).min(950);
        }

        Self { base, shade }
    }

    /// Get the base hue.
    pub const fn base(&self) -> BaseHue {
        self.base
    }

    /// Get the shade number.
    pub const fn shade(&self) -> u16 {
        self.shade
    }
}

impl std::fmt::Display for ColorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.base, self.shade)
    }
}

/// Name the color with hue in degrees and saturation and lightness in `0..=1`
/// in Tailwind style, e.g., `blue-500`.
pub fn tailwind_name(hue: Float, saturation: Float, lightness: Float) -> String {
    ColorName::new(hue, saturation, lightness).to_string()
}

/// Name the color with hue in degrees and saturation and lightness in `0..=1`,
/// drawing the prefix from the given random number generator.
///
/// The result has the form `{Prefix} {Base}`, e.g., `Mystic Teal`. Every
/// prefix in [`PREFIXES`] is equally likely.
///
/// ```
/// # use rand::SeedableRng;
/// # use shadescale::name_color_with;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let name = name_color_with(&mut rng, 0.0, 1.0, 0.0);
/// assert!(name.ends_with(" Red"));
/// ```
pub fn name_color_with<R: Rng + ?Sized>(
    rng: &mut R,
    hue: Float,
    saturation: Float,
    lightness: Float,
) -> String {
    let base = ColorName::new(hue, saturation, lightness).base();
    let prefix = PREFIXES[rng.random_range(0..PREFIXES.len())];
    format!("{} {}", prefix, base.title())
}

/// Name the color with hue in degrees and saturation and lightness in `0..=1`,
/// using the thread-local random number generator.
///
/// Since the prefix is random, repeated invocations with the same arguments
/// generally produce different names. Use [`name_color_with`] and a seeded
/// generator for reproducible names.
pub fn name_color(hue: Float, saturation: Float, lightness: Float) -> String {
    name_color_with(&mut rand::rng(), hue, saturation, lightness)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_nearest() {
        assert_eq!(BaseHue::nearest(0.0), BaseHue::Red);
        assert_eq!(BaseHue::nearest(14.0), BaseHue::Red);
        // Ties go to the first base hue
        assert_eq!(BaseHue::nearest(15.0), BaseHue::Red);
        assert_eq!(BaseHue::nearest(16.0), BaseHue::Orange);
        assert_eq!(BaseHue::nearest(200.0), BaseHue::Blue);
        assert_eq!(BaseHue::nearest(272.0), BaseHue::Violet);
        assert_eq!(BaseHue::nearest(350.0), BaseHue::Pink);
        assert_eq!(BaseHue::nearest(-30.0), BaseHue::Pink);
        assert_eq!(BaseHue::nearest(390.0), BaseHue::Orange);

        assert_eq!(BaseHue::Indigo.hue(), 240.0);
        assert_eq!(BaseHue::Pink.to_string(), "pink");
    }

    #[test]
    fn test_tailwind_name() {
        assert_eq!(tailwind_name(0.0, 1.0, 0.0), "red-950");
        assert_eq!(tailwind_name(210.0, 0.5, 0.5), "blue-500");
        assert_eq!(tailwind_name(210.0, 0.2, 0.5), "blue-300");
        assert_eq!(tailwind_name(210.0, 0.2, 1.0), "blue-50");
        assert_eq!(tailwind_name(120.0, 0.8, 0.45), "green-800");
        assert_eq!(ColorName::new(120.0, 0.8, 0.45).shade(), 800);
        assert_eq!(tailwind_name(120.0, 0.1, 0.95), "green-50");
    }

    #[test]
    fn test_name_color() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..32 {
            let name = name_color_with(&mut rng, 0.0, 1.0, 0.0);
            let (prefix, base) = name
                .split_once(' ')
                .expect("name should have prefix and base");
            assert!(PREFIXES.contains(&prefix), "unexpected prefix {}", prefix);
            assert_eq!(base, "Red");
        }

        let name1 = name_color_with(&mut StdRng::seed_from_u64(665), 272.0, 0.8, 0.58);
        let name2 = name_color_with(&mut StdRng::seed_from_u64(665), 272.0, 0.8, 0.58);
        assert_eq!(name1, name2);
        assert!(name_color(150.0, 0.5, 0.5).ends_with(" Teal"));
    }
}
