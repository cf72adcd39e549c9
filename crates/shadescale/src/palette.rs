//! One-call palette generation from user input.

use rand::Rng;
use tracing::debug;

use crate::{name_color_with, Color, ColorName, GeneratorSettings, ShadeScale};

/// A named shade scale.
///
/// A palette combines a [`ShadeScale`] with a decorative name such as `Royal
/// Blue` and a Tailwind-style name such as `blue-500`. Both names are computed
/// from the base color's HSL coordinates rounded to whole units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    name: String,
    color_name: ColorName,
    scale: ShadeScale,
}

impl Palette {
    /// Generate a palette from the possibly malformed input, drawing the name
    /// prefix from the given random number generator.
    ///
    /// The input is [normalized leniently](Color::lenient), so that this
    /// function never fails.
    ///
    /// ```
    /// # use rand::SeedableRng;
    /// # use shadescale::{GeneratorSettings, Palette, ShadeStep};
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let palette = Palette::generate("#f00", &GeneratorSettings::default(), &mut rng);
    /// assert_eq!(palette.base_color().to_string(), "#f00000");
    /// assert!(palette.name().ends_with(" Red"));
    /// assert_eq!(palette.scale().len(), 11);
    /// ```
    pub fn generate<R: Rng + ?Sized>(input: &str, settings: &GeneratorSettings, rng: &mut R) -> Self {
        let color = Color::lenient(input);
        debug!(input, %color, "generating palette");

        let [h, s, l] = color.to_rounded_hsl();
        let (s, l) = (s / 100.0, l / 100.0);

        Self {
            name: name_color_with(rng, h, s, l),
            color_name: ColorName::new(h, s, l),
            scale: ShadeScale::derive(color, settings),
        }
    }

    /// Generate a palette from the possibly malformed input, using the
    /// thread-local random number generator for the name.
    pub fn generate_with_thread_rng(input: &str, settings: &GeneratorSettings) -> Self {
        Self::generate(input, settings, &mut rand::rng())
    }

    /// Generate a palette for a random base color.
    pub fn random<R: Rng + ?Sized>(settings: &GeneratorSettings, rng: &mut R) -> Self {
        let color = Color::random(rng);
        Self::generate(&color.to_string(), settings, rng)
    }

    /// Get the decorative name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the Tailwind-style name.
    pub const fn color_name(&self) -> ColorName {
        self.color_name
    }

    /// Get the base color.
    pub const fn base_color(&self) -> Color {
        self.scale.base_color()
    }

    /// Get the shade scale.
    pub const fn scale(&self) -> &ShadeScale {
        &self.scale
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} ({})", self.name, self.color_name)?;
        for (step, color) in self.scale.iter() {
            let marker = if step == self.scale.base_level() { " *" } else { "" };
            writeln!(f, "{:>5}  {}{}", step, color, marker)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{derive_shade_scale, ShadeStep, Strategy};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate() {
        let mut rng = StdRng::seed_from_u64(1);
        let settings = GeneratorSettings {
            strategy: Strategy::Linear,
            pin_to_500: true,
        };

        let palette = Palette::generate("9b40ea", &settings, &mut rng);
        assert_eq!(palette.base_color(), Color::new(0x9b, 0x40, 0xea));
        assert_eq!(palette.scale().base_level(), ShadeStep::Step500);
        assert_eq!(
            palette.scale(),
            &derive_shade_scale(palette.base_color(), Strategy::Linear, true)
        );
        // Rounded HSL is 272, 80, 58
        assert_eq!(palette.color_name().to_string(), "violet-600");
        assert!(palette.name().ends_with(" Violet"));
    }

    #[test]
    fn test_lenient_input() {
        let mut rng = StdRng::seed_from_u64(2);
        let settings = GeneratorSettings::default();

        let palette = Palette::generate("", &settings, &mut rng);
        assert_eq!(palette.base_color(), Color::BLACK);
        assert_eq!(palette.scale().len(), 11);

        let palette = Palette::generate("#12", &settings, &mut rng);
        assert_eq!(palette.base_color(), Color::new(0x12, 0, 0));
    }

    #[test]
    fn test_reproducible() {
        let settings = GeneratorSettings::default();
        let palette1 = Palette::random(&settings, &mut StdRng::seed_from_u64(99));
        let palette2 = Palette::random(&settings, &mut StdRng::seed_from_u64(99));
        assert_eq!(palette1, palette2);

        let text = palette1.to_string();
        assert_eq!(text.lines().count(), 12);
        assert_eq!(text.matches(" *").count(), 1);
    }
}
