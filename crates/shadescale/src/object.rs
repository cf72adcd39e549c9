#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use rand::Rng;

use crate::core::{
    format, from_24bit, hsl_to_rgb, hsv_to_rgb, normalize, parse, rgb_to_hsl, rgb_to_hsv,
    round_half_up, to_24bit, to_brightness, to_relative_luminance,
};
use crate::error::ColorFormatError;
use crate::Float;

/// A 24-bit RGB color.
///
/// Colors are plain values with three byte-sized coordinates and no alpha.
/// Their external representation is the hashed hexadecimal format `#rrggbb`.
/// [`Color as FromStr`](struct.Color.html#impl-FromStr-for-Color) parses that
/// format strictly, accepting hexadecimal digits in either case, whereas
/// [`Color::lenient`] normalizes any string into a color. Display always
/// produces lowercase digits.
///
/// Conversions to HSV and HSL coordinates are exact, while conversions back
/// round each coordinate to the nearest byte. Hence a round trip through
/// either representation reproduces the original color.
///
/// ```
/// # use shadescale::Color;
/// # use std::str::FromStr;
/// let purple = Color::from_str("#9B40EA")?;
/// assert_eq!(purple.to_string(), "#9b40ea");
/// assert_eq!(Color::from_hsv(&purple.to_hsv()), purple);
/// # Ok::<(), shadescale::error::ColorFormatError>(())
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "shadescale")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color([u8; 3]);

#[cfg(feature = "pyffi")]
#[pymethods]
impl Color {
    /// Create a new color from its coordinates. <i class=python-only>Python
    /// only!</i>
    #[new]
    pub const fn py_new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse the string as a color in strict hashed hexadecimal format. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "parse")]
    pub fn py_parse(s: &str) -> Result<Self, ColorFormatError> {
        s.parse()
    }

    /// Normalize the string into a color. <i class=python-only>Python
    /// only!</i>
    #[staticmethod]
    #[pyo3(name = "lenient")]
    pub fn py_lenient(s: &str) -> Self {
        Self::lenient(s)
    }

    /// Access this color's coordinates. <i class=python-only>Python only!</i>
    pub fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Get this color's HSV coordinates. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_hsv")]
    pub fn py_to_hsv(&self) -> [Float; 3] {
        self.to_hsv()
    }

    /// Get this color's HSL coordinates. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_hsl")]
    pub fn py_to_hsl(&self) -> [Float; 3] {
        self.to_hsl()
    }

    /// Get this color's relative luminance. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "luminance")]
    pub fn py_luminance(&self) -> Float {
        self.luminance()
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("Color({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Color {
    /// Pure white.
    pub const WHITE: Color = Color([0xff, 0xff, 0xff]);

    /// Pure black.
    pub const BLACK: Color = Color([0, 0, 0]);

    /// Create a new color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Normalize the possibly malformed hexadecimal string into a color.
    ///
    /// This constructor never fails. It drops a single leading `#`, keeps at
    /// most six characters, treats characters that are not hexadecimal digits
    /// as `0`, and pads missing digits with `0`. That way, shade derivation
    /// stays total even for partial user input. Callers that want to reject
    /// malformed input should use [`Color as
    /// FromStr`](struct.Color.html#impl-FromStr-for-Color) instead.
    ///
    /// ```
    /// # use shadescale::Color;
    /// assert_eq!(Color::lenient("9b4").to_string(), "#9b4000");
    /// ```
    pub fn lenient(s: &str) -> Self {
        Self(normalize(s))
    }

    /// Create a random color.
    ///
    /// All 2<sup>24</sup> colors are equally likely.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random())
    }

    /// Create a color from the given HSV coordinates.
    ///
    /// The hue is normalized to `0..360` and saturation and value are clamped
    /// to `0..=100` before conversion.
    pub fn from_hsv(coordinates: &[Float; 3]) -> Self {
        Self(to_24bit(&hsv_to_rgb(coordinates)))
    }

    /// Create a color from the given HSL coordinates.
    ///
    /// The hue is normalized to `0..360` and saturation and lightness are
    /// clamped to `0..=100` before conversion.
    pub fn from_hsl(coordinates: &[Float; 3]) -> Self {
        Self(to_24bit(&hsl_to_rgb(coordinates)))
    }

    /// Get this color's 24-bit coordinates.
    pub const fn to_rgb(&self) -> [u8; 3] {
        self.0
    }

    /// Get this color's HSV coordinates.
    ///
    /// The hue is in degrees `0..360`, saturation and value are percentages
    /// `0..=100`. Achromatic colors have hue zero.
    pub fn to_hsv(&self) -> [Float; 3] {
        let [r, g, b] = self.0;
        rgb_to_hsv(&from_24bit(r, g, b))
    }

    /// Get this color's HSV coordinates, rounded to whole units.
    pub(crate) fn to_rounded_hsv(&self) -> [Float; 3] {
        self.to_hsv().map(round_half_up)
    }

    /// Get this color's HSL coordinates.
    ///
    /// The hue is in degrees `0..360`, saturation and lightness are
    /// percentages `0..=100`. Achromatic colors have hue and saturation zero.
    pub fn to_hsl(&self) -> [Float; 3] {
        let [r, g, b] = self.0;
        rgb_to_hsl(&from_24bit(r, g, b))
    }

    /// Get this color's HSL coordinates, rounded to whole units.
    pub(crate) fn to_rounded_hsl(&self) -> [Float; 3] {
        self.to_hsl().map(round_half_up)
    }

    /// Determine this color's perceived brightness.
    ///
    /// The result is the luma-weighted sum of the gamma-encoded coordinates
    /// and ranges `0..=255`.
    pub fn brightness(&self) -> Float {
        to_brightness(&self.0)
    }

    /// Determine this color's relative luminance.
    ///
    /// The result ranges `0..=1` and serves as input to contrast computations.
    pub fn luminance(&self) -> Float {
        let [r, g, b] = self.0;
        to_relative_luminance(&from_24bit(r, g, b))
    }

    /// Determine whether white text is more legible than black text on this
    /// color as background.
    pub fn prefers_light_text(&self) -> bool {
        self.luminance() < 0.5
    }
}

impl AsRef<[u8; 3]> for Color {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Color> for [u8; 3] {
    fn from(value: Color) -> Self {
        value.0
    }
}

impl std::str::FromStr for Color {
    type Err = ColorFormatError;

    /// Parse the string in strict hashed hexadecimal format.
    ///
    /// After trimming leading and trailing white space, the string must be
    /// `#` followed by exactly six hexadecimal digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for Color {
    /// Format this color in lowercase hashed hexadecimal notation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(&self.0, f)
    }
}

#[cfg(test)]
mod test {
    use super::Color;
    use crate::assert_close_enough;
    use crate::error::ColorFormatError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_string() -> Result<(), ColorFormatError> {
        let color: Color = "#0A0B0C".parse()?;
        assert_eq!(color, Color::new(10, 11, 12));
        assert_eq!(color.to_string(), "#0a0b0c");
        assert_eq!(format!("{}", Color::WHITE), "#ffffff");
        assert_eq!(format!("{}", Color::BLACK), "#000000");
        assert_eq!(Color::try_from("#12345"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(Color::lenient("#1"), Color::new(0x10, 0, 0));
        Ok(())
    }

    #[test]
    fn test_hsv_round_trip() {
        for r in (0..=255_u8).step_by(5) {
            for g in (0..=255_u8).step_by(15) {
                for b in (0..=255_u8).step_by(17) {
                    let color = Color::new(r, g, b);
                    assert_eq!(Color::from_hsl(&color.to_hsl()), color);

                    let [r2, g2, b2] = Color::from_hsv(&color.to_hsv()).to_rgb();
                    for (c1, c2) in [(r, r2), (g, g2), (b, b2)] {
                        assert!(
                            c1.abs_diff(c2) <= 1,
                            "{} should survive HSV round trip within 1 but is {}",
                            color,
                            Color::new(r2, g2, b2)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_hsl() {
        let purple = Color::new(0x9b, 0x40, 0xea);
        assert_eq!(purple.to_rounded_hsv(), [272.0, 73.0, 92.0]);
        assert_eq!(purple.to_rounded_hsl(), [272.0, 80.0, 58.0]);
        assert_eq!(Color::from_hsl(&[0.0, 0.0, 100.0]), Color::WHITE);
        assert_eq!(Color::from_hsl(&[-120.0, 100.0, 50.0]), Color::new(0, 0, 255));
    }

    #[test]
    fn test_luminance() {
        assert_eq!(Color::BLACK.luminance(), 0.0);
        assert_close_enough!(Color::WHITE.luminance(), 1.0);
        assert_eq!(Color::WHITE.brightness().round(), 255.0);
        assert!(Color::BLACK.prefers_light_text());
        assert!(!Color::WHITE.prefers_light_text());
        assert!(Color::new(0x1e, 0x3a, 0x8a).prefers_light_text());
    }

    #[test]
    fn test_random() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(Color::random(&mut rng1), Color::random(&mut rng2));
    }
}
