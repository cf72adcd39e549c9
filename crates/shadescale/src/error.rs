//! Utility module with shadescale's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
///
/// Strict parsing with [`Color as
/// FromStr`](crate::Color#impl-FromStr-for-Color) only accepts the hashed
/// hexadecimal format with exactly six digits. Lenient normalization with
/// [`Color::lenient`](crate::Color::lenient) never produces this error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with `#`.
    UnknownFormat,

    /// A color format with an unexpected number of characters. For example,
    /// `#00` is missing four hexadecimal digits and `#ff00ff00` has two too
    /// many.
    UnexpectedCharacters,

    /// A color format with the right length but at least one character that
    /// is not a hexadecimal digit. For example, `#efgefg`.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str("color format should start with `#`"),
            UnexpectedCharacters => {
                f.write_str("color format should have exactly 6 hexadecimal digits after `#`")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// A number that is not one of the eleven shade steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShadeStepError {
    pub value: u16,
}

impl ShadeStepError {
    /// Create a new shade step error.
    pub fn new(value: u16) -> Self {
        Self { value }
    }
}

impl std::fmt::Display for ShadeStepError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} is not a shade step (50, 100, 200, ..., 900, 950)",
            self.value
        ))
    }
}

impl std::error::Error for ShadeStepError {}

#[cfg(feature = "pyffi")]
impl From<ShadeStepError> for PyErr {
    fn from(value: ShadeStepError) -> Self {
        pyo3::exceptions::PyIndexError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// A string that does not name a variant of some settings enumeration.
///
/// The settings enumerations, e.g., [`Strategy`](crate::Strategy) or
/// [`ContrastMethod`](crate::ContrastMethod), implement `FromStr`, since their
/// values may come from environment variables or the Python bindings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownVariantError {
    pub value: String,
    pub expected: &'static [&'static str],
}

impl UnknownVariantError {
    /// Create a new unknown variant error.
    pub fn new<S: Into<String>>(value: S, expected: &'static [&'static str]) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for UnknownVariantError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!("`{}` should be one of ", self.value))?;
        for (index, name) in self.expected.iter().enumerate() {
            if 0 < index {
                f.write_str(", ")?;
            }
            f.write_fmt(format_args!("`{}`", name))?;
        }
        Ok(())
    }
}

impl std::error::Error for UnknownVariantError {}

#[cfg(feature = "pyffi")]
impl From<UnknownVariantError> for PyErr {
    fn from(value: UnknownVariantError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{ColorFormatError, ShadeStepError, UnknownVariantError};

    #[test]
    fn test_messages() {
        assert_eq!(
            ColorFormatError::UnknownFormat.to_string(),
            "color format should start with `#`"
        );
        assert_eq!(
            ShadeStepError::new(150).to_string(),
            "150 is not a shade step (50, 100, 200, ..., 900, 950)"
        );
        assert_eq!(
            UnknownVariantError::new("neon", &["tailwind", "linear"]).to_string(),
            "`neon` should be one of `tailwind`, `linear`"
        );
    }
}
