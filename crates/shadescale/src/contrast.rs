//! Contrast scoring between colors.
//!
//! Contrast is computed from [relative luminance](crate::Color::luminance)
//! with one of two [`ContrastMethod`]s and then classified against a
//! [`Score`]. Scores come in two mutually exclusive vocabularies: percentage
//! tiers, which first map the contrast to a percentage with a
//! [`PercentageMapping`], and literal WCAG ratio tiers. Both vocabularies and
//! both mappings are supported as alternative configurations.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use tracing::warn;

use crate::core::{to_apca_contrast, to_wcag2_contrast};
use crate::error::UnknownVariantError;
use crate::util::{Env, Environment};
use crate::{Color, Float};

// ====================================================================================================================
// Methods
// ====================================================================================================================

/// The method for computing contrast.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "shadescale")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContrastMethod {
    /// The WCAG 2 contrast ratio, ranging from 1 to 21.
    #[default]
    Wcag2,
    /// An approximation of APCA, scaling the absolute luminance difference to
    /// `0..=100`. This is not the official algorithm.
    Apca,
}

impl ContrastMethod {
    const NAMES: &'static [&'static str] = &["wcag2", "apca"];

    /// Get this method's name.
    pub const fn name(&self) -> &'static str {
        Self::NAMES[*self as usize]
    }
}

impl std::str::FromStr for ContrastMethod {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wcag2" => Ok(Self::Wcag2),
            "apca" => Ok(Self::Apca),
            _ => Err(UnknownVariantError::new(s, Self::NAMES)),
        }
    }
}

impl std::fmt::Display for ContrastMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the contrast between two luminance values with the given method.
///
/// The luminance values must be in `0..=1`. Both methods are symmetric in
/// their arguments.
///
/// ```
/// # use shadescale::{contrast_ratio, ContrastMethod};
/// assert_eq!(contrast_ratio(0.0, 0.0, ContrastMethod::Wcag2), 1.0);
/// assert!((contrast_ratio(0.0, 1.0, ContrastMethod::Wcag2) - 21.0).abs() < 1e-9);
/// ```
pub fn contrast_ratio(luminance1: Float, luminance2: Float, method: ContrastMethod) -> Float {
    match method {
        ContrastMethod::Wcag2 => to_wcag2_contrast(luminance1, luminance2),
        ContrastMethod::Apca => to_apca_contrast(luminance1, luminance2),
    }
}

/// Compute the contrast between two colors with the given method.
pub fn contrast_between(color1: Color, color2: Color, method: ContrastMethod) -> Float {
    contrast_ratio(color1.luminance(), color2.luminance(), method)
}

// ====================================================================================================================
// Percentages
// ====================================================================================================================

/// The mapping from contrast ratio to percentage.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "shadescale")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PercentageMapping {
    /// Map ratios `1..=21` linearly onto `0..=106` with `(ratio - 1) / 20 *
    /// 106`.
    #[default]
    Extended,
    /// Map ratios onto `0..=100` with `min(ratio / 7 * 100, 100)`, i.e., a
    /// ratio of 7 or more is 100%.
    Capped,
}

impl PercentageMapping {
    const NAMES: &'static [&'static str] = &["extended", "capped"];

    /// Get this mapping's name.
    pub const fn name(&self) -> &'static str {
        Self::NAMES[*self as usize]
    }
}

impl std::str::FromStr for PercentageMapping {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "extended" => Ok(Self::Extended),
            "capped" => Ok(Self::Capped),
            _ => Err(UnknownVariantError::new(s, Self::NAMES)),
        }
    }
}

impl std::fmt::Display for PercentageMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert the contrast ratio to a percentage for display.
pub fn percentage_of(ratio: Float, mapping: PercentageMapping) -> Float {
    match mapping {
        PercentageMapping::Extended => (ratio - 1.0) / 20.0 * 106.0,
        PercentageMapping::Capped => (ratio / 7.0 * 100.0).min(100.0),
    }
}

// ====================================================================================================================
// Scores
// ====================================================================================================================

/// The two vocabularies for scores.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "shadescale")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThresholdScheme {
    /// Scores are minimum percentages.
    #[default]
    Percentage,
    /// Scores are minimum WCAG contrast ratios.
    Ratio,
}

impl ThresholdScheme {
    const NAMES: &'static [&'static str] = &["percentage", "ratio"];

    /// Get this scheme's name.
    pub const fn name(&self) -> &'static str {
        Self::NAMES[*self as usize]
    }

    /// Get the default score in this scheme's vocabulary.
    pub const fn default_score(&self) -> Score {
        match self {
            Self::Percentage => Score::Percent(PercentScore::Sixty),
            Self::Ratio => Score::Ratio(RatioScore::AA),
        }
    }
}

impl std::str::FromStr for ThresholdScheme {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "percentage" => Ok(Self::Percentage),
            "ratio" => Ok(Self::Ratio),
            _ => Err(UnknownVariantError::new(s, Self::NAMES)),
        }
    }
}

impl std::fmt::Display for ThresholdScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A score in the percentage vocabulary.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PercentScore {
    /// At least 60%, similar to AA.
    #[default]
    Sixty,
    /// At least 80%, similar to AAA.
    Eighty,
    /// Everything passes.
    All,
}

/// A score in the WCAG ratio vocabulary.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RatioScore {
    /// A ratio of at least 4.5.
    #[default]
    AA,
    /// A ratio of at least 7.
    AAA,
    /// Everything passes.
    All,
}

/// A score, i.e., a pass/fail threshold for contrast.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Score {
    Percent(PercentScore),
    Ratio(RatioScore),
}

impl Default for Score {
    fn default() -> Self {
        Self::Percent(PercentScore::default())
    }
}

impl Score {
    /// Get the vocabulary this score belongs to.
    pub const fn scheme(&self) -> ThresholdScheme {
        match self {
            Self::Percent(_) => ThresholdScheme::Percentage,
            Self::Ratio(_) => ThresholdScheme::Ratio,
        }
    }

    /// Parse the score in the given vocabulary.
    ///
    /// The percentage vocabulary accepts `60`, `80`, and `all`. The ratio
    /// vocabulary accepts `aa`, `aaa`, and `all`. Both ignore ASCII case.
    pub fn parse(scheme: ThresholdScheme, s: &str) -> Result<Self, UnknownVariantError> {
        let lowercase = s.trim().to_ascii_lowercase();
        match scheme {
            ThresholdScheme::Percentage => match lowercase.as_str() {
                "60" => Ok(Self::Percent(PercentScore::Sixty)),
                "80" => Ok(Self::Percent(PercentScore::Eighty)),
                "all" => Ok(Self::Percent(PercentScore::All)),
                _ => Err(UnknownVariantError::new(s, &["60", "80", "all"])),
            },
            ThresholdScheme::Ratio => match lowercase.as_str() {
                "aa" => Ok(Self::Ratio(RatioScore::AA)),
                "aaa" => Ok(Self::Ratio(RatioScore::AAA)),
                "all" => Ok(Self::Ratio(RatioScore::All)),
                _ => Err(UnknownVariantError::new(s, &["AA", "AAA", "all"])),
            },
        }
    }
}

impl From<PercentScore> for Score {
    fn from(value: PercentScore) -> Self {
        Self::Percent(value)
    }
}

impl From<RatioScore> for Score {
    fn from(value: RatioScore) -> Self {
        Self::Ratio(value)
    }
}

/// Determine whether the contrast passes the score.
///
/// Percentage scores convert the contrast with the given mapping first,
/// whereas ratio scores compare the contrast as is and ignore the mapping.
///
/// ```
/// # use shadescale::{classify, PercentageMapping, RatioScore};
/// let mapping = PercentageMapping::default();
/// assert!(classify(4.5, RatioScore::AA.into(), mapping));
/// assert!(!classify(4.49, RatioScore::AA.into(), mapping));
/// ```
pub fn classify(ratio: Float, score: Score, mapping: PercentageMapping) -> bool {
    match score {
        Score::Percent(PercentScore::All) | Score::Ratio(RatioScore::All) => true,
        Score::Percent(PercentScore::Sixty) => 60.0 <= percentage_of(ratio, mapping),
        Score::Percent(PercentScore::Eighty) => 80.0 <= percentage_of(ratio, mapping),
        Score::Ratio(RatioScore::AA) => 4.5 <= ratio,
        Score::Ratio(RatioScore::AAA) => 7.0 <= ratio,
    }
}

// ====================================================================================================================
// Settings
// ====================================================================================================================

/// The settings for contrast reports.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContrastSettings {
    /// The contrast method.
    pub method: ContrastMethod,
    /// The pass/fail threshold.
    pub score: Score,
    /// The mapping from contrast to percentage.
    pub mapping: PercentageMapping,
    /// The flag for picking black or white text automatically.
    pub auto_text_color: bool,
}

impl ContrastSettings {
    /// Determine contrast settings from the environment.
    ///
    /// `SHADESCALE_METHOD`, `SHADESCALE_PERCENTAGE`, and `SHADESCALE_SCHEME`
    /// select method, percentage mapping, and score vocabulary by name.
    /// `SHADESCALE_SCORE` selects the score within the vocabulary and a truthy
    /// `SHADESCALE_AUTO_TEXT` enables automatic text color. Missing or
    /// malformed variables leave the defaults in place.
    pub fn from_environment() -> Self {
        contrast_settings_from_environment(&Env::default())
    }

    /// Compute the contrast between two colors.
    pub fn contrast(&self, color1: Color, color2: Color) -> Float {
        contrast_between(color1, color2, self.method)
    }

    /// Determine whether the contrast passes this configuration's score.
    pub fn passes(&self, contrast: Float) -> bool {
        classify(contrast, self.score, self.mapping)
    }

    /// Convert the contrast to a percentage with this configuration's
    /// mapping.
    pub fn percentage(&self, contrast: Float) -> Float {
        percentage_of(contrast, self.mapping)
    }
}

pub(crate) fn contrast_settings_from_environment<E: Environment>(env: &E) -> ContrastSettings {
    let defaults = ContrastSettings::default();

    let scheme: ThresholdScheme = env.read_setting("SHADESCALE_SCHEME").unwrap_or_default();
    let fallback = scheme.default_score();
    let score = env
        .read("SHADESCALE_SCORE")
        .ok()
        .and_then(|value| match Score::parse(scheme, &value) {
            Ok(score) => Some(score),
            Err(error) => {
                warn!(key = "SHADESCALE_SCORE", %error, "ignoring malformed setting");
                None
            }
        })
        .unwrap_or(fallback);

    ContrastSettings {
        method: env
            .read_setting("SHADESCALE_METHOD")
            .unwrap_or(defaults.method),
        score,
        mapping: env
            .read_setting("SHADESCALE_PERCENTAGE")
            .unwrap_or(defaults.mapping),
        auto_text_color: env.is_enabled("SHADESCALE_AUTO_TEXT"),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;
    use crate::util::FakeEnv;

    #[test]
    fn test_contrast_ratio() {
        assert_eq!(contrast_ratio(0.0, 0.0, ContrastMethod::Wcag2), 1.0);
        assert_close_enough!(contrast_ratio(0.0, 1.0, ContrastMethod::Wcag2), 21.0);
        assert_close_enough!(contrast_ratio(0.0, 1.0, ContrastMethod::Apca), 100.0);
        assert_close_enough!(
            contrast_between(Color::BLACK, Color::WHITE, ContrastMethod::Wcag2),
            21.0
        );
        // #767676 is the lightest gray passing AA on white
        let gray = Color::new(0x76, 0x76, 0x76);
        let ratio = contrast_between(gray, Color::WHITE, ContrastMethod::Wcag2);
        assert!(4.5 < ratio && ratio < 4.6, "ratio {} should be just above 4.5", ratio);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage_of(1.0, PercentageMapping::Extended), 0.0);
        assert_close_enough!(percentage_of(21.0, PercentageMapping::Extended), 106.0);
        assert_close_enough!(percentage_of(11.0, PercentageMapping::Extended), 53.0);
        assert_close_enough!(percentage_of(3.5, PercentageMapping::Capped), 50.0);
        assert_eq!(percentage_of(7.0, PercentageMapping::Capped), 100.0);
        assert_eq!(percentage_of(21.0, PercentageMapping::Capped), 100.0);
    }

    #[test]
    fn test_classify() {
        let extended = PercentageMapping::Extended;
        let capped = PercentageMapping::Capped;

        assert!(classify(4.5, RatioScore::AA.into(), extended));
        assert!(!classify(4.49, RatioScore::AA.into(), extended));
        assert!(classify(7.0, RatioScore::AAA.into(), capped));
        assert!(!classify(6.99, RatioScore::AAA.into(), capped));
        assert!(classify(1.0, RatioScore::All.into(), capped));

        // 60% of the extended range requires a ratio of about 12.3
        assert!(!classify(12.0, PercentScore::Sixty.into(), extended));
        assert!(classify(12.5, PercentScore::Sixty.into(), extended));
        assert!(!classify(16.0, PercentScore::Eighty.into(), extended));
        assert!(classify(16.2, PercentScore::Eighty.into(), extended));
        // 60% of the capped range requires a ratio of 4.2
        assert!(classify(4.25, PercentScore::Sixty.into(), capped));
        assert!(!classify(4.1, PercentScore::Sixty.into(), capped));
        assert!(classify(1.0, PercentScore::All.into(), extended));
    }

    #[test]
    fn test_parsing() -> Result<(), UnknownVariantError> {
        assert_eq!(
            Score::parse(ThresholdScheme::Ratio, "AAA")?,
            Score::Ratio(RatioScore::AAA)
        );
        assert_eq!(
            Score::parse(ThresholdScheme::Percentage, "all")?,
            Score::Percent(PercentScore::All)
        );
        assert!(Score::parse(ThresholdScheme::Percentage, "AA").is_err());
        assert_eq!("APCA".parse::<ContrastMethod>()?, ContrastMethod::Apca);
        assert_eq!("capped".parse::<PercentageMapping>()?, PercentageMapping::Capped);
        assert_eq!(Score::default().scheme(), ThresholdScheme::Percentage);
        assert_eq!(ThresholdScheme::default().default_score(), Score::default());
        assert_eq!(
            ThresholdScheme::Ratio.default_score(),
            Score::Ratio(RatioScore::AA)
        );
        Ok(())
    }

    #[test]
    fn test_settings() {
        let env = &mut FakeEnv::new();
        assert_eq!(
            contrast_settings_from_environment(env),
            ContrastSettings::default()
        );

        env.set("SHADESCALE_SCHEME", "ratio");
        assert_eq!(
            contrast_settings_from_environment(env).score,
            Score::Ratio(RatioScore::AA)
        );

        env.set("SHADESCALE_SCORE", "aaa");
        env.set("SHADESCALE_METHOD", "apca");
        env.set("SHADESCALE_PERCENTAGE", "capped");
        env.set("SHADESCALE_AUTO_TEXT", "yes");
        let settings = contrast_settings_from_environment(env);
        assert_eq!(settings.score, Score::Ratio(RatioScore::AAA));
        assert_eq!(settings.method, ContrastMethod::Apca);
        assert_eq!(settings.mapping, PercentageMapping::Capped);
        assert!(settings.auto_text_color);

        // 80 belongs to the other vocabulary
        env.set("SHADESCALE_SCORE", "80");
        assert_eq!(
            contrast_settings_from_environment(env).score,
            Score::Ratio(RatioScore::AA)
        );
    }
}
