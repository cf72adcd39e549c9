use crate::Float;

/// The coefficients for computing relative luminance and perceived brightness
/// from sRGB coordinates.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The breakpoint between the linear segment and the power curve of sRGB's
/// gamma, as given by WCAG 2.
const GAMMA_BREAKPOINT: Float = 0.03928;

/// Compute the relative luminance for the given sRGB coordinates in `0..=1`.
///
/// The result ranges from 0 for black to 1 for white.
pub(crate) fn to_relative_luminance(coordinates: &[Float; 3]) -> Float {
    #[inline]
    fn linearize(value: Float) -> Float {
        if value <= GAMMA_BREAKPOINT {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = *coordinates;

    linearize(r).mul_add(c1, linearize(g).mul_add(c2, linearize(b) * c3))
}

/// Compute the perceived brightness for the given 24-bit coordinates.
///
/// Brightness uses the luminance coefficients without linearization and hence
/// ranges from 0 for black to 255 for white.
pub(crate) fn to_brightness(coordinates: &[u8; 3]) -> Float {
    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = *coordinates;

    (r as Float).mul_add(c1, (g as Float).mul_add(c2, b as Float * c3))
}

/// Compute the WCAG 2 contrast ratio between two relative luminance values.
///
/// The arguments are interchangeable. The result ranges from 1 for identical
/// luminance to 21 for black and white.
pub(crate) fn to_wcag2_contrast(luminance1: Float, luminance2: Float) -> Float {
    let lighter = luminance1.max(luminance2);
    let darker = luminance1.min(luminance2);
    (lighter + 0.05) / (darker + 0.05)
}

/// The scale for the approximate APCA contrast.
pub(crate) const APCA_SCALE: Float = 100.0;

/// The exponent for the approximate APCA contrast.
pub(crate) const APCA_EXPONENT: Float = 1.0;

/// Compute an approximation of APCA contrast between two luminance values.
///
/// This is **not** the [Accessible Perceptual Contrast
/// Algorithm](https://github.com/Myndex/apca-w3). It merely scales the
/// absolute difference of its inputs, which makes it symmetric and puts it in
/// `0..=100` for inputs in `0..=1`. Treat results as a heuristic only.
pub(crate) fn to_apca_contrast(luminance1: Float, luminance2: Float) -> Float {
    APCA_SCALE * (luminance1 - luminance2).abs().powf(APCA_EXPONENT)
}
