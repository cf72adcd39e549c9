use crate::Float;

/// Round to the nearest integer, with halves rounding towards positive
/// infinity.
///
/// Unlike [`Float::round`], which rounds halves away from zero, this function
/// rounds -2.5 to -2. Hue shifts are signed, and they should round the same
/// way in either direction.
#[inline]
pub(crate) fn round_half_up(value: Float) -> Float {
    (value + 0.5).floor()
}

/// Normalize the hue to the range `0..360`.
#[inline]
pub(crate) fn normalize_hue(hue: Float) -> Float {
    if !hue.is_finite() {
        return 0.0;
    }

    let hue = hue.rem_euclid(360.0);
    // rem_euclid may round up to the modulus itself
    if 360.0 <= hue {
        0.0
    } else {
        hue
    }
}

/// Clamp a percentage to the range `0..=100`, mapping not-a-number to zero.
#[inline]
fn clamp_percent(value: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the floating point RGB coordinates to 24-bit representation.
///
/// The conversion clamps coordinates to `0x00..=0xff`, mapping not-a-number to
/// zero.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    #[inline]
    fn convert(value: Float) -> u8 {
        if value.is_nan() {
            0
        } else {
            round_half_up(value * 255.0).clamp(0.0, 255.0) as u8
        }
    }

    let [r, g, b] = *coordinates;
    [convert(r), convert(g), convert(b)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine the hue for the given RGB coordinates, which must have the given
/// maximum and the given non-zero delta between maximum and minimum.
///
/// The hue is computed from the sector of the maximal channel. Red wins ties
/// with green and blue, green wins ties with blue.
#[inline]
fn to_hue(coordinates: &[Float; 3], max: Float, delta: Float) -> Float {
    let [r, g, b] = *coordinates;

    let sector = if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let hue = 60.0 * sector;
    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}

/// Convert RGB coordinates in `0..=1` to HSV coordinates.
///
/// The resulting hue is in degrees `0..360`, saturation and value are
/// percentages `0..=100`. Achromatic colors have hue zero.
pub(crate) fn rgb_to_hsv(coordinates: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *coordinates;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta == 0.0 {
        return [0.0, 0.0, 100.0 * max];
    }

    // Hue as a fraction of the circle. Unlike to_hue, this formulation puts
    // #f0d200 at 52.49999..., so it rounds to 52.
    let distance = |c: Float| (max - c) / 6.0 / delta + 0.5;
    let [dr, dg, db] = [distance(r), distance(g), distance(b)];
    let mut hue = if max == r {
        db - dg
    } else if max == g {
        1.0 / 3.0 + dr - db
    } else {
        2.0 / 3.0 + dg - dr
    };
    if hue < 0.0 {
        hue += 1.0;
    } else if 1.0 < hue {
        hue -= 1.0;
    }

    [360.0 * hue, 100.0 * delta / max, 100.0 * max]
}

/// Convert HSV coordinates to RGB coordinates in `0..=1`.
///
/// The hue is normalized to `0..360` first. Saturation and value are clamped
/// to `0..=100`.
pub(crate) fn hsv_to_rgb(coordinates: &[Float; 3]) -> [Float; 3] {
    let h = normalize_hue(coordinates[0]) / 60.0;
    let s = clamp_percent(coordinates[1]) / 100.0;
    let v = clamp_percent(coordinates[2]) / 100.0;

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector as u8 % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Convert RGB coordinates in `0..=1` to HSL coordinates.
///
/// The resulting hue is in degrees `0..360`, saturation and lightness are
/// percentages `0..=100`. Achromatic colors have hue and saturation zero.
pub(crate) fn rgb_to_hsl(coordinates: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *coordinates;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    if delta == 0.0 {
        return [0.0, 0.0, 100.0 * lightness];
    }

    let saturation = if lightness <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    [
        to_hue(coordinates, max, delta),
        100.0 * saturation,
        100.0 * lightness,
    ]
}

/// Convert HSL coordinates to RGB coordinates in `0..=1`.
///
/// The hue is normalized to `0..360` first. Saturation and lightness are
/// clamped to `0..=100`.
pub(crate) fn hsl_to_rgb(coordinates: &[Float; 3]) -> [Float; 3] {
    let h = normalize_hue(coordinates[0]) / 360.0;
    let s = clamp_percent(coordinates[1]) / 100.0;
    let l = clamp_percent(coordinates[2]) / 100.0;

    if s == 0.0 {
        return [l, l, l];
    }

    let t2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let t1 = 2.0 * l - t2;

    let channel = |offset: Float| {
        let mut t3 = h + offset;
        if t3 < 0.0 {
            t3 += 1.0;
        } else if 1.0 < t3 {
            t3 -= 1.0;
        }

        if 6.0 * t3 < 1.0 {
            t1 + (t2 - t1) * 6.0 * t3
        } else if 2.0 * t3 < 1.0 {
            t2
        } else if 3.0 * t3 < 2.0 {
            t1 + (t2 - t1) * (2.0 / 3.0 - t3) * 6.0
        } else {
            t1
        }
    };

    [channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0)]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    #[test]
    fn test_rounding() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert_eq!(normalize_hue(Float::NAN), 0.0);
    }

    #[test]
    fn test_24bit() {
        assert_eq!(to_24bit(&from_24bit(0x12, 0xab, 0xff)), [0x12, 0xab, 0xff]);
        assert_eq!(to_24bit(&[-0.5, 1.5, Float::NAN]), [0, 255, 0]);
    }

    #[test]
    fn test_hsv() {
        let [h, s, v] = rgb_to_hsv(&from_24bit(255, 0, 0));
        assert_close_enough!(h, 0.0);
        assert_close_enough!(s, 100.0);
        assert_close_enough!(v, 100.0);

        let [h, s, v] = rgb_to_hsv(&from_24bit(0, 0, 255));
        assert_close_enough!(h, 240.0);
        assert_close_enough!(s, 100.0);
        assert_close_enough!(v, 100.0);

        // Magenta-ish red has negative sector and wraps around
        let [h, _, _] = rgb_to_hsv(&from_24bit(255, 0, 128));
        assert!(300.0 < h && h < 360.0, "hue {} should be in the last sector", h);

        let [h, s, v] = rgb_to_hsv(&from_24bit(128, 128, 128));
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert_close_enough!(v, 100.0 * 128.0 / 255.0);

        assert_eq!(to_24bit(&hsv_to_rgb(&[120.0, 100.0, 100.0])), [0, 255, 0]);
        assert_eq!(to_24bit(&hsv_to_rgb(&[480.0, 100.0, 100.0])), [0, 255, 0]);
        assert_eq!(to_24bit(&hsv_to_rgb(&[-240.0, 100.0, 100.0])), [0, 255, 0]);
        assert_eq!(to_24bit(&hsv_to_rgb(&[0.0, 0.0, 0.0])), [0, 0, 0]);
        assert_eq!(to_24bit(&hsv_to_rgb(&[0.0, 150.0, 150.0])), [255, 0, 0]);
    }

    #[test]
    fn test_hsv_half_degree() {
        let [h, _, _] = rgb_to_hsv(&from_24bit(0xf0, 0xd2, 0x00));
        assert!(52.49 < h && h < 52.5, "hue {} should be just below 52.5", h);
        assert_eq!(round_half_up(h), 52.0);
    }

    #[test]
    fn test_hsl() {
        let [h, s, l] = rgb_to_hsl(&from_24bit(0, 255, 0));
        assert_close_enough!(h, 120.0);
        assert_close_enough!(s, 100.0);
        assert_close_enough!(l, 50.0);

        let [h, s, l] = rgb_to_hsl(&from_24bit(255, 255, 255));
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert_close_enough!(l, 100.0);

        assert_eq!(to_24bit(&hsl_to_rgb(&[0.0, 100.0, 50.0])), [255, 0, 0]);
        assert_eq!(to_24bit(&hsl_to_rgb(&[240.0, 100.0, 25.0])), [0, 0, 128]);
        assert_eq!(to_24bit(&hsl_to_rgb(&[0.0, 0.0, 50.0])), [128, 128, 128]);
    }

    #[test]
    fn test_round_trip() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(51) {
                    let rgb = from_24bit(r, g, b);
                    assert_eq!(to_24bit(&hsv_to_rgb(&rgb_to_hsv(&rgb))), [r, g, b]);
                    assert_eq!(to_24bit(&hsl_to_rgb(&rgb_to_hsl(&rgb))), [r, g, b]);
                }
            }
        }
    }
}
