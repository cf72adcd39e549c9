mod contrast;
mod conversion;
mod equality;
mod string;

// contrast
pub(crate) use contrast::{
    to_apca_contrast, to_brightness, to_relative_luminance, to_wcag2_contrast,
};

// conversion
pub(crate) use conversion::{
    from_24bit, hsl_to_rgb, hsv_to_rgb, normalize_hue, rgb_to_hsl, rgb_to_hsv, round_half_up,
    to_24bit,
};

// equality
pub use equality::{close_enough, to_eq_bits};

// string
pub(crate) use string::{format, normalize, parse};
