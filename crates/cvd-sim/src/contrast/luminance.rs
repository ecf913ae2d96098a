//! WCAG 2.x relative luminance

use super::lut::channel_to_linear;
use crate::pixel::Pixel;

/// Channel weights (Rec. 709 primaries).
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Linearization knee from the WCAG 2.x definition.
pub const LINEAR_KNEE: f64 = 0.03928;

/// Linearize a normalized channel value `c` in 0.0..=1.0.
#[inline]
pub fn linearize(c: f64) -> f64 {
    if c <= LINEAR_KNEE {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of an 8-bit pixel, in 0.0..=1.0.
///
/// ```
/// use cvd_sim::{relative_luminance, Pixel};
///
/// assert_eq!(relative_luminance(Pixel::BLACK), 0.0);
/// assert!((relative_luminance(Pixel::WHITE) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn relative_luminance(px: Pixel) -> f64 {
    LUMA_WEIGHTS[0] * channel_to_linear(px.r())
        + LUMA_WEIGHTS[1] * channel_to_linear(px.g())
        + LUMA_WEIGHTS[2] * channel_to_linear(px.b())
}

/// Relative luminance for channel values given as floats in 0.0..=255.0.
///
/// Agrees with [`relative_luminance`] on integer inputs.
pub fn relative_luminance_f64(rgb: [f64; 3]) -> f64 {
    LUMA_WEIGHTS[0] * linearize(rgb[0] / 255.0)
        + LUMA_WEIGHTS[1] * linearize(rgb[1] / 255.0)
        + LUMA_WEIGHTS[2] * linearize(rgb[2] / 255.0)
}
