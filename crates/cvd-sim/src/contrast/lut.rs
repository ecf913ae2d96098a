//! Channel linearization lookup table
//!
//! The table is generated at compile time by build.rs from the exact WCAG
//! formula, one `f64` entry per 8-bit channel value.

include!(concat!(env!("OUT_DIR"), "/luminance_lut.rs"));

/// Linearize an 8-bit channel value.
#[inline]
pub fn channel_to_linear(v: u8) -> f64 {
    CHANNEL_TO_LINEAR[v as usize]
}
