//! WCAG contrast evaluation
//!
//! Contrast ratio between two colors is
//!
//! ```text
//! (L_lighter + 0.05) / (L_darker + 0.05)
//! ```
//!
//! where `L` is the relative luminance from [`relative_luminance`]. The ratio
//! ranges from 1.0 (identical luminance) to 21.0 (black on white).
//!
//! # Example
//!
//! ```
//! use cvd_sim::{evaluate, Pixel};
//!
//! let result = evaluate(Pixel::BLACK, Pixel::WHITE);
//! assert_eq!(result.contrast_ratio, 21.0);
//! assert!(result.passes_wcag);
//! ```

mod lut;
mod luminance;

pub use luminance::{linearize, relative_luminance, relative_luminance_f64, LUMA_WEIGHTS};

use crate::pixel::Pixel;

/// Minimum ratio for WCAG AA, normal-size text.
pub const WCAG_AA_THRESHOLD: f64 = 4.5;

/// WCAG conformance targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WcagLevel {
    /// AA, normal text (4.5:1)
    AaNormal,
    /// AA, large text (3:1)
    AaLarge,
    /// AAA, normal text (7:1)
    AaaNormal,
    /// AAA, large text (4.5:1)
    AaaLarge,
}

impl WcagLevel {
    pub const ALL: [WcagLevel; 4] = [
        WcagLevel::AaNormal,
        WcagLevel::AaLarge,
        WcagLevel::AaaNormal,
        WcagLevel::AaaLarge,
    ];

    /// Minimum contrast ratio for this level.
    pub fn threshold(self) -> f64 {
        match self {
            WcagLevel::AaNormal => WCAG_AA_THRESHOLD,
            WcagLevel::AaLarge => 3.0,
            WcagLevel::AaaNormal => 7.0,
            WcagLevel::AaaLarge => 4.5,
        }
    }

    /// True if `ratio` meets this level. Thresholds are inclusive.
    #[inline]
    pub fn passes(self, ratio: f64) -> bool {
        ratio >= self.threshold()
    }

    pub fn label(self) -> &'static str {
        match self {
            WcagLevel::AaNormal => "AA (normal text)",
            WcagLevel::AaLarge => "AA (large text)",
            WcagLevel::AaaNormal => "AAA (normal text)",
            WcagLevel::AaaLarge => "AAA (large text)",
        }
    }
}

/// Outcome of comparing two pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastResult {
    pub pixel_1: Pixel,
    pub pixel_2: Pixel,
    /// Contrast ratio rounded to two decimals
    pub contrast_ratio: f64,
    /// Whether the unrounded ratio meets [`WCAG_AA_THRESHOLD`]
    pub passes_wcag: bool,
}

/// Unrounded contrast ratio between two pixels. Symmetric, always >= 1.0.
pub fn contrast_ratio(p1: Pixel, p2: Pixel) -> f64 {
    ratio_from_luminance(relative_luminance(p1), relative_luminance(p2))
}

/// Contrast ratio from two relative luminance values.
#[inline]
pub fn ratio_from_luminance(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Compare two pixels against the WCAG AA normal-text threshold.
pub fn evaluate(p1: Pixel, p2: Pixel) -> ContrastResult {
    let ratio = contrast_ratio(p1, p2);
    ContrastResult {
        pixel_1: p1,
        pixel_2: p2,
        contrast_ratio: round_to_hundredths(ratio),
        passes_wcag: WcagLevel::AaNormal.passes(ratio),
    }
}

/// Round half away from zero to two decimal places.
#[inline]
pub fn round_to_hundredths(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
