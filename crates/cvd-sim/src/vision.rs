//! Color-vision-deficiency types and their transform matrices
//!
//! Each [`VisionType`] maps to a fixed 3×3 matrix applied to normalized RGB.
//! The coefficients are empirically calibrated approximations and form a
//! compatibility contract: simulated output must match them exactly, so
//! they are kept here as `const` data and never derived at runtime.

use std::fmt;

/// A 3×3 row-major matrix. Row `i` produces output channel `i`.
pub type Matrix3 = [[f64; 3]; 3];

/// Red-cone loss.
pub const PROTANOPIA: Matrix3 = [
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
];

/// Green-cone loss.
pub const DEUTERANOPIA: Matrix3 = [
    [0.625, 0.375, 0.0],
    [0.7, 0.3, 0.0],
    [0.0, 0.3, 0.7],
];

/// Blue-cone loss.
pub const TRITANOPIA: Matrix3 = [
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
];

/// Full desaturation. All rows are identical, so every output pixel is a
/// gray level replicated across the three channels.
pub const ACHROMATOPSIA: Matrix3 = [
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
];

/// The supported color-vision-deficiency simulations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisionType {
    /// Red-blind (default for unrecognized input)
    #[default]
    Protanopia,
    /// Green-blind
    Deuteranopia,
    /// Blue-yellow
    Tritanopia,
    /// No color
    Achromatopsia,
}

impl VisionType {
    /// All variants, in display order.
    pub const ALL: [VisionType; 4] = [
        VisionType::Protanopia,
        VisionType::Deuteranopia,
        VisionType::Tritanopia,
        VisionType::Achromatopsia,
    ];

    /// Resolve a wire name to a vision type.
    ///
    /// This never fails: names other than the four lowercase keys
    /// (`protanopia`, `deuteranopia`, `tritanopia`, `achromatopsia`)
    /// resolve to [`VisionType::Protanopia`].
    ///
    /// ```
    /// use cvd_sim::VisionType;
    ///
    /// assert_eq!(VisionType::parse_or_default("tritanopia"), VisionType::Tritanopia);
    /// assert_eq!(VisionType::parse_or_default("sepia"), VisionType::Protanopia);
    /// ```
    pub fn parse_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    /// Exact lookup by wire name, `None` if unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }

    /// Wire name, as accepted by [`VisionType::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            VisionType::Protanopia => "protanopia",
            VisionType::Deuteranopia => "deuteranopia",
            VisionType::Tritanopia => "tritanopia",
            VisionType::Achromatopsia => "achromatopsia",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            VisionType::Protanopia => "Protanopia (Red-Blind)",
            VisionType::Deuteranopia => "Deuteranopia (Green-Blind)",
            VisionType::Tritanopia => "Tritanopia (Blue-Yellow)",
            VisionType::Achromatopsia => "Achromatopsia (No Color)",
        }
    }

    /// The transform matrix for this vision type.
    #[inline]
    pub fn matrix(self) -> &'static Matrix3 {
        match self {
            VisionType::Protanopia => &PROTANOPIA,
            VisionType::Deuteranopia => &DEUTERANOPIA,
            VisionType::Tritanopia => &TRITANOPIA,
            VisionType::Achromatopsia => &ACHROMATOPSIA,
        }
    }
}

impl fmt::Display for VisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
