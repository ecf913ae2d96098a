//! cvd-sim: color-vision-deficiency simulation and WCAG contrast checks
//!
//! Two independent, pure components:
//!
//! - [`simulate`] applies a fixed 3×3 linear transform to every pixel of an
//!   [`RgbBuffer`] to approximate how it appears to a viewer with a given
//!   [`VisionType`].
//! - [`evaluate`] computes the WCAG 2.x relative luminance of two pixels and
//!   the contrast ratio between them, classified against the 4.5:1 AA
//!   threshold for normal text.
//!
//! Neither component allocates shared state or performs I/O; both are safe
//! to call from any number of threads. The only process-wide data is the
//! `const` matrix table in [`vision`] and the build-time luminance table.
//!
//! # Quick Start
//!
//! ```
//! use cvd_sim::{evaluate, simulate_named, Pixel, RgbBuffer};
//!
//! let image = RgbBuffer::filled(4, 4, Pixel::new(128, 128, 128));
//! let seen = simulate_named(&image, "deuteranopia");
//! assert_eq!(seen.shape(), image.shape());
//!
//! let (p1, p2) = image.sample_pair().unwrap();
//! let result = evaluate(p1, p2);
//! assert_eq!(result.contrast_ratio, 1.0);
//! assert!(!result.passes_wcag);
//! ```
//!
//! # Vision types
//!
//! | Type | Models |
//! |------|--------|
//! | protanopia | red-cone loss (default) |
//! | deuteranopia | green-cone loss |
//! | tritanopia | blue-cone loss |
//! | achromatopsia | no color, output is gray |
//!
//! Unrecognized names never fail; they resolve to protanopia.

pub mod buffer;
pub mod contrast;
pub mod pixel;
pub mod simulate;
pub mod vision;


pub use buffer::{BufferError, RgbBuffer};
pub use contrast::{
    contrast_ratio, evaluate, relative_luminance, ContrastResult, WcagLevel, WCAG_AA_THRESHOLD,
};
pub use pixel::{ParseColorError, Pixel};
pub use simulate::{simulate, simulate_named};
pub use vision::{Matrix3, VisionType};
