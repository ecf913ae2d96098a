//! Color-vision-deficiency simulation
//!
//! Applies a [`VisionType`] matrix to every pixel of an [`RgbBuffer`]:
//!
//! ```text
//! u8 sample --(/255, f32)--> [0,1] --(3x3 matrix, f64)--> clip [0,1] --(*255, truncate)--> u8
//! ```
//!
//! Normalization happens in single precision and the product in double
//! precision. Output is truncated rather than rounded. Both choices are part
//! of the output contract; changing either shifts many pixel values by one.

use crate::buffer::{RgbBuffer, CHANNELS};
use crate::vision::{Matrix3, VisionType};

/// Simulate how `image` appears under `vision`.
///
/// Returns a new buffer of identical shape; the input is not modified.
///
/// ```
/// use cvd_sim::{simulate, Pixel, RgbBuffer, VisionType};
///
/// let red = RgbBuffer::filled(2, 2, Pixel::new(255, 0, 0));
/// let seen = simulate(&red, VisionType::Protanopia);
/// assert_eq!(seen.pixel(0, 0), Pixel::new(144, 142, 0));
/// ```
pub fn simulate(image: &RgbBuffer, vision: VisionType) -> RgbBuffer {
    let matrix = vision.matrix();
    let (height, width) = (image.height(), image.width());
    let mut out = image.clone();
    let samples = out.as_bytes_mut();

    for y in 0..height {
        for x in 0..width {
            let i = (y * width + x) * CHANNELS;
            let rgb = [
                normalize(samples[i]),
                normalize(samples[i + 1]),
                normalize(samples[i + 2]),
            ];
            let transformed = apply_matrix(matrix, rgb);
            for (sample, v) in samples[i..i + CHANNELS].iter_mut().zip(transformed) {
                *sample = quantize(v);
            }
        }
    }

    out
}

/// Simulate using a vision type given by name.
///
/// Unrecognized names fall back to protanopia; see
/// [`VisionType::parse_or_default`].
pub fn simulate_named(image: &RgbBuffer, vision: &str) -> RgbBuffer {
    simulate(image, VisionType::parse_or_default(vision))
}

#[inline]
fn normalize(v: u8) -> f64 {
    (v as f32 / 255.0) as f64
}

/// Matrix-vector product `m · rgb`.
#[inline]
pub fn apply_matrix(m: &Matrix3, rgb: [f64; 3]) -> [f64; 3] {
    let mut out = [0.0; 3];
    for (row, o) in m.iter().zip(out.iter_mut()) {
        *o = row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2];
    }
    out
}

/// Clip to [0,1], rescale to [0,255] and truncate.
#[inline]
fn quantize(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}
