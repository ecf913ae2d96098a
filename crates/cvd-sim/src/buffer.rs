//! RGB image buffer
//!
//! A dense, row-major buffer of 8-bit RGB samples with shape
//! (height, width, 3). This is the only image representation the core
//! understands; decoding and encoding image files is left to the caller.

use std::fmt;

use crate::pixel::Pixel;

/// Number of channels per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// Error returned when raw samples do not match the declared dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Sample count differs from `width * height * 3`
    LengthMismatch {
        /// Number of samples required by the dimensions
        expected: usize,
        /// Number of samples provided
        actual: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer length mismatch: expected {} samples, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for BufferError {}

/// An RGB image stored as interleaved `u8` samples.
///
/// Sample `(y, x, c)` lives at index `(y * width + x) * 3 + c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbBuffer {
    /// Wrap raw interleaved RGB samples.
    ///
    /// # Errors
    /// Returns [`BufferError::LengthMismatch`] if `data.len()` is not
    /// `width * height * 3`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, BufferError> {
        let expected = width * height * CHANNELS;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer where every pixel has the same color.
    ///
    /// # Example
    /// ```
    /// use cvd_sim::{Pixel, RgbBuffer};
    ///
    /// let gray = RgbBuffer::filled(4, 4, Pixel::new(128, 128, 128));
    /// assert_eq!(gray.pixel(3, 3), Pixel::new(128, 128, 128));
    /// ```
    pub fn filled(width: usize, height: usize, color: Pixel) -> Self {
        let data = color
            .to_bytes()
            .iter()
            .copied()
            .cycle()
            .take(width * height * CHANNELS)
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Shape as `(height, width, channels)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, CHANNELS)
    }

    /// True if the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw interleaved samples.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw samples. The shape cannot change.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Read the pixel at row `y`, column `x`.
    ///
    /// # Panics
    /// Panics if `(y, x)` is outside the image.
    #[inline]
    pub fn pixel(&self, y: usize, x: usize) -> Pixel {
        assert!(
            y < self.height && x < self.width,
            "pixel ({y}, {x}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        let i = (y * self.width + x) * CHANNELS;
        Pixel::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Iterate over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| Pixel::new(px[0], px[1], px[2]))
    }

    /// The two contrast sample points, `(h/4, w/4)` and `(3h/4, 3w/4)`,
    /// as `(row, column)` pairs using integer division.
    ///
    /// Returns `None` for an empty image.
    pub fn sample_points(&self) -> Option<((usize, usize), (usize, usize))> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let (h, w) = (self.height, self.width);
        Some(((h / 4, w / 4), (3 * h / 4, 3 * w / 4)))
    }

    /// Read the two contrast sample pixels, see [`RgbBuffer::sample_points`].
    pub fn sample_pair(&self) -> Option<(Pixel, Pixel)> {
        let ((y1, x1), (y2, x2)) = self.sample_points()?;
        Some((self.pixel(y1, x1), self.pixel(y2, x2)))
    }
}
