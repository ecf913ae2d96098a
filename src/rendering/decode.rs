use cvd_sim::RgbBuffer;

use crate::error::AnalyzeError;

/// Decode an uploaded image file into an RGB buffer.
///
/// Any format the `image` crate was built with is accepted (PNG, JPEG,
/// GIF, BMP, WebP, TIFF). Alpha is discarded and grayscale or palette images
/// are expanded to three channels, so the result is always RGB.
pub fn decode_upload(bytes: &[u8]) -> Result<RgbBuffer, AnalyzeError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| AnalyzeError::Decode(e.to_string()))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    if width == 0 || height == 0 {
        return Err(AnalyzeError::EmptyImage);
    }

    tracing::debug!(width, height, "Decoded upload");

    RgbBuffer::new(width, height, rgb.into_raw()).map_err(|e| AnalyzeError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvd_sim::Pixel;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode(img: &RgbaImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_png_drops_alpha() {
        let img = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 7]));
        let buffer = decode_upload(&encode(&img, ImageFormat::Png)).unwrap();
        assert_eq!(buffer.shape(), (2, 3, 3));
        assert!(buffer.pixels().all(|p| p == Pixel::new(10, 20, 30)));
    }

    #[test]
    fn test_decode_bmp() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 255]));
        let buffer = decode_upload(&encode(&img, ImageFormat::Bmp)).unwrap();
        assert_eq!(buffer.pixel(2, 2), Pixel::new(200, 100, 50));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_upload(b"definitely not an image").unwrap_err();
        assert!(matches!(err, AnalyzeError::Decode(_)));
    }

    #[test]
    fn test_decode_empty_input_fails() {
        assert!(decode_upload(&[]).is_err());
    }
}
