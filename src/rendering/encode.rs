use base64::Engine;
use cvd_sim::RgbBuffer;
use std::io::Cursor;

use crate::error::AnalyzeError;

/// Encode an RGB buffer as an 8-bit truecolor PNG.
pub fn encode_png(buffer: &RgbBuffer) -> Result<Vec<u8>, AnalyzeError> {
    let width = u32::try_from(buffer.width())
        .map_err(|_| AnalyzeError::PngEncode("width exceeds u32".to_string()))?;
    let height = u32::try_from(buffer.height())
        .map_err(|_| AnalyzeError::PngEncode("height exceeds u32".to_string()))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| AnalyzeError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(buffer.as_bytes())
            .map_err(|e| AnalyzeError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode as PNG, then as standard (padded) base64 text.
pub fn encode_png_base64(buffer: &RgbBuffer) -> Result<String, AnalyzeError> {
    let png_bytes = encode_png(buffer)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(png_bytes))
}
