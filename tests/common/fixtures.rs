//! Test fixtures: encoded images and multipart bodies.

use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Encode a solid-color image in the given format
pub fn solid_image(width: u32, height: u32, rgb: [u8; 3], format: ImageFormat) -> Vec<u8> {
    encode(&RgbImage::from_pixel(width, height, Rgb(rgb)), format)
}

/// PNG whose top half is `top` and bottom half is `bottom`
pub fn split_png(width: u32, height: u32, top: [u8; 3], bottom: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |_, y| {
        if y < height / 2 {
            Rgb(top)
        } else {
            Rgb(bottom)
        }
    });
    encode(&img, ImageFormat::Png)
}

pub fn encode(img: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format)
        .expect("Failed to encode fixture");
    buf.into_inner()
}

const BOUNDARY: &str = "----color-access-test-boundary";

/// Minimal multipart/form-data builder
#[derive(Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    /// Add a file field
    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

/// Form with an image upload and an optional vision type
pub fn analyze_form(image: &[u8], vision_type: Option<&str>) -> MultipartBody {
    let form = MultipartBody::new().file("file", "upload.png", "image/png", image);
    match vision_type {
        Some(v) => form.text("vision_type", v),
        None => form,
    }
}
