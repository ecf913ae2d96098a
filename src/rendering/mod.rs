//! Image codecs at the transport boundary.
//!
//! Uploads are decoded into [`cvd_sim::RgbBuffer`]s and simulated buffers
//! are encoded as PNG. The core never sees encoded bytes.

pub mod decode;
pub mod encode;

pub use self::decode::decode_upload;
pub use self::encode::{encode_png, encode_png_base64};
