pub mod config;

pub use config::{AppConfig, CorsConfig, UploadConfig};
