//! Color Accessibility Analyzer
//!
//! HTTP service that simulates color-vision deficiencies on uploaded images
//! and checks WCAG contrast between sampled pixels. The algorithms live in
//! the `cvd-sim` crate; this crate is the transport around them.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
