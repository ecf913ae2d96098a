//! Downloadable accessibility report.
//!
//! Collects what an analysis found (vision type, image name, timing, the two
//! sampled pixels, contrast verdicts and both images) and renders it as a
//! self-contained HTML page with Tera.

use std::time::Duration;

use cvd_sim::{contrast_ratio, WcagLevel};
use serde::Serialize;
use tera::{Context, Tera};

use super::analyzer::Analysis;

const REPORT_TEMPLATE: &str = include_str!("../../templates/report.html");

/// Error type for report rendering
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),
}

/// One WCAG level verdict as shown in the report
#[derive(Debug, Clone, Serialize)]
pub struct ReportLevel {
    pub label: &'static str,
    pub threshold: f64,
    pub passes: bool,
}

/// Everything shown in the report, pre-formatted for display
#[derive(Debug, Clone, Serialize)]
pub struct AccessibilityReport {
    /// Vision type as requested
    pub vision_type: String,
    /// Display label of the simulation actually applied
    pub vision_label: &'static str,
    pub image_name: Option<String>,
    /// Seconds, two decimals
    pub analysis_time: String,
    pub pixel_1: [u8; 3],
    pub pixel_2: [u8; 3],
    pub pixel_1_hex: String,
    pub pixel_2_hex: String,
    /// Two decimals
    pub contrast_ratio: String,
    pub passes_wcag: bool,
    pub levels: Vec<ReportLevel>,
    pub original_png_base64: String,
    pub simulated_png_base64: String,
}

impl AccessibilityReport {
    pub fn new(
        analysis: &Analysis,
        image_name: Option<String>,
        elapsed: Duration,
        original_png_base64: String,
        simulated_png_base64: String,
    ) -> Self {
        let c = &analysis.contrast;
        let ratio = contrast_ratio(c.pixel_1, c.pixel_2);
        let levels = WcagLevel::ALL
            .iter()
            .map(|&level| ReportLevel {
                label: level.label(),
                threshold: level.threshold(),
                passes: level.passes(ratio),
            })
            .collect();

        Self {
            vision_type: analysis.requested.clone(),
            vision_label: analysis.vision.label(),
            image_name,
            analysis_time: format!("{:.2}", elapsed.as_secs_f64()),
            pixel_1: c.pixel_1.to_bytes(),
            pixel_2: c.pixel_2.to_bytes(),
            pixel_1_hex: c.pixel_1.to_hex(),
            pixel_2_hex: c.pixel_2.to_hex(),
            contrast_ratio: format!("{:.2}", c.contrast_ratio),
            passes_wcag: c.passes_wcag,
            levels,
            original_png_base64,
            simulated_png_base64,
        }
    }

    /// Render as a standalone HTML page.
    ///
    /// The template name ends in `.html`, so Tera escapes every
    /// interpolated value except those marked `safe`.
    pub fn render_html(&self) -> Result<String, ReportError> {
        let mut tera = Tera::default();
        tera.add_raw_template("report.html", REPORT_TEMPLATE)?;

        let context = Context::from_serialize(self)?;
        Ok(tera.render("report.html", &context)?)
    }
}
