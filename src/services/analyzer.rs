use std::sync::Arc;
use std::time::Instant;

use cvd_sim::{evaluate, simulate, ContrastResult, RgbBuffer, VisionType};

use crate::error::{AnalyzeError, ApiError};
use crate::models::AppConfig;
use crate::rendering::{decode_upload, encode_png_base64};
use crate::services::report::AccessibilityReport;

/// Result of analyzing one upload
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Vision type label as requested (echoed back to the client)
    pub requested: String,
    /// Vision type actually applied
    pub vision: VisionType,
    /// Contrast between the two sample points of the original image
    pub contrast: ContrastResult,
    /// Simulated image, same shape as the upload
    pub simulated: RgbBuffer,
}

/// [`Analysis`] with the simulated image encoded for transport
#[derive(Debug, Clone)]
pub struct EncodedAnalysis {
    pub requested: String,
    pub vision: VisionType,
    pub contrast: ContrastResult,
    /// Base64-encoded PNG
    pub simulated_png_base64: String,
    /// Decode to encode, in milliseconds
    pub elapsed_ms: u64,
}

/// Sequences decode → simulate → sample → evaluate → encode.
///
/// Holds no mutable state; one instance is shared by all requests.
pub struct Analyzer {
    config: Arc<AppConfig>,
}

impl Analyzer {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The label to use when a request names no vision type
    pub fn default_vision_label(&self) -> &str {
        &self.config.default_vision_type
    }

    /// Analyze an already-decoded image.
    pub fn analyze_buffer(
        &self,
        image: &RgbBuffer,
        requested: &str,
    ) -> Result<Analysis, AnalyzeError> {
        let (p1, p2) = image.sample_pair().ok_or(AnalyzeError::EmptyImage)?;
        let vision = VisionType::parse_or_default(requested);

        if VisionType::from_name(requested).is_none() {
            tracing::debug!(requested, applied = %vision, "Unrecognized vision type, using default");
        }

        let simulated = simulate(image, vision);
        let contrast = evaluate(p1, p2);

        Ok(Analysis {
            requested: requested.to_string(),
            vision,
            contrast,
            simulated,
        })
    }

    /// Decode, analyze and encode an uploaded image file.
    pub fn analyze_upload(
        &self,
        bytes: &[u8],
        requested: &str,
    ) -> Result<EncodedAnalysis, AnalyzeError> {
        let started = Instant::now();
        let image = decode_upload(bytes)?;
        let analysis = self.analyze_buffer(&image, requested)?;
        let simulated_png_base64 = encode_png_base64(&analysis.simulated)?;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        tracing::info!(
            width = image.width(),
            height = image.height(),
            vision = %analysis.vision,
            contrast_ratio = analysis.contrast.contrast_ratio,
            passes_wcag = analysis.contrast.passes_wcag,
            elapsed_ms,
            "Image analyzed"
        );

        Ok(EncodedAnalysis {
            requested: analysis.requested,
            vision: analysis.vision,
            contrast: analysis.contrast,
            simulated_png_base64,
            elapsed_ms,
        })
    }

    /// Analyze an upload and collect everything the accessibility report shows,
    /// including the original image re-encoded as PNG.
    pub fn report_upload(
        &self,
        bytes: &[u8],
        requested: &str,
        image_name: Option<String>,
    ) -> Result<AccessibilityReport, AnalyzeError> {
        let started = Instant::now();
        let image = decode_upload(bytes)?;
        let analysis = self.analyze_buffer(&image, requested)?;
        let simulated_png_base64 = encode_png_base64(&analysis.simulated)?;
        let original_png_base64 = encode_png_base64(&image)?;
        let elapsed = started.elapsed();

        tracing::info!(
            width = image.width(),
            height = image.height(),
            vision = %analysis.vision,
            elapsed_ms = elapsed.as_millis() as u64,
            "Report prepared"
        );

        Ok(AccessibilityReport::new(
            &analysis,
            image_name,
            elapsed,
            original_png_base64,
            simulated_png_base64,
        ))
    }

    /// Run [`Analyzer::analyze_upload`] on the blocking thread pool
    pub async fn analyze_in_blocking_context(
        self: &Arc<Self>,
        bytes: Vec<u8>,
        requested: String,
    ) -> Result<EncodedAnalysis, ApiError> {
        self.run_blocking(move |analyzer| Ok(analyzer.analyze_upload(&bytes, &requested)?))
            .await
    }

    /// Build and render the HTML accessibility report on the blocking thread pool
    pub async fn report_in_blocking_context(
        self: &Arc<Self>,
        bytes: Vec<u8>,
        requested: String,
        image_name: Option<String>,
    ) -> Result<String, ApiError> {
        self.run_blocking(move |analyzer| {
            let report = analyzer.report_upload(&bytes, &requested, image_name)?;
            Ok(report.render_html()?)
        })
        .await
    }

    /// Run `f` on the blocking thread pool. Decoding, the per-pixel
    /// transform and PNG encoding are CPU-bound and must not run on the
    /// async executor.
    async fn run_blocking<T, F>(self: &Arc<Self>, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&Analyzer) -> Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let analyzer = self.clone();
        tokio::task::spawn_blocking(move || f(&analyzer))
            .await
            .map_err(|e| ApiError::Internal(format!("Analysis task failed: {e}")))?
    }
}
