use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Json,
};
use cvd_sim::ContrastResult;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::{Analyzer, EncodedAnalysis};

/// Multipart form accepted by /analyze
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct AnalyzeForm {
    /// Image file (PNG, JPEG, GIF, BMP, WebP or TIFF)
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// One of protanopia, deuteranopia, tritanopia, achromatopsia.
    /// Unrecognized values are simulated as protanopia.
    pub vision_type: Option<String>,
}

/// Contrast between the two sampled pixels
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContrastResultBody {
    /// RGB at (h/4, w/4)
    #[schema(value_type = Vec<u8>, example = json!([0, 0, 0]))]
    pub pixel_1: [u8; 3],
    /// RGB at (3h/4, 3w/4)
    #[schema(value_type = Vec<u8>, example = json!([255, 255, 255]))]
    pub pixel_2: [u8; 3],
    /// WCAG contrast ratio, two decimals
    #[schema(example = 21.0)]
    pub contrast_ratio: f64,
    /// True if the ratio is at least 4.5:1 (WCAG AA, normal text)
    pub passes_wcag: bool,
}

impl From<ContrastResult> for ContrastResultBody {
    fn from(result: ContrastResult) -> Self {
        Self {
            pixel_1: result.pixel_1.to_bytes(),
            pixel_2: result.pixel_2.to_bytes(),
            contrast_ratio: result.contrast_ratio,
            passes_wcag: result.passes_wcag,
        }
    }
}

/// Response from /analyze
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Status message
    pub message: String,
    /// Vision type as requested
    pub simulation: String,
    /// Contrast check on the original image
    pub contrast_result: ContrastResultBody,
    /// Simulated image as base64-encoded PNG
    pub simulated_image: String,
    /// Server-side processing time in milliseconds
    #[schema(example = 42)]
    pub analysis_time_ms: u64,
    /// File name of the upload, when the client sent one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
}

impl AnalyzeResponse {
    fn new(analysis: EncodedAnalysis, image_name: Option<String>) -> Self {
        Self {
            message: "Image processed successfully.".to_string(),
            simulation: analysis.requested,
            contrast_result: analysis.contrast.into(),
            simulated_image: analysis.simulated_png_base64,
            analysis_time_ms: analysis.elapsed_ms,
            image_name,
        }
    }
}

/// Fields read from an /analyze or /report form
#[derive(Debug)]
pub(crate) struct UploadForm {
    pub file: Vec<u8>,
    pub file_name: Option<String>,
    pub vision_type: String,
}

/// Read the `file` and `vision_type` fields. A missing `vision_type`
/// resolves to the configured default.
pub(crate) async fn read_upload_form(
    analyzer: &Analyzer,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<UploadForm, ApiError> {
    let mut multipart = multipart?;
    let mut file: Option<(Vec<u8>, Option<String>)> = None;
    let mut vision_type: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let file_name = field
                    .file_name()
                    .filter(|n| !n.is_empty())
                    .map(str::to_owned);
                let data = field.bytes().await?;
                tracing::debug!(
                    file_name = file_name.as_deref().unwrap_or(""),
                    bytes = data.len(),
                    "Received upload"
                );
                file = Some((data.to_vec(), file_name));
            }
            Some("vision_type") => {
                vision_type = Some(field.text().await?);
            }
            other => {
                tracing::trace!(field = ?other, "Ignoring unknown form field");
            }
        }
    }

    let (file, file_name) = file.ok_or(ApiError::MissingField("file"))?;
    let vision_type = analyzer.config().requested_or_default(vision_type);

    Ok(UploadForm {
        file,
        file_name,
        vision_type,
    })
}

/// Simulate a color-vision deficiency and check contrast
///
/// Applies the selected simulation to the uploaded image and measures the
/// WCAG contrast ratio between the pixels at (h/4, w/4) and (3h/4, 3w/4)
/// of the original image.
#[utoipa::path(
    post,
    path = "/analyze",
    request_body(content = AnalyzeForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image analyzed", body = AnalyzeResponse),
        (status = 400, description = "Missing file field or malformed form"),
        (status = 413, description = "Upload exceeds the configured size limit"),
        (status = 422, description = "Upload is not a decodable image"),
    ),
    tag = "Analysis"
)]
pub async fn handle_analyze(
    State(analyzer): State<Arc<Analyzer>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let form = read_upload_form(&analyzer, multipart).await?;

    tracing::info!(
        bytes = form.file.len(),
        vision_type = %form.vision_type,
        "Analyze request received"
    );

    let analysis = analyzer
        .analyze_in_blocking_context(form.file, form.vision_type)
        .await?;

    Ok(Json(AnalyzeResponse::new(analysis, form.file_name)))
}
