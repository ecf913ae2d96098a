use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::analyze::{read_upload_form, AnalyzeForm};
use crate::error::ApiError;
use crate::services::Analyzer;

const REPORT_FILE_NAME: &str = "accessibility_report.html";

/// Download an accessibility report
///
/// Runs the same analysis as /analyze and returns a standalone HTML report
/// with the vision type, image name, analysis time, sampled pixels, contrast
/// verdicts and both the original and simulated images.
#[utoipa::path(
    post,
    path = "/report",
    request_body(content = AnalyzeForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "HTML report", content_type = "text/html"),
        (status = 400, description = "Missing file field or malformed form"),
        (status = 413, description = "Upload exceeds the configured size limit"),
        (status = 422, description = "Upload is not a decodable image"),
    ),
    tag = "Analysis"
)]
pub async fn handle_report(
    State(analyzer): State<Arc<Analyzer>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let form = read_upload_form(&analyzer, multipart).await?;

    tracing::info!(
        bytes = form.file.len(),
        vision_type = %form.vision_type,
        "Report request received"
    );

    let html = analyzer
        .report_in_blocking_context(form.file, form.vision_type, form.file_name)
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        html,
    )
        .into_response())
}
