use axum::{
    extract::{rejection::QueryRejection, Query},
    response::Json,
};
use cvd_sim::{contrast_ratio, evaluate, Pixel, WcagLevel};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::analyze::ContrastResultBody;
use crate::error::ApiError;

/// Query parameters for /contrast
#[derive(Debug, Deserialize, IntoParams)]
pub struct ContrastQuery {
    /// Text color as hex (`#RRGGBB`, `RRGGBB`, `#RGB`)
    pub foreground: String,
    /// Background color as hex
    pub background: String,
}

/// Verdict for one WCAG level
#[derive(Debug, Serialize, ToSchema)]
pub struct WcagLevelResult {
    /// e.g. "AA (normal text)"
    pub level: String,
    pub threshold: f64,
    pub passes: bool,
}

/// Response from /contrast
#[derive(Debug, Serialize, ToSchema)]
pub struct ContrastResponse {
    /// Parsed foreground as `#rrggbb`
    pub foreground: String,
    /// Parsed background as `#rrggbb`
    pub background: String,
    /// Same shape as `contrast_result` in /analyze
    pub contrast_result: ContrastResultBody,
    /// Verdicts for all four WCAG text levels
    pub levels: Vec<WcagLevelResult>,
}

fn parse_color(field: &'static str, value: &str) -> Result<Pixel, ApiError> {
    value.parse::<Pixel>().map_err(|e| ApiError::InvalidColor {
        field,
        message: e.to_string(),
    })
}

/// Contrast ratio between two colors
///
/// Compares a foreground and background color without uploading an image.
#[utoipa::path(
    get,
    path = "/contrast",
    params(ContrastQuery),
    responses(
        (status = 200, description = "Contrast computed", body = ContrastResponse),
        (status = 400, description = "Missing or invalid color"),
    ),
    tag = "Analysis"
)]
pub async fn handle_contrast(
    query: Result<Query<ContrastQuery>, QueryRejection>,
) -> Result<Json<ContrastResponse>, ApiError> {
    let Query(query) = query?;
    let foreground = parse_color("foreground", &query.foreground)?;
    let background = parse_color("background", &query.background)?;

    let result = evaluate(foreground, background);
    let ratio = contrast_ratio(foreground, background);

    tracing::debug!(
        foreground = %foreground.to_hex(),
        background = %background.to_hex(),
        contrast_ratio = result.contrast_ratio,
        "Contrast request"
    );

    let levels = WcagLevel::ALL
        .iter()
        .map(|&level| WcagLevelResult {
            level: level.label().to_string(),
            threshold: level.threshold(),
            passes: level.passes(ratio),
        })
        .collect();

    Ok(Json(ContrastResponse {
        foreground: foreground.to_hex(),
        background: background.to_hex(),
        contrast_result: result.into(),
        levels,
    }))
}
