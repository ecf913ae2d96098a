use axum::{extract::State, response::Json};
use cvd_sim::VisionType;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::services::Analyzer;

/// One supported simulation
#[derive(Debug, Serialize, ToSchema)]
pub struct VisionTypeInfo {
    /// Value to send as `vision_type`
    #[schema(example = "protanopia")]
    pub name: String,
    /// Display label
    #[schema(example = "Protanopia (Red-Blind)")]
    pub label: String,
    /// Row-major 3x3 transform applied to normalized RGB
    #[schema(value_type = Vec<Vec<f64>>)]
    pub matrix: [[f64; 3]; 3],
}

/// Response from /vision-types
#[derive(Debug, Serialize, ToSchema)]
pub struct VisionTypesResponse {
    /// Vision type used when a request names none
    pub default: String,
    pub vision_types: Vec<VisionTypeInfo>,
}

/// List supported vision types
#[utoipa::path(
    get,
    path = "/vision-types",
    responses(
        (status = 200, description = "Supported vision types", body = VisionTypesResponse),
    ),
    tag = "Analysis"
)]
pub async fn handle_vision_types(
    State(analyzer): State<Arc<Analyzer>>,
) -> Json<VisionTypesResponse> {
    let vision_types = VisionType::ALL
        .iter()
        .map(|&v| VisionTypeInfo {
            name: v.name().to_string(),
            label: v.label().to_string(),
            matrix: *v.matrix(),
        })
        .collect();

    Json(VisionTypesResponse {
        default: analyzer.default_vision_label().to_string(),
        vision_types,
    })
}
