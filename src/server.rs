//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit},
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::{AppConfig, CorsConfig};
use crate::services::Analyzer;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub analyzer: Arc<Analyzer>,
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: &AssetLoader) -> AppState {
    let config = Arc::new(AppConfig::load_from_assets(asset_loader));
    create_app_state_with_config(config)
}

/// Create application state from an already-loaded config.
pub fn create_app_state_with_config(config: Arc<AppConfig>) -> AppState {
    let analyzer = Arc::new(Analyzer::new(config.clone()));
    AppState { config, analyzer }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.upload.max_bytes;
    let cors = cors_layer(&state.config.cors);

    Router::new()
        .route("/", get(api::handle_index))
        .route("/analyze", post(handle_analyze))
        .route("/report", post(handle_report))
        .route("/contrast", get(api::handle_contrast))
        .route("/vision-types", get(handle_vision_types))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Build the CORS layer. An empty origin list allows any origin.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if config.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(origin = %origin, %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_analyze(
    axum::extract::State(state): axum::extract::State<AppState>,
    multipart: Result<axum::extract::Multipart, MultipartRejection>,
) -> Result<axum::response::Json<api::AnalyzeResponse>, ApiError> {
    api::handle_analyze(axum::extract::State(state.analyzer), multipart).await
}

async fn handle_report(
    axum::extract::State(state): axum::extract::State<AppState>,
    multipart: Result<axum::extract::Multipart, MultipartRejection>,
) -> Result<axum::response::Response, ApiError> {
    api::handle_report(axum::extract::State(state.analyzer), multipart).await
}

async fn handle_vision_types(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> axum::response::Json<api::VisionTypesResponse> {
    api::handle_vision_types(axum::extract::State(state.analyzer)).await
}
