use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::assets::AssetLoader;

/// Serve the embedded upload page
pub async fn handle_index() -> Response {
    match AssetLoader::read_static("index.html") {
        Some(data) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            data.into_owned(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}
