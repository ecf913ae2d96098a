use axum::{
    extract::{multipart::MultipartRejection, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::ReportError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid multipart request: {0}")]
    Multipart(String),

    #[error("Upload too large")]
    PayloadTooLarge,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid color for {field}: {message}")]
    InvalidColor {
        field: &'static str,
        message: String,
    },

    #[error("Analysis error: {0}")]
    Analyze(#[from] AnalyzeError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(e: axum::extract::multipart::MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::Multipart(e.body_text())
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(e: MultipartRejection) -> Self {
        ApiError::Multipart(e.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::InvalidQuery(e.body_text())
    }
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Could not decode image: {0}")]
    Decode(String),

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

impl AnalyzeError {
    /// True for errors caused by the uploaded content rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, AnalyzeError::Decode(_) | AnalyzeError::EmptyImage)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidColor { .. } => StatusCode::BAD_REQUEST,
            ApiError::Analyze(e) if e.is_client_error() => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Analyze(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Report(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_missing_field() {
        let error = ApiError::MissingField("file");
        assert_eq!(error.to_string(), "Missing required field: file");
    }

    #[test]
    fn test_api_error_invalid_color() {
        let error = ApiError::InvalidColor {
            field: "foreground",
            message: "invalid hex color length (expected 3 or 6 characters)".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid color for foreground: invalid hex color length (expected 3 or 6 characters)"
        );
    }

    #[test]
    fn test_analyze_error_messages() {
        assert_eq!(AnalyzeError::EmptyImage.to_string(), "Image has no pixels");
        assert_eq!(
            AnalyzeError::Decode("bad magic".to_string()).to_string(),
            "Could not decode image: bad magic"
        );
        assert_eq!(
            AnalyzeError::PngEncode("oops".to_string()).to_string(),
            "PNG encode error: oops"
        );
    }

    #[test]
    fn test_api_error_from_analyze_error() {
        let api_error: ApiError = AnalyzeError::EmptyImage.into();
        match api_error {
            ApiError::Analyze(AnalyzeError::EmptyImage) => {}
            _ => panic!("Expected Analyze variant"),
        }
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        let response = ApiError::MissingField("file").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Multipart("boundary".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::InvalidQuery("missing field".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::PayloadTooLarge.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let response = ApiError::Analyze(AnalyzeError::Decode("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = ApiError::Analyze(AnalyzeError::EmptyImage).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response =
            ApiError::Analyze(AnalyzeError::PngEncode("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::Internal("join".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
