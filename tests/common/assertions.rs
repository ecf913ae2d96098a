//! Assertion helpers for tests.

use axum::http::StatusCode;
use base64::Engine;
use cvd_sim::RgbBuffer;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert an error response carrying the JSON `{status, error}` body
pub fn assert_json_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"].as_u64(), Some(expected.as_u16() as u64));
    assert!(json["error"].is_string(), "Expected error message: {json}");
}

/// Assert a well-formed /analyze response and return the decoded simulated image
pub fn assert_valid_analyze_response(response: &TestResponse) -> RgbBuffer {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    assert_eq!(json["message"], "Image processed successfully.");
    assert!(json["simulation"].is_string(), "Expected simulation label");
    assert!(
        json["analysis_time_ms"].is_u64(),
        "Expected analysis_time_ms, got {}",
        json["analysis_time_ms"]
    );

    let contrast = &json["contrast_result"];
    assert_eq!(contrast["pixel_1"].as_array().map(Vec::len), Some(3));
    assert_eq!(contrast["pixel_2"].as_array().map(Vec::len), Some(3));
    assert!(contrast["contrast_ratio"].is_number());
    assert!(
        contrast["passes_wcag"].is_boolean(),
        "passes_wcag should be a JSON boolean, got {}",
        contrast["passes_wcag"]
    );

    let encoded = json["simulated_image"]
        .as_str()
        .expect("Expected simulated_image string");
    let png = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .expect("simulated_image should be standard base64");
    assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n", "Expected PNG signature");

    color_access::rendering::decode_upload(&png).expect("simulated image should decode")
}
