//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

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

/// Assert JSON error response has expected status field
pub fn assert_json_error(response: &TestResponse, expected_status: u16) {
    assert_status(response, StatusCode::from_u16(expected_status).unwrap());
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected_status as u64),
        "Expected JSON status {}, got: {}",
        expected_status,
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(
        json["error"].as_str().map_or(false, |s| !s.is_empty()),
        "Error responses must carry a message"
    );
}

/// Assert the response is a valid conversion result and return the
/// rendered HTML document
pub fn assert_ascii_document(response: &TestResponse) -> String {
    assert_ok(response);
    let json: serde_json::Value = response.json();
    let ascii = json["ascii"]
        .as_str()
        .expect("Response must have an `ascii` string field")
        .to_string();
    assert!(ascii.starts_with("<pre>"), "Document must open with <pre>");
    assert!(ascii.ends_with("</pre>"), "Document must close with </pre>");
    ascii
}
