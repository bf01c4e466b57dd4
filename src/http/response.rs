//! Response construction.
//!
//! # Responsibilities
//! - Build JSON responses with the CORS allow-origin header attached
//! - Build the CORS preflight response
//!
//! # Design Decisions
//! - Every JSON response carries `Content-Type: application/json` and
//!   `Access-Control-Allow-Origin: *`
//! - The preflight response has an empty body and advertises exactly the
//!   methods and headers browsers may send

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::Response;
use serde_json::Value;

/// `Access-Control-Allow-Origin` value sent on every response.
pub const ALLOW_ORIGIN: &str = "*";

/// Methods advertised to CORS preflight requests.
pub const ALLOW_METHODS: &str = "POST, OPTIONS";

/// Headers advertised to CORS preflight requests.
pub const ALLOW_HEADERS: &str = "Content-Type, X-User-Id";

/// Preflight cache lifetime in seconds.
pub const MAX_AGE: &str = "86400";

/// Build a JSON response with the CORS allow-origin header attached.
pub fn json_response(status: StatusCode, body: &Value) -> Response {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN)
        .body(Body::from(body.to_string()))
        .expect("static header values are valid")
}

/// CORS preflight response: 200, empty body, allow and cache headers.
pub fn preflight_response() -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN)
        .header(header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS)
        .header(header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS)
        .header(header::ACCESS_CONTROL_MAX_AGE, MAX_AGE)
        .body(Body::empty())
        .expect("static header values are valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_response_sets_cors_and_content_type() {
        let response = json_response(StatusCode::OK, &json!({"success": true}));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[test]
    fn preflight_advertises_post_and_options() {
        let response = preflight_response();
        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "POST, OPTIONS"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "Content-Type, X-User-Id"
        );
        assert_eq!(headers.get(header::ACCESS_CONTROL_MAX_AGE).unwrap(), "86400");
    }
}
