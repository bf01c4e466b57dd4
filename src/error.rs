//! Error taxonomy and HTTP rendering.
//!
//! # Responsibilities
//! - Enumerate every way a generation request can fail
//! - Map each failure to an HTTP status and a JSON error body
//! - Keep upstream details attached where the caller needs them
//!
//! # Design Decisions
//! - Nothing escapes the handler as a panic or a bare transport error;
//!   every variant renders as a structured response
//! - Upstream application errors relay the upstream status verbatim
//! - Transport and decode failures map to 502 Bad Gateway

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::http::response::json_response;

/// Failures a generation request can end in.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Request used a method other than POST or OPTIONS.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The upstream API secret is absent from the configuration.
    #[error("FAL_API_KEY not configured")]
    ApiKeyMissing,

    /// The request body was present but not valid JSON.
    #[error("Invalid request body")]
    InvalidBody,

    /// The prompt was empty after defaulting.
    #[error("Prompt is required")]
    PromptRequired,

    /// Upstream answered with a non-200 status; relayed verbatim.
    #[error("Generation failed")]
    UpstreamStatus { status: StatusCode, details: String },

    /// Upstream could not be reached (timeout, DNS failure, reset).
    #[error("Upstream request failed")]
    UpstreamUnavailable(#[source] reqwest::Error),

    /// Upstream said 200 but the body was not JSON.
    #[error("Invalid upstream response")]
    UpstreamDecode(#[source] serde_json::Error),
}

impl GatewayError {
    /// HTTP status this error renders as.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::ApiKeyMissing => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::InvalidBody => StatusCode::BAD_REQUEST,
            GatewayError::PromptRequired => StatusCode::BAD_REQUEST,
            GatewayError::UpstreamStatus { status, .. } => *status,
            GatewayError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            GatewayError::UpstreamDecode(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Extra detail attached to the error body, where one exists.
    fn details(&self) -> Option<String> {
        match self {
            GatewayError::UpstreamStatus { details, .. } => Some(details.clone()),
            GatewayError::UpstreamUnavailable(e) => Some(e.to_string()),
            GatewayError::UpstreamDecode(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let mut body = json!({ "error": self.to_string() });
        if let Some(details) = self.details() {
            body["details"] = json!(details);
        }
        json_response(self.status(), &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            GatewayError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            GatewayError::ApiKeyMissing.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(GatewayError::PromptRequired.status(), StatusCode::BAD_REQUEST);
        assert_eq!(GatewayError::InvalidBody.status(), StatusCode::BAD_REQUEST);

        let relayed = GatewayError::UpstreamStatus {
            status: StatusCode::SERVICE_UNAVAILABLE,
            details: "overloaded".into(),
        };
        assert_eq!(relayed.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn upstream_status_renders_details() {
        let error = GatewayError::UpstreamStatus {
            status: StatusCode::SERVICE_UNAVAILABLE,
            details: "overloaded".into(),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Generation failed");
        assert_eq!(body["details"], "overloaded");
    }

    #[tokio::test]
    async fn client_errors_render_without_details() {
        let response = GatewayError::PromptRequired.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Prompt is required");
        assert!(body.get("details").is_none());
    }
}
