//! The generation request handler.
//!
//! # Responsibilities
//! - Method dispatch: OPTIONS serves the CORS preflight, POST runs a
//!   generation, everything else is rejected
//! - Parse the inbound body with per-field defaults
//! - Validate the prompt and the configured secret before any upstream work
//! - Map the upstream reply to the outbound response
//!
//! # Design Decisions
//! - Dispatch is method-driven, not path-driven; every path reaches this
//!   handler so the gateway behaves like a single function URL
//! - An absent or empty body is treated as an empty JSON object
//! - The secret check runs before body parsing

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use crate::error::GatewayError;
use crate::http::request::RequestIdExt;
use crate::http::response::{json_response, preflight_response};
use crate::http::server::AppState;
use crate::upstream::{compose_full_prompt, extract_image_url, GenerationPayload, ModelKind};

/// Inbound generation request.
///
/// Every field is optional on the wire; missing fields take the defaults
/// below, and validation happens after defaulting.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerateRequest {
    /// Model name. "flux" targets FLUX; anything else falls back to SDXL.
    pub model: String,
    /// Prompt text. Must be non-empty.
    pub prompt: String,
    /// Base64-encoded source image bytes.
    pub image: String,
    /// Style prefix, prepended to the prompt.
    pub style: String,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            model: "flux".to_string(),
            prompt: String::new(),
            image: String::new(),
            style: String::new(),
        }
    }
}

/// Single entry point for every path and method.
pub async fn generate(State(state): State<AppState>, request: Request<Body>) -> Response {
    if request.method() == Method::OPTIONS {
        return preflight_response();
    }
    if request.method() != Method::POST {
        return GatewayError::MethodNotAllowed.into_response();
    }

    let request_id = request.request_id().unwrap_or("unknown").to_string();
    match run_generation(&state, request).await {
        Ok(response) => response,
        Err(error) => {
            tracing::warn!(
                request_id = %request_id,
                status = %error.status(),
                error = %error,
                "Generation request failed"
            );
            error.into_response()
        }
    }
}

/// Run one generation: validate, build the payload, call upstream, relay.
async fn run_generation(
    state: &AppState,
    request: Request<Body>,
) -> Result<Response, GatewayError> {
    let request_id = request.request_id().unwrap_or("unknown").to_string();

    // Secret presence is checked before the body is even read.
    if !state.fal.api_key_configured() {
        return Err(GatewayError::ApiKeyMissing);
    }

    let limit = state.config.security.max_body_size;
    let body = to_bytes(request.into_body(), limit)
        .await
        .map_err(|_| GatewayError::InvalidBody)?;

    let inbound: GenerateRequest = if body.is_empty() {
        GenerateRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            tracing::debug!(request_id = %request_id, error = %e, "Body rejected");
            GatewayError::InvalidBody
        })?
    };

    if inbound.prompt.is_empty() {
        return Err(GatewayError::PromptRequired);
    }

    let model = ModelKind::from_name(&inbound.model);
    let full_prompt = compose_full_prompt(&inbound.style, &inbound.prompt);
    let payload = GenerationPayload::build(model, &full_prompt, &inbound.image);

    tracing::info!(
        request_id = %request_id,
        model = %inbound.model,
        endpoint = %state.fal.endpoint(model),
        has_image = payload.image_url.is_some(),
        "Forwarding generation request"
    );

    let reply = state.fal.generate(model, &payload).await?;

    if reply.status != StatusCode::OK {
        return Err(GatewayError::UpstreamStatus {
            status: reply.status,
            details: reply.body,
        });
    }

    let image_url = extract_image_url(&reply.body).map_err(GatewayError::UpstreamDecode)?;

    Ok(json_response(
        StatusCode::OK,
        &json!({
            "success": true,
            "image_url": image_url,
            "model": inbound.model,
            "prompt": full_prompt,
        }),
    ))
}
