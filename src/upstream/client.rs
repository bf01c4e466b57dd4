//! Client for the fal.ai model endpoints.
//!
//! # Responsibilities
//! - Issue exactly one authenticated POST per generation
//! - Bound the call with the configured timeout
//! - Hand the raw reply back so the handler can relay status and details
//!
//! # Design Decisions
//! - No retry, no backoff: a failed generation is reported, not repeated
//! - The secret is carried as `Authorization: Key <secret>`
//! - Transport failures surface as a distinct error variant instead of
//!   crossing the handler boundary

use std::time::Duration;

use axum::http::StatusCode;
use reqwest::header::AUTHORIZATION;

use crate::config::UpstreamConfig;
use crate::error::GatewayError;
use crate::upstream::model::ModelKind;
use crate::upstream::payload::GenerationPayload;

/// Client for the two fixed fal.ai endpoints.
#[derive(Clone)]
pub struct FalClient {
    http: reqwest::Client,
    flux_url: String,
    sdxl_url: String,
    api_key: Option<String>,
}

/// Raw upstream reply: relayed status plus unparsed body text.
#[derive(Debug)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: String,
}

impl FalClient {
    /// Build a client from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            flux_url: config.flux_url.clone(),
            sdxl_url: config.sdxl_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Whether a non-empty API secret is present.
    pub fn api_key_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Endpoint URL for a model.
    pub fn endpoint(&self, model: ModelKind) -> &str {
        match model {
            ModelKind::Flux => &self.flux_url,
            ModelKind::Sdxl => &self.sdxl_url,
        }
    }

    /// POST one generation payload and hand back the raw reply.
    pub async fn generate(
        &self,
        model: ModelKind,
        payload: &GenerationPayload,
    ) -> Result<UpstreamReply, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(GatewayError::ApiKeyMissing)?;

        let response = self
            .http
            .post(self.endpoint(model))
            .header(AUTHORIZATION, format!("Key {api_key}"))
            .json(payload)
            .send()
            .await
            .map_err(GatewayError::UpstreamUnavailable)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(GatewayError::UpstreamUnavailable)?;

        Ok(UpstreamReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamConfig;

    #[test]
    fn key_must_be_present_and_non_empty() {
        let mut config = UpstreamConfig::default();
        assert!(!FalClient::new(&config).unwrap().api_key_configured());

        config.api_key = Some(String::new());
        assert!(!FalClient::new(&config).unwrap().api_key_configured());

        config.api_key = Some("k".to_string());
        assert!(FalClient::new(&config).unwrap().api_key_configured());
    }

    #[test]
    fn endpoints_follow_the_model() {
        let client = FalClient::new(&UpstreamConfig::default()).unwrap();
        assert_eq!(
            client.endpoint(ModelKind::Flux),
            "https://fal.run/fal-ai/flux-pro"
        );
        assert_eq!(
            client.endpoint(ModelKind::Sdxl),
            "https://fal.run/fal-ai/fast-sdxl"
        );
    }
}
