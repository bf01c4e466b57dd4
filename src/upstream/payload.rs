//! Prompt composition and payload construction.

use serde::Serialize;

use crate::upstream::model::ModelKind;

/// Output resolution requested from both models.
pub const IMAGE_SIZE: &str = "square_hd";

/// Images requested per generation.
pub const NUM_IMAGES: u32 = 1;

/// FLUX generation constants.
pub const FLUX_INFERENCE_STEPS: u32 = 28;
pub const FLUX_GUIDANCE_SCALE: f64 = 3.5;

/// SDXL generation constants.
pub const SDXL_INFERENCE_STEPS: u32 = 25;
pub const SDXL_GUIDANCE_SCALE: f64 = 7.5;

/// Prefix applied to the FLUX prompt when a source image is attached.
pub const TRANSFORM_PREFIX: &str = "Transform this person: ";

/// Data URI prefix for inline JPEG uploads.
pub const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Join the optional style onto the prompt.
pub fn compose_full_prompt(style: &str, prompt: &str) -> String {
    if style.is_empty() {
        prompt.to_string()
    } else {
        format!("{style}, {prompt}")
    }
}

/// JSON payload sent to a fal.ai model endpoint.
///
/// Optional fields are typed as `Option` and skipped when absent, so the
/// two model branches can only differ in the ways listed here: SDXL never
/// sends a safety-checker flag, and `image_url` is present only when the
/// caller attached an image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationPayload {
    pub prompt: String,
    pub image_size: &'static str,
    pub num_inference_steps: u32,
    pub guidance_scale: f64,
    pub num_images: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_safety_checker: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl GenerationPayload {
    /// Build the payload for one model.
    ///
    /// FLUX rewrites the prompt when a source image is attached; SDXL
    /// keeps the composed prompt untouched in that case.
    pub fn build(model: ModelKind, full_prompt: &str, image_base64: &str) -> Self {
        let image_url =
            (!image_base64.is_empty()).then(|| format!("{DATA_URI_PREFIX}{image_base64}"));

        match model {
            ModelKind::Flux => {
                let prompt = if image_url.is_some() {
                    format!("{TRANSFORM_PREFIX}{full_prompt}")
                } else {
                    full_prompt.to_string()
                };
                Self {
                    prompt,
                    image_size: IMAGE_SIZE,
                    num_inference_steps: FLUX_INFERENCE_STEPS,
                    guidance_scale: FLUX_GUIDANCE_SCALE,
                    num_images: NUM_IMAGES,
                    enable_safety_checker: Some(true),
                    image_url,
                }
            }
            ModelKind::Sdxl => Self {
                prompt: full_prompt.to_string(),
                image_size: IMAGE_SIZE,
                num_inference_steps: SDXL_INFERENCE_STEPS,
                guidance_scale: SDXL_GUIDANCE_SCALE,
                num_images: NUM_IMAGES,
                enable_safety_checker: None,
                image_url,
            },
        }
    }
}
