//! fal.ai upstream integration.
//!
//! # Data Flow
//! ```text
//! validated inbound request
//!     → model.rs (pick FLUX or SDXL)
//!     → payload.rs (compose prompt, build typed payload)
//!     → client.rs (one authenticated POST, bounded by a timeout)
//!     → response.rs (lenient extraction of images[0].url)
//! ```
//!
//! # Design Decisions
//! - The payload is a typed struct with explicit optional fields, so the
//!   two model branches can only differ in the documented ways
//! - No retry: a generation is issued exactly once per inbound request
//! - The raw reply body is kept so error details can be relayed verbatim

pub mod client;
pub mod model;
pub mod payload;
pub mod response;

pub use client::{FalClient, UpstreamReply};
pub use model::ModelKind;
pub use payload::{compose_full_prompt, GenerationPayload};
pub use response::extract_image_url;
