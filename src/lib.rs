//! Stateless HTTP gateway for fal.ai image generation.
//!
//! Receives a prompt (plus optional style and source image), selects one of
//! two fixed model endpoints, forwards a single generation request upstream,
//! and relays the resulting image URL back to the caller.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request            ┌──────────────────────────────────────┐
//!     ─────────────────────────▶│  http::server (router + middleware)  │
//!                               │        │                             │
//!                               │        ▼                             │
//!                               │  http::handler (dispatch, validate)  │
//!                               │        │                             │
//!                               │        ▼                             │
//!     Client Response           │  upstream::FalClient ────────────────┼──▶ fal.run
//!     ◀─────────────────────────│  http::response (JSON + CORS)        │
//!                               └──────────────────────────────────────┘
//!
//!     Cross-cutting: config, error, lifecycle, tracing
//! ```
//!
//! Every invocation is independent. The gateway holds no state between
//! requests beyond an immutable configuration and a pooled HTTP client.

// Core subsystems
pub mod config;
pub mod http;
pub mod upstream;

// Cross-cutting concerns
pub mod error;
pub mod lifecycle;
