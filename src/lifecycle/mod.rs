//! Process lifecycle coordination.
//!
//! # Design Decisions
//! - Shutdown is signalled once over a broadcast channel; every
//!   long-running task holds its own receiver
//! - Triggering is idempotent and never blocks

pub mod shutdown;

pub use shutdown::Shutdown;
