//! # msglog-ports
//!
//! Port traits for the msglog hexagonal architecture.
//!
//! This crate defines the seams between the composition pipeline and its
//! strategies and collaborators: resolvers, renderers, sinks, and clocks. It
//! depends only on `domain` and `shared`.

/// Returns the ports crate version.
#[must_use]
pub const fn ports_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub mod record;
pub mod render;
pub mod resolve;
pub mod sink;

pub use record::*;
pub use render::*;
pub use resolve::*;
pub use sink::*;

// Re-export domain types used in port signatures, so adapter crates can
// implement ports without naming `msglog-domain` for the common cases.
pub use msglog_domain::{Detail, MessageNumber, Severity, Status, StatusBucket};
