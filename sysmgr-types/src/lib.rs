//! Value primitives for the systems-management model layer.
//!
//! This crate defines the service-agnostic building blocks every generated
//! entity field is made of:
//! - [`Timestamp`], an absolute instant normalized to UTC
//! - [`HashCode`], portable structural hash codes with fixed combining rules
//! - [`Render`], the diagnostic text form used by entity debug rendering
//!
//! Entity-level contracts (presence, fluent setters, metadata) live in
//! `sysmgr-model`, not here.

mod hash;
mod render;
mod timestamp;

pub use hash::{HASH_PRIME, HASH_SEED, HashCode, combine, optional_hash};
pub use render::{Render, rendered};
pub use timestamp::{EXACT_FRACTIONAL_MILLIS, Timestamp};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing value primitives.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("timestamp parse error: {0}")]
    TimestampParse(#[from] chrono::ParseError),
}
