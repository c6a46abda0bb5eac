//! Error handling for tracescope.
//!
//! The drag-coordination core itself has no failure paths by contract:
//! clamping is total, unregistering an unknown marker is a no-op, and
//! failures inside embedder-supplied callbacks propagate unmodified.
//! The error type covers the parse surfaces around it.

use thiserror::Error;

/// Tracescope error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A transition tag string did not match any known transition type.
    #[error("Unknown transition type: {0}")]
    UnknownTransitionType(String),
}

/// Result alias using the tracescope [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
