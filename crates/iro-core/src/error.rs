//! Error types for iro
//!
//! The per-color conversions are total and never fail. Errors only come from
//! buffer transforms and from parsing color space names.

use thiserror::Error;

/// Result type for iro operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in iro operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Color space name not recognized
    #[error("Unknown color space: {0}")]
    UnknownColorSpace(String),

    /// Operation not available for this color space
    #[error("Unsupported color space: {0}")]
    UnsupportedColorSpace(String),

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
