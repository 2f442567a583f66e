//! Error types for the bouncy-balls core.

use thiserror::Error;

/// Errors produced by simulation, sampling, and rendering operations.
#[derive(Debug, Error)]
pub enum BounceError {
    /// Width or height was zero (or overflowed) when creating a pixel buffer.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A sampling configuration failed boundary validation.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// An image could not be decoded into a pixel buffer.
    #[error("decode failed: {0}")]
    Decode(String),

    /// An I/O failure (file read, snapshot write).
    #[error("io error: {0}")]
    Io(String),
}
