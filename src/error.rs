//! Error types for tile-canvas operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tile-canvas operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// PNG decoding error.
    #[error("PNG decoding error: {0}")]
    PngDecoding(#[from] png::DecodingError),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Corner radius larger than half the width or height of a rounded rect.
    #[error("Invalid geometry: radius {radius} exceeds half of {width}x{height}")]
    InvalidGeometry {
        /// Requested corner radius.
        radius: i32,
        /// Rectangle width.
        width: i32,
        /// Rectangle height.
        height: i32,
    },

    /// Alignment tag outside the known set.
    #[error("Unhandled alignment: {0}")]
    UnhandledAlignment(String),

    /// Circle quadrant or triangle edge tag outside the known set.
    #[error("Unhandled quadrant: {0}")]
    UnhandledQuadrant(String),

    /// Configuration parsing error with line number.
    #[error("Configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Image uses a pixel layout the sprite cache cannot expand to RGBA.
    #[error("Unsupported image format: {0}")]
    UnsupportedImage(String),
}
