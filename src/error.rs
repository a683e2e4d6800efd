//! Error types for pdf-text-fallback

use std::time::Duration;
use thiserror::Error;

/// Result type alias for pdf-text-fallback
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error types
#[derive(Error, Debug)]
pub enum Error {
    /// Input file does not exist
    #[error("{path} not found")]
    PdfNotFound { path: String },

    /// Every extraction tier failed; carries the last tier's diagnostic
    #[error("{0}")]
    Extraction(#[from] ExtractionError),

    /// Configuration value could not be parsed
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure half of an extraction result.
///
/// The `Display` output is the diagnostic shown to the operator when the
/// final tier fails, so the bracketed variants are kept verbatim.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Backend executable could not be resolved on the search path
    #[error("{program} not found")]
    BackendMissing { program: &'static str },

    /// Backend ran but exited unsuccessfully
    #[error("{program} exited with {status}")]
    BackendFailed {
        program: &'static str,
        status: String,
        stderr: String,
    },

    /// Backend exceeded its time budget and was killed
    #[error("{program} timed out after {}s", .budget.as_secs())]
    BackendTimeout {
        program: &'static str,
        budget: Duration,
    },

    /// OCR dependencies missing; lists package names
    #[error("[OCR requires: {}]", .packages.join(", "))]
    OcrUnavailable { packages: Vec<&'static str> },

    /// Rasterizer exited unsuccessfully
    #[error("[pdftoppm failed: {stderr}]")]
    RasterizeFailed { stderr: String },

    /// Rasterizer exceeded its time budget
    #[error("[pdftoppm timeout]")]
    RasterizeTimeout,

    /// Rasterizer produced no page images
    #[error("[No pages extracted]")]
    NoPages,

    /// Every page failed OCR
    #[error("[OCR produced no text]")]
    NoText,

    /// Scratch directory or page listing failed
    #[error("[OCR scratch error: {0}]")]
    Io(#[from] std::io::Error),
}
