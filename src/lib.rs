//! PDF text extraction with OCR fallback
//!
//! This crate extracts plain text from a PDF:
//! - `pdftotext` is tried first for documents with a usable text layer
//! - output that is missing, unreadable, or garbage triggers OCR
//!   (`pdftoppm` rasterization followed by `tesseract`, page by page)

pub mod backend;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod quality;
pub mod source;

pub use backend::{Backend, Capabilities, PAGE_BREAK};
pub use config::ExtractorConfig;
pub use error::{Error, ExtractionError, Result};
pub use output::OutputTarget;
pub use pipeline::{Extracted, Pipeline, Tier};
pub use quality::{is_garbage_text, QualityHeuristic};
