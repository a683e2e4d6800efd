//! Extraction pipeline: native text first, OCR when that is unusable
//!
//! The chain has exactly one fallback tier. pdftotext runs at most once;
//! if it is missing, fails, or its output is judged garbage, the document
//! goes to OCR and whatever OCR reports is final.

use crate::backend::{extract_native, extract_ocr, Backend, Capabilities};
use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::source::resolve_path;
use std::fmt;
use std::path::Path;

/// Which tier produced the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Native,
    Ocr,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Native => f.write_str("pdftotext"),
            Tier::Ocr => f.write_str("OCR"),
        }
    }
}

/// Successful extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub text: String,
    pub tier: Tier,
}

/// Runs the native-then-OCR decision chain for one document
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: ExtractorConfig,
}

impl Pipeline {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Probe the backends visible to this pipeline
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::probe(self.config.search_path.as_deref())
    }

    /// Extract text from the PDF at `path`.
    ///
    /// Fails with `Error::PdfNotFound` before any backend runs if the file
    /// is missing, and with `Error::Extraction` carrying the OCR diagnostic
    /// when both tiers fail.
    pub async fn extract(&self, path: &Path) -> Result<Extracted> {
        let pdf = resolve_path(path)?;

        let caps = self.capabilities();
        tracing::info!(
            "[Tools: pdftotext={}, tesseract={}]",
            mark(caps.has(Backend::PdfToText)),
            mark(caps.has(Backend::Tesseract))
        );

        if caps.has(Backend::PdfToText) {
            tracing::info!("Trying pdftotext...");
            match extract_native(&pdf.path, false, &self.config).await {
                Ok(text) if !self.config.quality.is_garbage(&text) => {
                    return Ok(self.finish(text, Tier::Native));
                }
                Ok(_) => tracing::info!("pdftotext output looks like garbage/empty, trying OCR..."),
                Err(e) => {
                    tracing::debug!(error = %e, "native extraction failed");
                    tracing::info!("pdftotext failed, trying OCR...");
                }
            }
        }

        tracing::info!("Trying OCR (this may take a while)...");
        let text = extract_ocr(&pdf.path, &self.config).await?;
        Ok(self.finish(text, Tier::Ocr))
    }

    fn finish(&self, text: String, tier: Tier) -> Extracted {
        tracing::info!("Success: {} extracted {} chars", tier, text.chars().count());
        Extracted { text, tier }
    }
}

fn mark(present: bool) -> &'static str {
    if present {
        "✓"
    } else {
        "✗"
    }
}
