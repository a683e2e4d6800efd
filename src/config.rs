//! Extraction configuration

use crate::error::{Error, Result};
use crate::quality::QualityHeuristic;
use std::ffi::OsString;
use std::time::Duration;

/// Environment variable overriding the OCR language code
pub const ENV_OCR_LANG: &str = "EXTRACT_OCR_LANG";
/// Environment variable overriding the rasterization DPI
pub const ENV_OCR_DPI: &str = "EXTRACT_OCR_DPI";

/// Time budgets, rendering and recognition settings for one extraction
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Budget for the whole pdftotext run (default: 60s)
    pub native_timeout: Duration,
    /// Budget for rasterizing the whole document (default: 120s)
    pub rasterize_timeout: Duration,
    /// Budget for OCR of a single page (default: 60s)
    pub page_ocr_timeout: Duration,
    /// Rasterization resolution (default: 300)
    pub dpi: u32,
    /// Tesseract language code (default: "eng")
    pub ocr_language: String,
    /// Thresholds deciding whether native output is usable
    pub quality: QualityHeuristic,
    /// Directories searched for backend executables, in `PATH` syntax.
    /// `None` means the process `PATH`.
    pub search_path: Option<OsString>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            native_timeout: Duration::from_secs(60),
            rasterize_timeout: Duration::from_secs(120),
            page_ocr_timeout: Duration::from_secs(60),
            dpi: 300,
            ocr_language: "eng".to_string(),
            quality: QualityHeuristic::default(),
            search_path: None,
        }
    }
}

impl ExtractorConfig {
    /// Defaults with overrides from `EXTRACT_OCR_LANG` and `EXTRACT_OCR_DPI`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(lang) = lookup(ENV_OCR_LANG) {
            let lang = lang.trim();
            if lang.is_empty() {
                return Err(Error::InvalidConfig {
                    reason: format!("{} is empty", ENV_OCR_LANG),
                });
            }
            config.ocr_language = lang.to_string();
        }

        if let Some(dpi) = lookup(ENV_OCR_DPI) {
            config.dpi = match dpi.trim().parse::<u32>() {
                Ok(value) if value > 0 => value,
                _ => {
                    return Err(Error::InvalidConfig {
                        reason: format!(
                            "{} must be a positive integer, got {:?}",
                            ENV_OCR_DPI, dpi
                        ),
                    })
                }
            };
        }

        Ok(config)
    }
}
