//! OCR extraction: rasterize with pdftoppm, recognize with tesseract
//!
//! Pages are rendered into a scratch directory that lives exactly as long
//! as one [`extract_ocr`] call. A page that tesseract cannot read is
//! skipped; the document only fails when no page yields text.

use crate::backend::probe::{find_backend, Backend};
use crate::backend::process::{run_with_timeout, RunError};
use crate::config::ExtractorConfig;
use crate::error::ExtractionError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Separator placed between the text of consecutive pages
pub const PAGE_BREAK: &str = "\n\n--- Page Break ---\n\n";

const PAGE_PREFIX: &str = "page";

/// One rasterized page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    /// 1-based page number parsed from the file name
    pub index: u32,
    pub path: PathBuf,
}

/// Extract text from `pdf` by OCR.
pub async fn extract_ocr(pdf: &Path, config: &ExtractorConfig) -> Result<String, ExtractionError> {
    let search_path = config.search_path.as_deref();
    let tesseract = find_backend(Backend::Tesseract, search_path);
    let pdftoppm = find_backend(Backend::PdfToPpm, search_path);

    let (tesseract, pdftoppm) = match (tesseract, pdftoppm) {
        (Some(tesseract), Some(pdftoppm)) => (tesseract, pdftoppm),
        (tesseract, pdftoppm) => {
            let mut packages = Vec::new();
            if tesseract.is_none() {
                packages.push(Backend::Tesseract.package());
            }
            if pdftoppm.is_none() {
                packages.push(Backend::PdfToPpm.package());
            }
            return Err(ExtractionError::OcrUnavailable { packages });
        }
    };

    let scratch = tempfile::Builder::new().prefix("pdf-ocr-").tempdir()?;
    tracing::debug!(dir = %scratch.path().display(), "created OCR scratch directory");

    let result = ocr_document(pdf, scratch.path(), &pdftoppm, &tesseract, config).await;

    if let Err(e) = scratch.close() {
        tracing::warn!(error = %e, "failed to remove OCR scratch directory");
    }
    result
}

async fn ocr_document(
    pdf: &Path,
    scratch: &Path,
    pdftoppm: &Path,
    tesseract: &Path,
    config: &ExtractorConfig,
) -> Result<String, ExtractionError> {
    rasterize(pdf, scratch, pdftoppm, config).await?;

    let pages = collect_page_images(scratch)?;
    if pages.is_empty() {
        return Err(ExtractionError::NoPages);
    }
    tracing::info!("OCR processing {} page(s)...", pages.len());

    let mut texts = Vec::with_capacity(pages.len());
    for page in &pages {
        if let Some(text) = ocr_page(page, tesseract, config).await {
            texts.push(text);
        }
    }

    if texts.is_empty() {
        return Err(ExtractionError::NoText);
    }
    if texts.len() < pages.len() {
        tracing::warn!(
            "OCR skipped {} of {} page(s)",
            pages.len() - texts.len(),
            pages.len()
        );
    }
    Ok(texts.join(PAGE_BREAK))
}

/// Render every page of `pdf` to `<dir>/page-N.png`
async fn rasterize(
    pdf: &Path,
    dir: &Path,
    pdftoppm: &Path,
    config: &ExtractorConfig,
) -> Result<(), ExtractionError> {
    let args: Vec<OsString> = vec![
        "-png".into(),
        "-r".into(),
        config.dpi.to_string().into(),
        pdf.as_os_str().to_os_string(),
        dir.join(PAGE_PREFIX).into_os_string(),
    ];

    match run_with_timeout(pdftoppm, &args, config.rasterize_timeout).await {
        Ok(output) if output.status.success() => Ok(()),
        Ok(output) => Err(ExtractionError::RasterizeFailed {
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }),
        Err(RunError::Timeout(_)) => Err(ExtractionError::RasterizeTimeout),
        Err(RunError::Spawn(e)) => Err(ExtractionError::RasterizeFailed {
            stderr: e.to_string(),
        }),
    }
}

/// List the page images in `dir`, ordered by page number.
///
/// pdftoppm pads the page number to the width of the page count, so the
/// order is taken from the parsed number rather than the file name.
pub fn collect_page_images(dir: &Path) -> Result<Vec<PageImage>, ExtractionError> {
    let pattern = format!(
        "{}/{}-*.png",
        glob::Pattern::escape(&dir.to_string_lossy()),
        PAGE_PREFIX
    );
    let entries = glob::glob(&pattern).map_err(|e| {
        ExtractionError::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
    })?;

    let mut pages = Vec::new();
    for entry in entries {
        let path = entry.map_err(glob::GlobError::into_error)?;
        match page_index(&path) {
            Some(index) => pages.push(PageImage { index, path }),
            None => tracing::debug!(path = %path.display(), "ignoring unnumbered image"),
        }
    }
    pages.sort_by_key(|page| page.index);
    Ok(pages)
}

fn page_index(path: &Path) -> Option<u32> {
    let stem = path.file_stem()?.to_str()?;
    let number = stem.strip_prefix(PAGE_PREFIX)?.strip_prefix('-')?;
    number.parse().ok()
}

async fn ocr_page(page: &PageImage, tesseract: &Path, config: &ExtractorConfig) -> Option<String> {
    let args: Vec<OsString> = vec![
        page.path.as_os_str().to_os_string(),
        "stdout".into(),
        "-l".into(),
        config.ocr_language.as_str().into(),
    ];

    match run_with_timeout(tesseract, &args, config.page_ocr_timeout).await {
        Ok(output) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(output) => {
            tracing::debug!(
                page = page.index,
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "tesseract failed, skipping page"
            );
            None
        }
        Err(e) => {
            tracing::debug!(page = page.index, error = %e, "tesseract did not run, skipping page");
            None
        }
    }
}
