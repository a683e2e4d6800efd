//! Input document resolution

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// A PDF on disk that extraction may be attempted on
#[derive(Debug, Clone)]
pub struct ResolvedPdf {
    pub path: PathBuf,
}

/// Resolve a file path to a document.
///
/// The file must exist. A missing `.pdf` extension only logs a warning;
/// extraction is attempted regardless.
pub fn resolve_path<P: AsRef<Path>>(path: P) -> Result<ResolvedPdf> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::PdfNotFound {
            path: path.display().to_string(),
        });
    }

    if !has_pdf_extension(path) {
        tracing::warn!("{} may not be a PDF", path.display());
    }

    Ok(ResolvedPdf {
        path: path.to_path_buf(),
    })
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}
