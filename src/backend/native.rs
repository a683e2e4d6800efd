//! Direct text extraction with pdftotext

use crate::backend::probe::{find_backend, Backend};
use crate::backend::process::{run_with_timeout, RunError};
use crate::config::ExtractorConfig;
use crate::error::ExtractionError;
use std::ffi::OsString;
use std::path::Path;

/// Extract the embedded text layer of `pdf`.
///
/// `layout` asks pdftotext to keep the physical page layout. Any failure
/// (missing executable, nonzero exit, timeout) discards whatever the
/// backend printed; no partial output is recovered.
pub async fn extract_native(
    pdf: &Path,
    layout: bool,
    config: &ExtractorConfig,
) -> Result<String, ExtractionError> {
    let program = Backend::PdfToText.program();
    let executable = find_backend(Backend::PdfToText, config.search_path.as_deref())
        .ok_or(ExtractionError::BackendMissing { program })?;

    let mut args: Vec<OsString> = Vec::with_capacity(3);
    if layout {
        args.push("-layout".into());
    }
    args.push(pdf.as_os_str().to_os_string());
    args.push("-".into());

    let output = match run_with_timeout(&executable, &args, config.native_timeout).await {
        Ok(output) => output,
        Err(RunError::Spawn(e)) => {
            tracing::debug!(error = %e, "pdftotext could not be started");
            return Err(ExtractionError::BackendMissing { program });
        }
        Err(RunError::Timeout(budget)) => {
            return Err(ExtractionError::BackendTimeout { program, budget });
        }
    };

    if !output.status.success() {
        return Err(ExtractionError::BackendFailed {
            program,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
