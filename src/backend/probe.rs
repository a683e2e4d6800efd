//! Backend discovery on the executable search path

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// External programs the extractors delegate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Native PDF-to-text converter
    PdfToText,
    /// OCR engine
    Tesseract,
    /// PDF page rasterizer
    PdfToPpm,
}

impl Backend {
    pub const ALL: [Backend; 3] = [Backend::PdfToText, Backend::Tesseract, Backend::PdfToPpm];

    /// Executable name looked up on the search path
    pub fn program(self) -> &'static str {
        match self {
            Backend::PdfToText => "pdftotext",
            Backend::Tesseract => "tesseract",
            Backend::PdfToPpm => "pdftoppm",
        }
    }

    /// Distribution package that ships the executable
    pub fn package(self) -> &'static str {
        match self {
            Backend::PdfToText | Backend::PdfToPpm => "poppler-utils",
            Backend::Tesseract => "tesseract-ocr",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Resolved location of every backend, `None` when absent.
///
/// Built fresh for each lookup; installed tools may change between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    pdftotext: Option<PathBuf>,
    tesseract: Option<PathBuf>,
    pdftoppm: Option<PathBuf>,
}

impl Capabilities {
    /// Probe all backends. `search_path` uses `PATH` syntax; `None` reads
    /// the process `PATH`.
    pub fn probe(search_path: Option<&OsStr>) -> Self {
        let search_path = resolve_search_path(search_path);
        let find = |backend: Backend| find_in(backend.program(), search_path.as_deref());
        Self {
            pdftotext: find(Backend::PdfToText),
            tesseract: find(Backend::Tesseract),
            pdftoppm: find(Backend::PdfToPpm),
        }
    }

    /// Location of `backend`, if it was found
    pub fn get(&self, backend: Backend) -> Option<&Path> {
        match backend {
            Backend::PdfToText => self.pdftotext.as_deref(),
            Backend::Tesseract => self.tesseract.as_deref(),
            Backend::PdfToPpm => self.pdftoppm.as_deref(),
        }
    }

    pub fn has(&self, backend: Backend) -> bool {
        self.get(backend).is_some()
    }

    /// All backends with their resolved locations, in probe order
    pub fn iter(&self) -> impl Iterator<Item = (Backend, Option<&Path>)> + '_ {
        Backend::ALL.into_iter().map(move |b| (b, self.get(b)))
    }
}

/// Resolve a single backend without probing the others
pub fn find_backend(backend: Backend, search_path: Option<&OsStr>) -> Option<PathBuf> {
    let search_path = resolve_search_path(search_path);
    find_in(backend.program(), search_path.as_deref())
}

fn resolve_search_path(search_path: Option<&OsStr>) -> Option<OsString> {
    match search_path {
        Some(path) => Some(path.to_os_string()),
        None => std::env::var_os("PATH"),
    }
}

fn find_in(program: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    let search_path = search_path?;
    std::env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(&dir, program))
        .find(|candidate| is_executable(candidate))
}

#[cfg(not(windows))]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    vec![dir.join(program)]
}

#[cfg(windows)]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    vec![dir.join(format!("{}.exe", program)), dir.join(program)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
