//! Fake backend executables for driving the pipeline without poppler or
//! tesseract installed.

#![allow(dead_code)]

use pdf_text_fallback::ExtractorConfig;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Text that passes the quality checks
pub const GOOD_TEXT: &str = "Some text here that will pass when each word gets read okay.";

/// A private bin directory plus an invocation log shared by its scripts
pub struct FakeBin {
    dir: TempDir,
    log: PathBuf,
}

impl FakeBin {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create fake bin dir");
        let log = dir.path().join("invocations.log");
        std::fs::write(&log, "").expect("Failed to create invocation log");
        Self { dir, log }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Install `name` as a shell script. `body` sees the backend's
    /// arguments as `$1..`; the invocation is logged before it runs.
    pub fn script(&self, name: &str, body: &str) -> &Self {
        let path = self.dir.path().join(name);
        let contents = format!(
            "#!/bin/sh\nPATH=/usr/bin:/bin\necho \"{} $*\" >> '{}'\n{}\n",
            name,
            self.log.display(),
            body
        );
        std::fs::write(&path, contents).expect("Failed to write fake backend");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod fake backend");
        self
    }

    /// pdftotext printing `text`
    pub fn pdftotext(&self, text: &str) -> &Self {
        self.script("pdftotext", &format!("cat <<'PDFTEXT'\n{}\nPDFTEXT", text))
    }

    /// pdftoppm producing `pages` empty page images
    pub fn pdftoppm(&self, pages: u32) -> &Self {
        self.script(
            "pdftoppm",
            &format!(
                "i=1\nwhile [ $i -le {} ]; do : > \"$5-$i.png\"; i=$((i+1)); done",
                pages
            ),
        )
    }

    /// tesseract answering "text of page-N", failing on the listed pages
    pub fn tesseract_failing_on(&self, failing: &[u32]) -> &Self {
        let mut body = String::from("name=${1##*/}\nname=${name%.png}\ncase \"$name\" in\n");
        for page in failing {
            body.push_str(&format!("  page-{}) exit 1 ;;\n", page));
        }
        body.push_str("esac\nprintf 'text of %s' \"$name\"");
        self.script("tesseract", &body)
    }

    pub fn tesseract(&self) -> &Self {
        self.tesseract_failing_on(&[])
    }

    /// Logged invocations, one line each
    pub fn invocations(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .expect("Failed to read invocation log")
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn invoked(&self, program: &str) -> bool {
        let prefix = format!("{} ", program);
        self.invocations().iter().any(|line| line.starts_with(&prefix))
    }

    /// Config whose search path is only this directory
    pub fn config(&self) -> ExtractorConfig {
        ExtractorConfig {
            search_path: Some(self.dir.path().as_os_str().to_os_string()),
            ..ExtractorConfig::default()
        }
    }
}

/// A placeholder input document; backends are fake so content is irrelevant
pub fn sample_pdf(dir: &Path) -> PathBuf {
    let path = dir.join("sample.pdf");
    std::fs::write(&path, b"%PDF-1.4\n%%EOF\n").expect("Failed to write sample PDF");
    path
}
