//! Destination for extracted text

use crate::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where extracted text goes. Status messages never go here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    /// File to create or overwrite
    File(PathBuf),
}

impl OutputTarget {
    /// Interpret the optional output argument; absent or `-` means stdout
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => OutputTarget::File(path),
            _ => OutputTarget::Stdout,
        }
    }

    /// Write `text` to this destination
    pub fn write(&self, text: &str) -> Result<()> {
        match self {
            OutputTarget::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                write_text(&mut handle, text)
            }
            OutputTarget::File(path) => {
                std::fs::write(path, text)?;
                tracing::info!("Written to {}", path.display());
                Ok(())
            }
        }
    }
}

fn write_text<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    writeln!(writer, "{}", text)?;
    writer.flush()?;
    Ok(())
}
