//! extract - Entry point
//!
//! Extract text from a PDF, falling back to OCR when pdftotext output is
//! unusable. Text goes to stdout or a file; status goes to stderr.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use pdf_text_fallback::{Capabilities, Error, ExtractorConfig, OutputTarget, Pipeline};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Extract text from a PDF with automatic OCR fallback
#[derive(Parser, Debug)]
#[command(
    name = "extract",
    about,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Path to the input PDF
    input: Option<PathBuf>,

    /// Output file; omit or use "-" for stdout
    output: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_text_fallback=info,extract=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let Some(input) = cli.input else {
        print_usage();
        return Ok(ExitCode::FAILURE);
    };

    let config = ExtractorConfig::from_env()?;
    let pipeline = Pipeline::new(config);
    let target = OutputTarget::from_arg(cli.output);

    match pipeline.extract(&input).await {
        Ok(extracted) => {
            target.write(&extracted.text).context("failed to write output")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(Error::Extraction(e)) => {
            tracing::error!("Failed: {}", e);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn print_usage() {
    println!("{}", Cli::command().render_help());
    println!("\nInstalled tools:");
    for (backend, location) in Capabilities::probe(None).iter() {
        match location {
            Some(path) => println!("  {}: ✓ {}", backend, path.display()),
            None => println!("  {}: ✗ not found", backend),
        }
    }
}
