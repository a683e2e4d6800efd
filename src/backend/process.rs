//! Subprocess execution with a hard time budget

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Output, Stdio};
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Why a subprocess produced no output
#[derive(Error, Debug)]
pub enum RunError {
    /// The executable could not be started
    #[error("failed to spawn: {0}")]
    Spawn(#[from] std::io::Error),

    /// The budget elapsed; the child has been killed
    #[error("timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

/// Run `program` to completion, capturing stdout and stderr.
///
/// The child is killed if it outlives `budget`. A nonzero exit is not an
/// error here; callers inspect `Output::status`.
pub async fn run_with_timeout<I, S>(
    program: &Path,
    args: I,
    budget: Duration,
) -> Result<Output, RunError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    tracing::debug!(program = %program.display(), budget_secs = budget.as_secs(), "spawning");

    match tokio::time::timeout(budget, command.output()).await {
        Ok(output) => Ok(output?),
        Err(_) => {
            tracing::debug!(program = %program.display(), "budget elapsed, child killed");
            Err(RunError::Timeout(budget))
        }
    }
}
