//! External process invocation shared by template sources and installers

use camino::Utf8Path;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Why an external tool did not complete successfully
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("{program} not found in PATH")]
    NotFound { program: String },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Resolve `program` on PATH
pub fn locate(program: &str) -> Result<PathBuf, ProcessError> {
    which::which(program).map_err(|_| ProcessError::NotFound {
        program: program.to_string(),
    })
}

/// Run `program` to completion with the console streams inherited.
///
/// No timeout is applied; the tool runs until it exits on its own.
pub async fn run_inherited(
    program: &str,
    args: &[String],
    current_dir: Option<&Utf8Path>,
) -> Result<(), ProcessError> {
    let executable = locate(program)?;

    let mut cmd = Command::new(&executable);
    cmd.args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    if let Some(dir) = current_dir {
        cmd.current_dir(dir);
    }

    debug!("Running: {} {}", program, args.join(" "));
    let status = cmd.status().await.map_err(|source| ProcessError::Spawn {
        program: program.to_string(),
        source,
    })?;

    if !status.success() {
        return Err(ProcessError::Failed {
            program: program.to_string(),
            status,
        });
    }

    Ok(())
}
