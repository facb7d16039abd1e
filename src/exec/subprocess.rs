//! Blocking subprocess execution

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

/// Result of a subprocess execution
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code
    pub exit_code: i32,

    /// Captured standard output (empty when stdio is inherited)
    pub stdout: String,

    /// Captured standard error (empty when stdio is inherited)
    pub stderr: String,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(
        status: ExitStatus,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        let exit_code = status.code().unwrap_or(-1);
        Self {
            success: status.success(),
            exit_code,
            stdout,
            stderr,
            duration,
        }
    }
}

/// Run a command rooted at `cwd`
///
/// With `inherit_io` the child shares the terminal (interactive tools,
/// streaming test output); otherwise stdout/stderr are captured.
pub fn run_command(
    program: &Path,
    args: &[String],
    cwd: &Path,
    inherit_io: bool,
) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args).current_dir(cwd);

    if inherit_io {
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd
            .status()
            .with_context(|| format!("Failed to execute {}", program.display()))?;

        Ok(CommandResult::from_status(
            status,
            String::new(),
            String::new(),
            start.elapsed(),
        ))
    } else {
        let output = cmd
            .output()
            .with_context(|| format!("Failed to execute {}", program.display()))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        Ok(CommandResult::from_status(
            output.status,
            stdout,
            stderr,
            start.elapsed(),
        ))
    }
}
