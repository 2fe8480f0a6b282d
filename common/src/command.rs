//! Command execution utilities
//!
//! Provides consistent blocking command execution with structured results.

use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors raised before a child process produced an exit status.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to execute {cmd}")]
    Spawn {
        cmd: String,
        #[source]
        source: io::Error,
    },
}

impl CommandError {
    /// The I/O error kind that prevented the spawn.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Spawn { source, .. } => source.kind(),
        }
    }
}

/// Result of a command execution.
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    /// Exit code, `None` when the child was terminated by a signal.
    pub code: Option<i32>,
    /// Terminating signal number, if any.
    pub signal: Option<i32>,
}

/// Run a command to completion and return its output.
///
/// Blocks until the child exits. The child inherits the current environment
/// and has stdin closed. A non-zero exit is not an error; inspect
/// `success`/`code` on the returned output.
#[instrument(skip_all, fields(cmd = %cmd))]
pub fn run(cmd: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
    debug!(args = ?args, "Running command");

    let output = Command::new(cmd)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| CommandError::Spawn {
            cmd: cmd.to_string(),
            source,
        })?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        success: output.status.success(),
        code: output.status.code(),
        signal: output.status.signal(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_exit_code_and_output() {
        let output = run("sh", &["-c", "echo out; echo err >&2; exit 3"]).unwrap();
        assert!(!output.success);
        assert_eq!(output.code, Some(3));
        assert_eq!(output.signal, None);
        assert_eq!(output.stdout, "out");
        assert_eq!(output.stderr, "err");
    }

    #[test]
    fn test_signal_termination_has_no_code() {
        let output = run("sh", &["-c", "kill -TERM $$"]).unwrap();
        assert!(!output.success);
        assert_eq!(output.code, None);
        assert_eq!(output.signal, Some(15));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let err = run("/nonexistent/bin/createdb", &[]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(err.to_string(), "failed to execute /nonexistent/bin/createdb");
    }
}
