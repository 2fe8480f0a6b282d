//! Outcome of a createdb run and how it is reported

use nix::sys::signal::Signal;
use std::io::{self, Write};

/// Status used when the executable does not exist.
pub const STATUS_NOT_FOUND: i32 = 127;

/// Status used when the executable exists but could not be started.
pub const STATUS_CANNOT_EXECUTE: i32 = 126;

/// How the createdb child finished, or why it never ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatedbOutcome {
    Exited(i32),
    Signaled(i32),
    NotFound(String),
    CannotExecute { program: String, reason: String },
}

impl CreatedbOutcome {
    /// Numeric status, following shell conventions for the non-exit cases.
    pub fn code(&self) -> i32 {
        match self {
            Self::Exited(code) => *code,
            Self::Signaled(signal) => 128 + signal,
            Self::NotFound(_) => STATUS_NOT_FOUND,
            Self::CannotExecute { .. } => STATUS_CANNOT_EXECUTE,
        }
    }

    pub fn success(&self) -> bool {
        self.code() == 0
    }

    pub fn status_line(&self) -> String {
        let code = self.code();
        match self {
            Self::Exited(_) => format!("createdb-init createdb return code {}", code),
            Self::Signaled(signal) => format!(
                "createdb-init createdb return code {} (terminated by {})",
                code,
                signal_name(*signal)
            ),
            Self::NotFound(program) => format!(
                "createdb-init createdb return code {} (not found: {})",
                code, program
            ),
            Self::CannotExecute { program, reason } => format!(
                "createdb-init createdb return code {} (cannot execute {}: {})",
                code, program, reason
            ),
        }
    }

    /// Write the status line to `out`.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.status_line())?;
        out.flush()
    }

    /// Status as a process exit status; codes outside 0..=255 become 1.
    pub fn exit_status(&self) -> u8 {
        u8::try_from(self.code()).unwrap_or(1)
    }
}

pub(crate) fn signal_name(signal: i32) -> String {
    Signal::try_from(signal)
        .map(|s| s.as_str().to_string())
        .unwrap_or_else(|_| format!("signal {}", signal))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reported(outcome: &CreatedbOutcome) -> String {
        let mut out = Vec::new();
        outcome.report(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_success_reports_zero() {
        let outcome = CreatedbOutcome::Exited(0);
        assert!(outcome.success());
        assert_eq!(reported(&outcome), "createdb-init createdb return code 0\n");
        assert_eq!(outcome.exit_status(), 0);
    }

    #[test]
    fn test_failure_reports_exact_code() {
        let outcome = CreatedbOutcome::Exited(1);
        assert!(!outcome.success());
        assert_eq!(reported(&outcome), "createdb-init createdb return code 1\n");
        assert_eq!(outcome.exit_status(), 1);
    }

    #[test]
    fn test_signal_maps_to_shell_convention() {
        let outcome = CreatedbOutcome::Signaled(9);
        assert_eq!(outcome.code(), 137);
        assert!(outcome.status_line().contains("SIGKILL"));
    }

    #[test]
    fn test_spawn_failures() {
        let missing = CreatedbOutcome::NotFound("/opt/createdb".to_string());
        assert_eq!(missing.code(), 127);
        assert!(missing.status_line().contains("/opt/createdb"));

        let denied = CreatedbOutcome::CannotExecute {
            program: "/opt/createdb".to_string(),
            reason: "permission denied".to_string(),
        };
        assert_eq!(denied.code(), 126);
    }

    #[test]
    fn test_out_of_range_code_still_fails() {
        assert_eq!(CreatedbOutcome::Exited(-1).exit_status(), 1);
        assert_eq!(CreatedbOutcome::Exited(300).exit_status(), 1);
    }

    #[test]
    fn test_unknown_signal_name() {
        assert_eq!(signal_name(200), "signal 200");
    }
}
