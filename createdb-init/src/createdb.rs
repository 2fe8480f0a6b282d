//! createdb invocation
//!
//! Builds the `createdb -O <owner> <database>` argv and runs it once,
//! turning every way it can end into a [`CreatedbOutcome`].

use crate::config::InitConfig;
use crate::outcome::{signal_name, CreatedbOutcome};
use common::command::{self, CommandError, CommandOutput};
use std::io;
use tracing::{debug, error, info, warn};

const OWNER_FLAG: &str = "-O";

/// A fully constructed createdb invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedbCommand {
    program: String,
    owner: Option<String>,
    database: Option<String>,
}

impl CreatedbCommand {
    pub fn from_config(config: &InitConfig) -> Self {
        Self {
            program: config.createdb_path.clone(),
            owner: config.database_user.clone(),
            database: config.database_name.clone(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments after the program name, always `-O <owner> <database>`.
    ///
    /// Absent values are passed as empty strings so createdb rejects them
    /// instead of falling back to its own defaults.
    pub fn args(&self) -> Vec<&str> {
        vec![
            OWNER_FLAG,
            self.owner.as_deref().unwrap_or_default(),
            self.database.as_deref().unwrap_or_default(),
        ]
    }

    /// Run createdb and wait for it to exit. Never retries.
    pub fn run(&self) -> CreatedbOutcome {
        match command::run(&self.program, &self.args()) {
            Ok(output) => self.outcome_from_output(output),
            Err(e) => self.outcome_from_spawn_error(e),
        }
    }

    fn outcome_from_output(&self, output: CommandOutput) -> CreatedbOutcome {
        if !output.stdout.is_empty() {
            debug!(stdout = %output.stdout, "createdb output");
        }

        match (output.code, output.signal) {
            (Some(code), _) => {
                if output.success {
                    if !output.stderr.is_empty() {
                        debug!(stderr = %output.stderr, "createdb diagnostics");
                    }
                    info!(code, "createdb succeeded");
                } else {
                    warn!(code, stderr = %output.stderr, "createdb failed");
                }
                CreatedbOutcome::Exited(code)
            }
            (None, Some(signal)) => {
                warn!(
                    signal = %signal_name(signal),
                    stderr = %output.stderr,
                    "createdb terminated by signal"
                );
                CreatedbOutcome::Signaled(signal)
            }
            // An exit status always carries one of the two on unix.
            (None, None) => CreatedbOutcome::Exited(1),
        }
    }

    fn outcome_from_spawn_error(&self, e: CommandError) -> CreatedbOutcome {
        error!(program = %self.program, error = %e, kind = ?e.kind(), "Could not start createdb");
        match e.kind() {
            io::ErrorKind::NotFound => CreatedbOutcome::NotFound(self.program.clone()),
            _ => CreatedbOutcome::CannotExecute {
                program: self.program.clone(),
                reason: std::error::Error::source(&e)
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| e.to_string()),
            },
        }
    }
}
