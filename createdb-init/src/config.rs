//! Initializer configuration from environment variables

use crate::outcome::CreatedbOutcome;
use common::ConfigExt;
use std::process::ExitCode;

/// Location of `createdb` in the deployment image.
pub const DEFAULT_CREATEDB_PATH: &str = "/opt/rh/rh-postgresql95/root/usr/bin/createdb";

/// Configuration for a single createdb run.
///
/// Unset variables become `None` and set-but-empty ones `Some("")`; nothing
/// is validated here, `createdb` decides what it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitConfig {
    pub database_user: Option<String>,
    pub database_name: Option<String>,
    pub createdb_path: String,
    /// Use the createdb status as this process' exit code.
    pub exit_with_status: bool,
}

impl InitConfig {
    pub fn new(database_user: Option<&str>, database_name: Option<&str>) -> Self {
        Self {
            database_user: database_user.map(str::to_string),
            database_name: database_name.map(str::to_string),
            createdb_path: DEFAULT_CREATEDB_PATH.to_string(),
            exit_with_status: true,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            database_user: String::env_opt("POSTGRESQL_USER"),
            database_name: String::env_opt("POSTGRESQL_DATABASE"),
            createdb_path: String::env_or("CREATEDB_PATH", DEFAULT_CREATEDB_PATH),
            exit_with_status: bool::env_bool("CREATEDB_INIT_EXIT_WITH_STATUS", true),
        }
    }

    pub fn with_createdb_path(mut self, path: impl Into<String>) -> Self {
        self.createdb_path = path.into();
        self
    }

    pub fn with_exit_with_status(mut self, exit_with_status: bool) -> Self {
        self.exit_with_status = exit_with_status;
        self
    }

    /// Process exit status for this run: the createdb status, or 0 when
    /// failures are only reported.
    pub fn exit_status_for(&self, outcome: &CreatedbOutcome) -> u8 {
        if self.exit_with_status {
            outcome.exit_status()
        } else {
            0
        }
    }

    pub fn exit_code_for(&self, outcome: &CreatedbOutcome) -> ExitCode {
        ExitCode::from(self.exit_status_for(outcome))
    }
}
