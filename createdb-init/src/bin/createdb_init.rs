//! createdb-init - Container init step that creates the application database
//!
//! Reads POSTGRESQL_USER and POSTGRESQL_DATABASE, runs createdb once and
//! prints its return code. Exits with that code unless
//! CREATEDB_INIT_EXIT_WITH_STATUS=false.

use anyhow::{Context, Result};
use common::init_logging;
use createdb_init::InitConfig;
use std::io;
use std::process::ExitCode;
use tracing::{info, warn};

fn main() -> Result<ExitCode> {
    let _guard = init_logging("createdb-init");

    let config = InitConfig::from_env();
    info!(
        program = %config.createdb_path,
        exit_with_status = config.exit_with_status,
        "=== createdb-init ==="
    );

    let outcome = createdb_init::run(&config);

    outcome
        .report(&mut io::stdout().lock())
        .context("Failed to write createdb status")?;

    if !config.exit_with_status && !outcome.success() {
        warn!(code = outcome.code(), "Ignoring createdb failure for process exit code");
    }

    Ok(config.exit_code_for(&outcome))
}
