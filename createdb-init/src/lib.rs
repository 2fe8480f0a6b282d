//! First-start database provisioning for PostgreSQL containers
//!
//! Reads the owning role and database name from the environment, runs
//! `createdb` once, and reports its exit status.

pub mod config;
pub mod createdb;
pub mod outcome;

pub use config::{InitConfig, DEFAULT_CREATEDB_PATH};
pub use createdb::CreatedbCommand;
pub use outcome::CreatedbOutcome;

use tracing::{info, instrument};

/// Create the configured database. Blocks until createdb exits.
#[instrument(skip_all, fields(program = %config.createdb_path))]
pub fn run(config: &InitConfig) -> CreatedbOutcome {
    let command = CreatedbCommand::from_config(config);

    info!(
        owner = config.database_user.as_deref().unwrap_or("<unset>"),
        database = config.database_name.as_deref().unwrap_or("<unset>"),
        "Creating database"
    );

    let outcome = command.run();
    info!(code = outcome.code(), "createdb finished");
    outcome
}
