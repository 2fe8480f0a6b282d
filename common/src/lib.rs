//! Shared utilities for container init components
//!
//! This crate provides common functionality used across init binaries:
//! - Structured logging initialization
//! - Environment variable parsing helpers
//! - Blocking command execution utilities

pub mod command;
pub mod config;
pub mod logging;

pub use command::{CommandError, CommandOutput};
pub use config::ConfigExt;
pub use logging::init_logging;
