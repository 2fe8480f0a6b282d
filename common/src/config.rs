//! Environment variable parsing helpers
//!
//! Provides ergonomic helpers for reading configuration from environment variables.

use std::env;

/// Extension trait for parsing environment variables.
///
/// Provides convenient methods for reading env vars with defaults, optional
/// values, and booleans.
pub trait ConfigExt {
    /// Get an environment variable with a default value.
    ///
    /// # Example
    /// ```ignore
    /// let path = String::env_or("CREATEDB_PATH", "/usr/bin/createdb");
    /// ```
    fn env_or(name: &str, default: &str) -> String {
        env::var(name).unwrap_or_else(|_| default.to_string())
    }

    /// Get an environment variable, `None` only when it is not set.
    ///
    /// A set-but-empty variable is returned as `Some("")`.
    ///
    /// # Example
    /// ```ignore
    /// let owner = String::env_opt("POSTGRESQL_USER");
    /// ```
    fn env_opt(name: &str) -> Option<String> {
        env::var(name).ok()
    }

    /// Get an environment variable as a boolean.
    ///
    /// Returns `true` for "true"/"1"/"yes", `false` for "false"/"0"/"no"
    /// (case-insensitive), otherwise `default`.
    fn env_bool(name: &str, default: bool) -> bool {
        match env::var(name).map(|v| v.trim().to_lowercase()) {
            Ok(v) if matches!(v.as_str(), "true" | "1" | "yes") => true,
            Ok(v) if matches!(v.as_str(), "false" | "0" | "no") => false,
            _ => default,
        }
    }
}

// Blanket implementation for all types
impl<T> ConfigExt for T {}
