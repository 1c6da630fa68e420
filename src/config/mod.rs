// printenvz-rs: Null-Delimited Environment Dump - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for printenvz-rs.
//!
//! Only diagnostics are configurable. The dump format, the sentinel
//! markers, and the entry order are fixed.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. printenvz.toml (cwd)
//! 3. --ini
//! 4. PRINTENVZ_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! PRINTENVZ_GLOBAL__LOG_FILE=/path      → global.log_file = "/path"
//! PRINTENVZ_GLOBAL__OUTPUT_LOG_LEVEL=4  → global.output_log_level = 4
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::logging::LogConfig;

use loader::ConfigLoader;
use types::GlobalConfig;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use printenvz_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("printenvz.toml")
    ///     .with_env_prefix("PRINTENVZ")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Config` structure.
    pub fn from_str(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Derive the logging configuration from the diagnostics settings.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::builder()
            .with_console_level(self.global.output_log_level)
            .with_file_level(self.global.file_log_level)
            .maybe_with_log_file(
                self.global
                    .log_file
                    .as_ref()
                    .map(|p| p.display().to_string()),
            )
            .build()
    }
}
