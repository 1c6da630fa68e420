// printenvz-rs: Null-Delimited Environment Dump - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for printenvz-rs.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig
//! GlobalConfig: output_log_level, file_log_level, log_file
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Log level for console diagnostics on stderr (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. File logging is disabled when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            // Silent by default: stdout carries the dump block and a plain
            // invocation must not touch stderr either.
            output_log_level: LogLevel::SILENT,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}
