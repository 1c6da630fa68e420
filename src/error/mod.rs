// printenvz-rs: Null-Delimited Environment Dump - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          PrintenvzError (~24 bytes)
//!                   |
//!        +----------+----------+
//!        |          |          |
//!        v          v          v
//!       Dump      Config    Io/Other
//!       Box        Box      Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Dump    WriteFailed
//!   Config  ReadError, ParseError, InvalidValue, NotFound
//!
//! All variants boxed => PrintenvzError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PrintenvzError`].
pub type PrintenvzResult<T> = std::result::Result<T, PrintenvzError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum PrintenvzError {
    /// Environment dump failed.
    #[error("dump error: {0}")]
    Dump(#[from] Box<DumpError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PrintenvzError {
                fn from(err: $error) -> Self {
                    PrintenvzError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    DumpError => Dump,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Dump Errors ---

/// Environment dump errors.
///
/// The only operation capable of failing is a write to the output stream.
#[derive(Debug, Error)]
pub enum DumpError {
    /// A write to standard output failed (closed pipe, full disk, ...).
    #[error("failed to write environment dump to stdout: {source}")]
    WriteFailed {
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}
