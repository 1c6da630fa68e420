// printenvz-rs: Null-Delimited Environment Dump - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for printenvz-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! printenvz [global options] [ARG]...
//! ```
//!
//! There are no subcommands. Operands are accepted for compatibility with
//! the original tool and never inspected; the only recognized options are
//! the diagnostics surface.

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::Parser;
use std::ffi::OsString;

/// Null-Delimited Environment Dump - Rust Port
///
/// Prints the inherited process environment between two sentinel marker
/// lines, one null byte after each entry.
#[derive(Debug, Parser)]
#[command(
    name = "printenvz",
    author,
    version,
    about = "Null-delimited environment dump",
    long_about = "printenvz-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Prints every environment variable inherited at startup to\n\
                  standard output in the order the platform supplies them, each\n\
                  entry terminated by a null byte, wrapped between the literal\n\
                  lines `--printenvz--begin` and `--printenvz--end`. Operands\n\
                  are accepted and ignored; diagnostics are opt-in and go to\n\
                  standard error, never into the dump.",
    after_help = "INI FILES:\n\n\
                  By default, printenvz looks for `printenvz.toml` in the current\n\
                  directory and loads it when present. Additional INIs can be\n\
                  specified with --ini, loaded after the default one so they\n\
                  override it. Use --no-default-inis to disable auto detection\n\
                  and only use --ini. Only diagnostics settings live there; the\n\
                  dump format is fixed."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Ignored operands, kept so invocations written for the original
    /// tool keep working.
    #[arg(value_name = "ARG", trailing_var_arg = true, allow_hyphen_values = true)]
    pub operands: Vec<OsString>,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
