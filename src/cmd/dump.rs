// printenvz-rs: Null-Delimited Environment Dump - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dump command implementation.

use std::io::{self, BufWriter};

use tracing::debug;

use crate::core::dump::write_dump;
use crate::core::env::EnvSnapshot;
use crate::error::{DumpError, PrintenvzResult};

/// Captures the startup environment and writes the marker-delimited dump
/// to standard output.
///
/// # Errors
///
/// Returns [`DumpError::WriteFailed`] if any write to standard output fails.
pub fn run_dump_command() -> PrintenvzResult<()> {
    let snapshot = EnvSnapshot::capture();
    debug!(entries = snapshot.len(), "captured environment snapshot");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_dump(&mut out, &snapshot).map_err(|source| DumpError::WriteFailed { source })?;

    debug!("dump complete");
    Ok(())
}
