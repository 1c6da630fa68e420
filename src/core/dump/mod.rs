// printenvz-rs: Null-Delimited Environment Dump - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Null-delimited environment dump writer.
//!
//! # Wire Format
//!
//! ```text
//! --printenvz--begin\n
//! <entry_1>\0<entry_2>\0...<entry_n>\0
//! \n--printenvz--end\n
//! ```
//!
//! Each entry is the raw `NAME=VALUE` bytes of one variable. No separator
//! other than the trailing null byte of each entry; the block of entries is
//! followed by a single newline before the end marker line. An empty
//! environment produces the two markers with the bare inter-block newline
//! between them.

use std::io::Write;

use crate::core::env::EnvSnapshot;

#[cfg(test)]
mod tests;

/// Line written before the entry block.
pub const BEGIN_MARKER: &str = "--printenvz--begin";

/// Line written after the entry block.
pub const END_MARKER: &str = "--printenvz--end";

/// Writes the marker-delimited dump of `snapshot` to `out` and flushes.
///
/// The byte sequence is identical for any sink, so tests can run against an
/// in-memory buffer while the command wires this to standard output.
///
/// # Errors
///
/// Returns the first write or flush error. The original C printenvz left
/// these unchecked; this port reports a closed pipe or full disk instead of
/// silently truncating the block.
pub fn write_dump<W: Write>(out: &mut W, snapshot: &EnvSnapshot) -> std::io::Result<()> {
    out.write_all(BEGIN_MARKER.as_bytes())?;
    out.write_all(b"\n")?;

    for entry in snapshot {
        out.write_all(&entry.wire_bytes())?;
        out.write_all(b"\0")?;
    }

    out.write_all(b"\n")?;
    out.write_all(END_MARKER.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}
