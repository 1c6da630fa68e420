// printenvz-rs: Null-Delimited Environment Dump - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform string to output byte conversion.
//!
//! ```text
//! OsStr --(unix)--> raw bytes, unmodified
//! OsStr --(else)--> UTF-8, lossy
//! ```
//!
//! The dump forwards entries byte-for-byte, so the conversion must not
//! normalize, re-encode, or truncate anything the platform can represent
//! as raw bytes. Only on non-Unix platforms, where the native environment
//! encoding is not byte-addressable, is a lossy UTF-8 conversion applied.

use std::borrow::Cow;
use std::ffi::OsStr;

#[cfg(test)]
mod tests;

/// Returns the raw bytes of a platform string.
#[cfg(unix)]
#[must_use]
pub fn os_str_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(s.as_bytes())
}

/// Returns the UTF-8 bytes of a platform string, lossily converted.
#[cfg(not(unix))]
#[must_use]
pub fn os_str_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    match s.to_string_lossy() {
        Cow::Borrowed(utf8) => Cow::Borrowed(utf8.as_bytes()),
        Cow::Owned(utf8) => Cow::Owned(utf8.into_bytes()),
    }
}
