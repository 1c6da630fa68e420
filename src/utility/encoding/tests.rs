// printenvz-rs: Null-Delimited Environment Dump - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::os_str_bytes;
use std::borrow::Cow;
use std::ffi::OsStr;

#[test]
fn test_ascii_passthrough() {
    let bytes = os_str_bytes(OsStr::new("PATH=/usr/bin"));
    assert_eq!(&*bytes, b"PATH=/usr/bin");
    assert!(matches!(bytes, Cow::Borrowed(_)));
}

#[test]
fn test_utf8_passthrough() {
    let bytes = os_str_bytes(OsStr::new("GRÜSSE=héllo"));
    assert_eq!(&*bytes, "GRÜSSE=héllo".as_bytes());
}

#[test]
#[cfg(unix)]
fn test_non_utf8_bytes_survive() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let raw = OsString::from_vec(vec![0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(&*os_str_bytes(&raw), [0xde, 0xad, 0xbe, 0xef]);
}
