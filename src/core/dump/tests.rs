// printenvz-rs: Null-Delimited Environment Dump - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the dump writer.

use super::{BEGIN_MARKER, END_MARKER, write_dump};
use crate::core::env::EnvSnapshot;
use std::io::{self, Write};

fn render(snapshot: &EnvSnapshot) -> Vec<u8> {
    let mut out = Vec::new();
    write_dump(&mut out, snapshot).unwrap();
    out
}

#[test]
fn test_markers() {
    insta::assert_snapshot!(BEGIN_MARKER, @"--printenvz--begin");
    insta::assert_snapshot!(END_MARKER, @"--printenvz--end");
}

#[test]
fn test_empty_environment() {
    let out = render(&EnvSnapshot::default());
    assert_eq!(out, b"--printenvz--begin\n\n--printenvz--end\n");
}

#[test]
fn test_two_entries_byte_exact() {
    let snapshot = EnvSnapshot::from_pairs([("PATH", "/usr/bin"), ("HOME", "/home/u")]);
    let out = render(&snapshot);

    assert_eq!(
        out,
        b"--printenvz--begin\nPATH=/usr/bin\0HOME=/home/u\0\n--printenvz--end\n"
    );
}

#[test]
fn test_order_is_preserved() {
    let snapshot = EnvSnapshot::from_pairs([("ZZZ", "last-name-first"), ("AAA", "first-name-last")]);
    let out = render(&snapshot);

    assert_eq!(
        out,
        b"--printenvz--begin\nZZZ=last-name-first\0AAA=first-name-last\0\n--printenvz--end\n"
    );
}

#[test]
fn test_content_is_forwarded_verbatim() {
    // Newlines, '=' and blanks inside values pass through untouched
    let snapshot = EnvSnapshot::from_pairs([("A", "line1\nline2"), ("B", ""), ("C", "x=y z")]);
    let out = render(&snapshot);

    assert_eq!(
        out,
        b"--printenvz--begin\nA=line1\nline2\0B=\0C=x=y z\0\n--printenvz--end\n"
    );
}

#[test]
fn test_entry_count_matches_snapshot() {
    let snapshot = EnvSnapshot::from_pairs((0..17).map(|i| (format!("VAR{i}"), format!("{i}"))));
    let out = render(&snapshot);

    let nulls = out.iter().filter(|&&b| b == 0).count();
    assert_eq!(nulls, snapshot.len());
}

/// Sink that fails every write with `BrokenPipe`.
struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_failure_is_surfaced() {
    let snapshot = EnvSnapshot::from_pairs([("K", "v")]);
    let err = write_dump(&mut BrokenSink, &snapshot).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}
