// printenvz-rs: Null-Delimited Environment Dump - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end tests against the built binary.
//!
//! Each test launches `printenvz` with a controlled environment and checks
//! the marker-delimited block on stdout plus the exit code.

use std::collections::HashSet;
use std::process::{Command, Output};

const BEGIN: &[u8] = b"--printenvz--begin\n";
const END: &[u8] = b"\n--printenvz--end\n";

fn printenvz() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_printenvz"));
    cmd.env_clear();
    cmd
}

/// Extracts the null-terminated entries between the markers.
fn entries(output: &Output) -> Vec<Vec<u8>> {
    let stdout = &output.stdout;
    assert!(stdout.starts_with(BEGIN), "missing begin marker");
    assert!(stdout.ends_with(END), "missing end marker");

    let block = &stdout[BEGIN.len()..stdout.len() - END.len()];
    if block.is_empty() {
        return Vec::new();
    }
    assert_eq!(block.last(), Some(&0), "last entry not null-terminated");

    block[..block.len() - 1]
        .split(|&b| b == 0)
        .map(<[u8]>::to_vec)
        .collect()
}

#[test]
fn empty_environment_is_byte_exact() {
    let output = printenvz().output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"--printenvz--begin\n\n--printenvz--end\n");
    assert!(output.stderr.is_empty(), "default run must not touch stderr");
}

#[test]
fn entries_match_launch_environment() {
    let output = printenvz()
        .env("PATH", "/usr/bin")
        .env("HOME", "/home/u")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));

    let got: HashSet<Vec<u8>> = entries(&output).into_iter().collect();
    let want: HashSet<Vec<u8>> =
        [b"PATH=/usr/bin".to_vec(), b"HOME=/home/u".to_vec()].into();
    assert_eq!(got, want);
}

#[test]
fn entry_count_matches_launch_environment() {
    let mut cmd = printenvz();
    for i in 0..12 {
        cmd.env(format!("VAR{i}"), format!("value{i}"));
    }
    let output = cmd.output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(entries(&output).len(), 12);
}

#[test]
fn values_are_forwarded_verbatim() {
    let output = printenvz()
        .env("TRICKY", "spaces and = signs")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(entries(&output), [b"TRICKY=spaces and = signs".to_vec()]);
}

#[test]
fn operands_do_not_change_the_dump() {
    let output = printenvz().args(["these", "are", "ignored"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"--printenvz--begin\n\n--printenvz--end\n");
}

#[test]
fn diagnostics_stay_off_stdout() {
    let output = printenvz().args(["-l", "4"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"--printenvz--begin\n\n--printenvz--end\n");
}
