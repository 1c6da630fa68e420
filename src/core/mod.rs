// printenvz-rs: Null-Delimited Environment Dump - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core functionality.
//!
//! ```text
//! env    ordered startup snapshot of NAME=VALUE entries
//! dump   sentinel markers + null-terminated entry writer
//! ```

pub mod dump;
pub mod env;
