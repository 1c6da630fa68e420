// printenvz-rs: Null-Delimited Environment Dump - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable capture.
//!
//! # Architecture
//!
//! ```text
//! EnvSnapshot (immutable Vec<EnvEntry>, platform order)
//! Sources: EnvSnapshot::capture(), EnvSnapshot::from_pairs()
//! Ops: iter/len/is_empty/get
//! ```
//!
//! - **Order-preserving**: entries stay in the order the platform iterator
//!   yields them, never sorted or deduplicated
//! - **Platform strings**: `OsString` throughout, so non-UTF-8 names and
//!   values on Unix survive capture unmodified
//! - **Read-only**: the snapshot is taken once and never mutated

pub mod snapshot;


pub use snapshot::{EnvEntry, EnvSnapshot};
